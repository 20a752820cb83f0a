//! String table implementation backed by an insertion-ordered hash set.
//!
//! Strings live in an [`IndexSet`] keyed with the Fx hasher. The position of
//! a string in the set is its handle, which gives dense handles, O(1)
//! resolution, and a single hash lookup for deduplication.

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

use super::{InternerStats, Symbol};
use crate::error::{SymbolError, SymbolResult};

/// Initial capacity of a fresh table
const INITIAL_CAPACITY: usize = 256;

/// Per-compilation string table
///
/// Handles are assigned in insertion order starting at 0 and are never
/// reused. The table only grows.
#[derive(Clone, Debug)]
pub struct StringTable {
    strings: IndexSet<Box<str>, FxBuildHasher>,
    hits: usize,
    misses: usize,
}

impl StringTable {
    /// Create a new empty string table
    pub fn new() -> Self {
        Self {
            strings: IndexSet::with_capacity_and_hasher(INITIAL_CAPACITY, FxBuildHasher),
            hits: 0,
            misses: 0,
        }
    }

    /// Intern a string, returning its symbol
    ///
    /// If the text is already present the existing symbol is returned and the
    /// stored copy is left untouched.
    #[inline]
    pub fn intern(&mut self, text: &str) -> Symbol {
        self.intern_full(text).0
    }

    /// Intern a string, also reporting whether it was newly added
    ///
    /// ```
    /// use solara_util::symbol::StringTable;
    ///
    /// let mut table = StringTable::new();
    /// let (sym, added) = table.intern_full("x");
    /// assert!(added);
    /// assert_eq!(table.intern_full("x"), (sym, false));
    /// ```
    pub fn intern_full(&mut self, text: &str) -> (Symbol, bool) {
        if let Some(index) = self.strings.get_index_of(text) {
            self.hits += 1;
            return (Symbol::from_usize(index), false);
        }

        self.misses += 1;
        let (index, _) = self.strings.insert_full(Box::from(text));
        (Symbol::from_usize(index), true)
    }

    /// Get the text of a symbol
    ///
    /// Returns `""` for a handle this table never issued. Prefer
    /// [`StringTable::get`] when a dangling handle must be detected.
    #[inline]
    pub fn resolve(&self, symbol: Symbol) -> &str {
        self.get(symbol).unwrap_or("")
    }

    /// Get the text of a symbol, or `None` for an invalid handle
    #[inline]
    pub fn get(&self, symbol: Symbol) -> Option<&str> {
        self.strings.get_index(symbol.as_usize()).map(|s| &**s)
    }

    /// Get the text of a symbol, failing with [`SymbolError`] for an invalid handle
    pub fn try_resolve(&self, symbol: Symbol) -> SymbolResult<&str> {
        self.get(symbol).ok_or(SymbolError::InvalidHandle {
            index: symbol.as_u32(),
            len: self.strings.len(),
        })
    }

    /// Find the symbol of already-interned text without adding it
    #[inline]
    pub fn lookup(&self, text: &str) -> Option<Symbol> {
        self.strings.get_index_of(text).map(Symbol::from_usize)
    }

    /// Returns true if the text has been interned
    #[inline]
    pub fn contains(&self, text: &str) -> bool {
        self.strings.contains(text)
    }

    /// Returns true if the symbol was issued by this table
    #[inline]
    pub fn is_valid(&self, symbol: Symbol) -> bool {
        symbol.as_usize() < self.strings.len()
    }

    /// Number of distinct strings
    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Returns true if nothing has been interned
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Iterate over all entries in handle order
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> + '_ {
        self.strings
            .iter()
            .enumerate()
            .map(|(index, text)| (Symbol::from_usize(index), &**text))
    }

    /// Get statistics about the string table for profiling
    pub fn stats(&self) -> InternerStats {
        InternerStats {
            count: self.strings.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

impl Default for StringTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_intern_same_string() {
        let mut table = StringTable::new();
        let s1 = table.intern("hello");
        let s2 = table.intern("hello");
        assert_eq!(s1, s2);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_intern_different_strings() {
        let mut table = StringTable::new();
        let s1 = table.intern("hello");
        let s2 = table.intern("world");
        assert_ne!(s1, s2);
    }

    #[test]
    fn test_handles_follow_insertion_order() {
        let mut table = StringTable::new();
        let first = table.intern("first");
        let second = table.intern("second");
        let _ = table.intern("first");
        let third = table.intern("third");

        assert_eq!(first.as_u32(), 0);
        assert_eq!(second.as_u32(), 1);
        assert_eq!(third.as_u32(), 2);
    }

    #[test]
    fn test_first_handle_is_found_by_lookup() {
        let mut table = StringTable::new();
        let first = table.intern("zero");
        assert_eq!(first.as_u32(), 0);
        assert_eq!(table.lookup("zero"), Some(first));
        assert_eq!(table.lookup("absent"), None);
    }

    #[test]
    fn test_resolve_invalid_handle_is_empty() {
        let mut table = StringTable::new();
        let _ = table.intern("only");
        let bogus = Symbol::from_u32(99);

        assert!(!table.is_valid(bogus));
        assert_eq!(table.resolve(bogus), "");
        assert_eq!(table.get(bogus), None);
        assert_eq!(
            table.try_resolve(bogus),
            Err(SymbolError::InvalidHandle { index: 99, len: 1 })
        );
    }

    #[test]
    fn test_contains_does_not_insert() {
        let mut table = StringTable::new();
        assert!(!table.contains("ghost"));
        assert!(table.is_empty());

        let _ = table.intern("ghost");
        assert!(table.contains("ghost"));
    }

    #[test]
    fn test_empty_string() {
        let mut table = StringTable::new();
        let s = table.intern("");
        assert!(table.is_valid(s));
        assert_eq!(table.get(s), Some(""));
    }

    #[test]
    fn test_unicode_strings() {
        let mut table = StringTable::new();
        for text in ["你好", "🦀", "Привет"] {
            let sym = table.intern(text);
            assert_eq!(table.resolve(sym), text);
        }
    }

    #[test]
    fn test_iter_in_handle_order() {
        let mut table = StringTable::new();
        let a = table.intern("a");
        let b = table.intern("b");
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries, vec![(a, "a"), (b, "b")]);
    }

    #[test]
    fn test_stats_tracking() {
        let mut table = StringTable::new();
        let _ = table.intern("x");
        let _ = table.intern("x");
        let _ = table.intern("y");

        let stats = table.stats();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.hits, 1);
    }

    #[quickcheck]
    fn prop_intern_is_idempotent(text: String) -> bool {
        let mut table = StringTable::new();
        let first = table.intern(&text);
        let second = table.intern(&text);
        first == second && table.resolve(first) == text
    }

    #[quickcheck]
    fn prop_distinct_strings_get_distinct_handles(a: String, b: String) -> bool {
        let mut table = StringTable::new();
        let sa = table.intern(&a);
        let sb = table.intern(&b);
        (a == b) == (sa == sb)
    }
}
