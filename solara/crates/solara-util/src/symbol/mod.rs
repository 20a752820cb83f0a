//! Symbol module - String interning for identifiers and literals.
//!
//! This module provides the [`Symbol`] type, a compact (4-byte) handle to a
//! string stored in a [`StringTable`]. Tokens carry symbols instead of owned
//! text, so the lexeme of every identifier and literal is stored once per
//! compilation no matter how often it appears.
//!
//! # Overview
//!
//! - **Dense handles**: the n-th distinct string interned gets index n
//! - **Stable**: a handle never changes or gets reused for the table's lifetime
//! - **Owned by the compilation**: each [`CompilerContext`] has its own table,
//!   there is no process-wide interner
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | [`StringTable::intern`] | O(n) hash of the text |
//! | [`StringTable::resolve`] | O(1) index |
//! | `Symbol` comparison | O(1) |
//!
//! For scanning several files on different threads, wrap the table in a
//! [`SharedStringTable`], which serializes inserts behind a lock.
//!
//! # Examples
//!
//! ```
//! use solara_util::symbol::StringTable;
//!
//! let mut table = StringTable::new();
//! let a = table.intern("count");
//! let b = table.intern("count");
//! let c = table.intern("total");
//!
//! assert_eq!(a, b);
//! assert_ne!(a, c);
//! assert_eq!(table.resolve(c), "total");
//! ```
//!
//! [`CompilerContext`]: crate::CompilerContext

mod interner;
mod shared;

pub use interner::StringTable;
pub use shared::SharedStringTable;

use std::fmt;

/// Statistics about the string interner for profiling
///
/// # Fields
///
/// * `count` - Number of unique interned strings
/// * `hits` - Number of times an already-interned string was requested
/// * `misses` - Number of times a new string was stored
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InternerStats {
    /// Number of interned strings
    pub count: usize,
    /// Number of cache hits (string already interned)
    pub hits: usize,
    /// Number of cache misses (new string stored)
    pub misses: usize,
}

impl InternerStats {
    /// Calculate the hit rate (hits / (hits + misses))
    ///
    /// Returns 0.0 if nothing has been interned yet.
    ///
    /// ```
    /// use solara_util::symbol::InternerStats;
    ///
    /// let stats = InternerStats { count: 10, hits: 90, misses: 10 };
    /// assert_eq!(stats.hit_rate(), 0.9);
    /// ```
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_operations();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Total number of interning operations
    pub fn total_operations(&self) -> usize {
        self.hits + self.misses
    }
}

/// Symbol - An interned string handle
///
/// A `Symbol` is only meaningful together with the [`StringTable`] that
/// produced it. Index `0` is an ordinary handle (the first string interned),
/// not a "missing" marker: lookups that can fail return `Option<Symbol>`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    index: u32,
}

impl Symbol {
    /// Create a symbol from a table index
    ///
    /// # Panics
    ///
    /// Panics if `index` does not fit in a `u32`, which would mean more than
    /// four billion distinct strings in one compilation.
    #[inline]
    pub(crate) fn from_usize(index: usize) -> Self {
        assert!(index <= u32::MAX as usize, "string table overflow");
        Self {
            index: index as u32,
        }
    }

    /// Create a symbol from a raw index
    ///
    /// The result may not be valid for any table; check it with
    /// [`StringTable::is_valid`] before trusting it.
    #[inline]
    pub const fn from_u32(index: u32) -> Self {
        Self { index }
    }

    /// Get the raw index value
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.index
    }

    /// Get the index as a `usize` for table lookups
    #[inline]
    pub const fn as_usize(self) -> usize {
        self.index as usize
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.index)
    }
}

static_assertions::assert_eq_size!(Symbol, u32);
static_assertions::assert_impl_all!(Symbol: Send, Sync, Copy);
