//! Lock-protected string table for scanning files in parallel.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use super::{StringTable, Symbol};

/// A [`StringTable`] that can be shared between threads
///
/// Cloning is cheap and yields another handle to the same table. Interning
/// takes the write lock, so the check-then-insert sequence cannot race.
///
/// ```
/// use solara_util::symbol::SharedStringTable;
///
/// let table = SharedStringTable::new();
/// let other = table.clone();
///
/// let a = table.intern("shared");
/// assert_eq!(other.intern("shared"), a);
/// assert_eq!(other.read().resolve(a), "shared");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedStringTable {
    inner: Arc<RwLock<StringTable>>,
}

impl SharedStringTable {
    /// Create a new empty shared table
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing table
    pub fn from_table(table: StringTable) -> Self {
        Self {
            inner: Arc::new(RwLock::new(table)),
        }
    }

    /// Intern a string, returning its symbol
    ///
    /// Already-interned text is found under the read lock; only new text
    /// takes the write lock.
    pub fn intern(&self, text: &str) -> Symbol {
        if let Some(symbol) = self.inner.read().lookup(text) {
            return symbol;
        }
        self.inner.write().intern(text)
    }

    /// Copy out the text of a symbol
    pub fn get(&self, symbol: Symbol) -> Option<String> {
        self.inner.read().get(symbol).map(str::to_owned)
    }

    /// Lock the table for reading, e.g. to resolve many symbols at once
    pub fn read(&self) -> RwLockReadGuard<'_, StringTable> {
        self.inner.read()
    }

    /// Number of distinct strings
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns true if nothing has been interned
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

static_assertions::assert_impl_all!(SharedStringTable: Send, Sync);
