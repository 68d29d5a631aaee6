//! String interner for identifier and string-literal storage.
//!
//! Interned strings are leaked to obtain `'static` lifetimes, so lookups
//! hand out references with no lifetime ties to the interner guard. The
//! interner lives for a whole run; the leak is bounded by the source text.

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Storage shared behind the lock.
struct InternStore {
    /// Map from string content to index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents, indexed by `Name::raw`.
    strings: Vec<&'static str>,
}

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// Interner exceeded capacity (over 4 billion strings).
    Overflow { count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::Overflow { count } => write!(
                f,
                "interner exceeded capacity: {count} strings, max is {}",
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for InternError {}

/// String interner.
///
/// Provides O(1) lookup and equality comparison for interned strings.
/// Uses an `RwLock` so a shared reference suffices for interning, which
/// lets the lexer intern while the driver holds the interner immutably.
pub struct StringInterner {
    store: RwLock<InternStore>,
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned at `Name::EMPTY`.
    pub fn new() -> Self {
        let mut store = InternStore {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        };
        let empty: &'static str = "";
        store.map.insert(empty, 0);
        store.strings.push(empty);
        let interner = Self {
            store: RwLock::new(store),
        };
        interner.pre_intern_builtins();
        interner
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        // Fast path: already interned
        {
            let guard = self.store.read();
            if let Some(&idx) = guard.map.get(s) {
                return Ok(Name::from_raw(idx));
            }
        }

        let mut guard = self.store.write();

        // Double-check after acquiring write lock
        if let Some(&idx) = guard.map.get(s) {
            return Ok(Name::from_raw(idx));
        }

        // Leak the string to get 'static lifetime
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());

        let idx = u32::try_from(guard.strings.len()).map_err(|_| InternError::Overflow {
            count: guard.strings.len(),
        })?;
        guard.strings.push(leaked);
        guard.map.insert(leaked, idx);
        Ok(Name::from_raw(idx))
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if the interner exceeds capacity (over 4 billion strings).
    /// Use `try_intern` for fallible interning.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Look up the string for a Name.
    ///
    /// The `'static` return is sound because interned strings are leaked
    /// and never deallocated.
    pub fn lookup(&self, name: Name) -> &'static str {
        let guard = self.store.read();
        guard.strings[name.raw() as usize]
    }

    /// Number of interned strings.
    pub fn len(&self) -> usize {
        self.store.read().strings.len()
    }

    /// Check if the interner holds no strings.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pre-intern the builtin function names so evaluator dispatch tables
    /// can be built without write-locking mid-run.
    fn pre_intern_builtins(&self) {
        const BUILTINS: &[&str] = &["set", "puts", "concat", "str", "add", "max"];
        for b in BUILTINS {
            self.intern(b);
        }
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
