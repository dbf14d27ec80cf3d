//! Argument-keyed memoization for pure derivations.
//!
//! [`Memoized`] wraps a deterministic function and caches its result per key.
//! The key type is chosen by the call site and must be `Hash + Eq`, so an
//! unhashable argument is a compile error rather than a silent cache miss.
//!
//! The cache never evicts: a generation run is a finite, single pass, and
//! every derivation stays valid for its whole duration.
//!
//! # Threading
//!
//! The table lives in a `RefCell`, which makes `Memoized` `!Sync`. Hosts
//! that need to share a cache across threads must wrap it themselves.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use rustc_hash::FxHashMap;

/// A pure function with a per-key result cache.
///
/// For any key, the wrapped function runs at most once; later calls return
/// the same shared result (`Rc::ptr_eq` holds between them).
pub struct Memoized<K, V, F> {
    func: F,
    cache: RefCell<FxHashMap<K, Rc<V>>>,
    hits: Cell<u64>,
    misses: Cell<u64>,
}

/// Hit/miss counters for a [`Memoized`] cache.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Calls answered from the cache.
    pub hits: u64,
    /// Calls that ran the wrapped function.
    pub misses: u64,
    /// Entries currently stored.
    pub entries: usize,
}

impl<K, V, F> Memoized<K, V, F>
where
    K: Hash + Eq,
    F: Fn(&K) -> V,
{
    /// Wrap `func` with an empty cache.
    pub fn new(func: F) -> Self {
        Self {
            func,
            cache: RefCell::new(FxHashMap::default()),
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }

    /// Return the cached result for `key`, computing it on first use.
    pub fn call(&self, key: K) -> Rc<V> {
        let cached = self.cache.borrow().get(&key).cloned();
        if let Some(value) = cached {
            self.hits.set(self.hits.get() + 1);
            tracing::trace!(hits = self.hits.get(), "memo hit");
            return value;
        }

        self.misses.set(self.misses.get() + 1);
        tracing::trace!(misses = self.misses.get(), "memo miss");

        // The borrow is released while `func` runs.
        let value = Rc::new((self.func)(&key));
        let mut cache = self.cache.borrow_mut();
        Rc::clone(cache.entry(key).or_insert(value))
    }

    /// Whether a result for `key` is already cached.
    pub fn contains(&self, key: &K) -> bool {
        self.cache.borrow().contains_key(key)
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    /// Current hit/miss counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.get(),
            misses: self.misses.get(),
            entries: self.len(),
        }
    }
}

impl<K, V, F> fmt::Debug for Memoized<K, V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("entries", &self.cache.borrow().len())
            .field("hits", &self.hits.get())
            .field("misses", &self.misses.get())
            .finish_non_exhaustive()
    }
}

/// Cache key made of positional arguments plus named arguments.
///
/// Named arguments are kept sorted by name, so the order in which they are
/// supplied never affects equality or hashing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CallKey<P, N = ()> {
    positional: P,
    named: BTreeMap<String, N>,
}

impl<P, N> CallKey<P, N> {
    /// Key with only positional arguments.
    pub fn new(positional: P) -> Self {
        Self {
            positional,
            named: BTreeMap::new(),
        }
    }

    /// Add a named argument. A repeated name replaces the earlier value.
    #[must_use]
    pub fn with_named(mut self, name: impl Into<String>, value: N) -> Self {
        self.named.insert(name.into(), value);
        self
    }

    /// The positional arguments.
    #[inline]
    pub fn positional(&self) -> &P {
        &self.positional
    }

    /// Value of a named argument.
    #[inline]
    pub fn named(&self, name: &str) -> Option<&N> {
        self.named.get(name)
    }

    /// Named arguments in name order.
    pub fn named_args(&self) -> impl Iterator<Item = (&str, &N)> {
        self.named.iter().map(|(name, value)| (name.as_str(), value))
    }
}
