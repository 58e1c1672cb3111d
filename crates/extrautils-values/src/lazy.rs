//! Lazily computed values that can be reset and recomputed.
//!
//! [`LazyVar`] computes its value on first access and caches it until
//! [`reset`](LazyVar::reset) or [`get_and_reset`](LazyVar::get_and_reset),
//! after which the next access calls the supplier again. [`SyncLazyVar`] is
//! the same thing behind a mutex, for sharing between threads.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A resettable lazy value.
///
/// ```
/// use extrautils_values::LazyVar;
///
/// let mut numbers = 1..;
/// let mut next = LazyVar::new(move || numbers.next().unwrap());
///
/// assert_eq!(*next.value(), 1);
/// assert_eq!(*next.value(), 1);
/// assert_eq!(next.get_and_reset(), 1);
/// assert_eq!(*next.value(), 2);
/// ```
pub struct LazyVar<T, F = fn() -> T> {
    supplier: F,
    value: Option<T>,
}

impl<T, F> LazyVar<T, F>
where
    F: FnMut() -> T,
{
    pub fn new(supplier: F) -> Self {
        LazyVar {
            supplier,
            value: None,
        }
    }

    /// The cached value, computing it first if needed.
    pub fn value(&mut self) -> &T {
        let supplier = &mut self.supplier;
        self.value.get_or_insert_with(supplier)
    }

    /// Whether a value is currently cached.
    pub fn is_initialized(&self) -> bool {
        self.value.is_some()
    }

    /// Forgets the cached value.
    pub fn reset(&mut self) {
        self.value = None;
    }

    /// Returns the current value (computing it if needed) and forgets it.
    pub fn get_and_reset(&mut self) -> T {
        match self.value.take() {
            Some(value) => value,
            None => (self.supplier)(),
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for LazyVar<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyVar")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// A resettable lazy value safe to share between threads.
///
/// All operations take `&self`; the supplier runs while the lock is held, so
/// concurrent first accesses compute the value only once.
///
/// ```
/// use extrautils_values::SyncLazyVar;
///
/// let config = SyncLazyVar::new(|| String::from("loaded"));
/// assert_eq!(config.value(), "loaded");
/// assert_eq!(config.with_value(|s| s.len()), 6);
/// ```
pub struct SyncLazyVar<T, F = fn() -> T> {
    inner: Mutex<LazyVar<T, F>>,
}

impl<T, F> SyncLazyVar<T, F>
where
    F: FnMut() -> T,
{
    pub fn new(supplier: F) -> Self {
        SyncLazyVar {
            inner: Mutex::new(LazyVar::new(supplier)),
        }
    }

    /// A clone of the cached value, computing it first if needed.
    pub fn value(&self) -> T
    where
        T: Clone,
    {
        self.lock().value().clone()
    }

    /// Runs `f` on the cached value, computing it first if needed.
    ///
    /// The cell stays locked while `f` runs. Calling any method of the same
    /// cell from inside `f` deadlocks; return what you need from `f` and
    /// make the call afterwards.
    pub fn with_value<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(self.lock().value())
    }

    pub fn is_initialized(&self) -> bool {
        self.lock().is_initialized()
    }

    /// Forgets the cached value.
    pub fn reset(&self) {
        self.lock().reset();
    }

    /// Returns the current value (computing it if needed) and forgets it.
    pub fn get_and_reset(&self) -> T {
        self.lock().get_and_reset()
    }

    // A panicking supplier leaves the cell uninitialized, never half-written.
    fn lock(&self) -> MutexGuard<'_, LazyVar<T, F>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for SyncLazyVar<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("SyncLazyVar")
            .field("value", &guard.value)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn value_is_cached_until_reset() {
        let mut numbers = 1..=10;
        let mut lazy = LazyVar::new(move || numbers.next().unwrap());

        assert_eq!(*lazy.value(), 1);
        assert_eq!(*lazy.value(), 1);
        assert_eq!(lazy.get_and_reset(), 1);
        assert_eq!(*lazy.value(), 2);
        assert_eq!(lazy.get_and_reset(), 2);
        assert_eq!(*lazy.value(), 3);
    }

    #[test]
    fn reset_forces_recompute() {
        let mut calls = 0;
        let mut lazy = LazyVar::new(|| {
            calls += 1;
            calls
        });
        assert!(!lazy.is_initialized());
        assert_eq!(*lazy.value(), 1);
        assert!(lazy.is_initialized());
        lazy.reset();
        assert!(!lazy.is_initialized());
        assert_eq!(*lazy.value(), 2);
    }

    #[test]
    fn get_and_reset_on_fresh_cell_computes() {
        let mut lazy = LazyVar::new(|| "fresh");
        assert_eq!(lazy.get_and_reset(), "fresh");
        assert!(!lazy.is_initialized());
    }

    #[test]
    fn fn_pointer_default_parameter() {
        fn seven() -> u8 {
            7
        }
        let mut lazy: LazyVar<u8> = LazyVar::new(seven);
        assert_eq!(*lazy.value(), 7);
    }

    #[test]
    fn synced_value_is_cached_until_reset() {
        let mut numbers = 1..=10;
        let lazy = SyncLazyVar::new(move || numbers.next().unwrap());

        assert_eq!(lazy.value(), 1);
        assert_eq!(lazy.value(), 1);
        assert_eq!(lazy.get_and_reset(), 1);
        assert_eq!(lazy.value(), 2);
        assert_eq!(lazy.get_and_reset(), 2);
        assert_eq!(lazy.value(), 3);
        lazy.reset();
        assert!(!lazy.is_initialized());
    }

    #[test]
    fn with_value_unlocks_before_returning() {
        let lazy = SyncLazyVar::new(|| vec![1, 2, 3]);
        let len = lazy.with_value(Vec::len);
        assert_eq!(len, 3);

        lazy.reset();
        assert!(!lazy.is_initialized());
        assert_eq!(lazy.with_value(|v| v.iter().sum::<i32>()), 6);
        assert_eq!(lazy.value().len(), len);
    }

    #[test]
    fn synced_supplier_runs_once_across_threads() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let lazy = Arc::new(SyncLazyVar::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            42u32
        }));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let lazy = Arc::clone(&lazy);
                thread::spawn(move || lazy.value())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 42);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn debug_shows_cache_state() {
        let mut lazy = LazyVar::new(|| 5);
        assert_eq!(format!("{:?}", lazy), "LazyVar { value: None, .. }");
        lazy.value();
        assert_eq!(format!("{:?}", lazy), "LazyVar { value: Some(5), .. }");
    }
}
