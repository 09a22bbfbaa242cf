//! Thread-safe issue-once value allocation.

use std::hash::Hash;

use parking_lot::Mutex;
use rustc_hash::FxHashSet;

/// Hands out values with the guarantee that no value is ever issued twice.
///
/// Candidates come from a caller-supplied draw. A candidate that has already
/// been issued (or reserved) is discarded and a fresh one drawn, so callers
/// must leave enough of the candidate space unissued for the draw to land on
/// eventually. The draw runs outside the lock; concurrent allocations only
/// serialize on the check-and-insert.
#[derive(Debug, Default)]
pub struct UniqueAllocator<T> {
    used: Mutex<FxHashSet<T>>,
}

impl<T: Copy + Eq + Hash> UniqueAllocator<T> {
    /// Create an allocator with nothing issued yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            used: Mutex::new(FxHashSet::default()),
        }
    }

    /// Mark `value` as used without issuing it, so it can never be allocated.
    ///
    /// Returns `false` if the value was already issued or reserved.
    pub fn reserve(&self, value: T) -> bool {
        self.used.lock().insert(value)
    }

    /// Draw candidates from `fresh` until one has never been issued, then
    /// issue it.
    pub fn allocate<F>(&self, mut fresh: F) -> T
    where
        F: FnMut() -> T,
    {
        loop {
            let candidate = fresh();
            if self.used.lock().insert(candidate) {
                return candidate;
            }
        }
    }

    /// Number of values issued or reserved so far.
    #[must_use]
    pub fn allocated(&self) -> usize {
        self.used.lock().len()
    }
}
