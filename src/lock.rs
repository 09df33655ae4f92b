/// An externally-supplied mutual-exclusion provider.
///
/// [`Pool`](crate::Pool)'s own API needs no implementor of this trait: every
/// mutating method takes `&mut self`, so the borrow checker already
/// guarantees the exclusivity a lock would otherwise provide. This trait
/// exists for [`GlobalPool`](crate::GlobalPool) (feature `global`), whose
/// `GlobalAlloc` impl is callable through a shared `&self` and therefore
/// does need a real runtime lock.
///
/// `acquire_lock`/`release_lock` are associated functions, not methods: the
/// lock is assumed to be some process-wide resource (a mutex, a critical
/// section, an interrupt mask) rather than state owned by any particular
/// value. Implementations must not fail and must totally order calls to
/// every other method on this trait.
pub trait Lock {
    /// Acquire the lock. Blocks (or spins, or disables interrupts) until
    /// exclusive access is obtained.
    fn acquire_lock();
    /// Release the lock previously obtained by [`acquire_lock`](Self::acquire_lock).
    fn release_lock();
}

/// A [`Lock`] that does nothing.
///
/// Correct only when the allocator is never reachable from more than one
/// logical thread of execution at a time (single-threaded programs, or a
/// single-core target with no reentrant interrupt handlers touching the
/// pool). This is the default lock for [`GlobalPool`](crate::GlobalPool).
pub struct NoLock;

impl Lock for NoLock {
    #[inline]
    fn acquire_lock() {}
    #[inline]
    fn release_lock() {}
}
