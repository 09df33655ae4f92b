//! An optional `#[global_allocator]` adapter over a fixed [`Pool`].
//!
//! Grounded on the teacher allocator's own `GlobalTlsf`, stripped of its
//! pool-growth machinery (`FlexSource`/mmap): this adapter never grows its
//! backing store, matching the spec's "no mmap, growth, or fallback to a
//! system heap" non-goal. It exists because `GlobalAlloc::alloc` takes
//! `&self`, not `&mut self`, so the borrow-checker trick the rest of this
//! crate relies on for exclusivity doesn't apply here — a real runtime
//! lock, supplied by the caller through [`Lock`], is unavoidable.

use core::alloc::{GlobalAlloc, Layout};
use core::cell::UnsafeCell;
use core::ops::{Deref, DerefMut};
use core::ptr::NonNull;

use crate::lock::{Lock, NoLock};
use crate::pool::Pool;

/// Wraps a [`Pool`] so it can be installed as `#[global_allocator]`.
///
/// ```
/// # #[repr(align(4))]
/// # struct Aligned([u8; 4096]);
/// # static mut BUF: Aligned = Aligned([0; 4096]);
/// use dmem::{GlobalPool, NoLock, Pool};
///
/// # unsafe {
/// let pool = Pool::<4, 4>::try_new(&mut BUF.0).unwrap();
/// let alloc: GlobalPool<NoLock> = GlobalPool::new(pool);
/// # let _ = alloc;
/// # }
/// ```
pub struct GlobalPool<'pool, L: Lock = NoLock, const ALIGN: usize = 4, const MIN_ALLOC: usize = 4>
{
    inner: UnsafeCell<Pool<'pool, ALIGN, MIN_ALLOC>>,
    _lock: core::marker::PhantomData<L>,
}

// Safety: every access to `inner` is preceded by `L::acquire_lock()` and
// followed by `L::release_lock()` in `lock_inner`, so concurrent callers
// never observe a torn `Pool`.
unsafe impl<'pool, L: Lock, const ALIGN: usize, const MIN_ALLOC: usize> Sync
    for GlobalPool<'pool, L, ALIGN, MIN_ALLOC>
{
}

impl<'pool, L: Lock, const ALIGN: usize, const MIN_ALLOC: usize>
    GlobalPool<'pool, L, ALIGN, MIN_ALLOC>
{
    /// Wraps an already-initialized `Pool`.
    pub const fn new(pool: Pool<'pool, ALIGN, MIN_ALLOC>) -> Self {
        Self {
            inner: UnsafeCell::new(pool),
            _lock: core::marker::PhantomData,
        }
    }

    fn lock_inner(&self) -> LockGuard<'_, 'pool, L, ALIGN, MIN_ALLOC> {
        L::acquire_lock();
        LockGuard(self)
    }
}

struct LockGuard<'a, 'pool, L: Lock, const ALIGN: usize, const MIN_ALLOC: usize>(
    &'a GlobalPool<'pool, L, ALIGN, MIN_ALLOC>,
);

impl<'a, 'pool, L: Lock, const ALIGN: usize, const MIN_ALLOC: usize> Deref
    for LockGuard<'a, 'pool, L, ALIGN, MIN_ALLOC>
{
    type Target = Pool<'pool, ALIGN, MIN_ALLOC>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        // Safety: exclusive access is held for the guard's lifetime.
        unsafe { &*self.0.inner.get() }
    }
}

impl<'a, 'pool, L: Lock, const ALIGN: usize, const MIN_ALLOC: usize> DerefMut
    for LockGuard<'a, 'pool, L, ALIGN, MIN_ALLOC>
{
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        // Safety: exclusive access is held for the guard's lifetime.
        unsafe { &mut *self.0.inner.get() }
    }
}

impl<'a, 'pool, L: Lock, const ALIGN: usize, const MIN_ALLOC: usize> Drop
    for LockGuard<'a, 'pool, L, ALIGN, MIN_ALLOC>
{
    #[inline]
    fn drop(&mut self) {
        L::release_lock();
    }
}

unsafe impl<'pool, L: Lock, const ALIGN: usize, const MIN_ALLOC: usize> GlobalAlloc
    for GlobalPool<'pool, L, ALIGN, MIN_ALLOC>
{
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        // `Pool`'s alignment is fixed at compile time; requests needing a
        // stricter alignment than `ALIGN` cannot be honored by this
        // allocator and are rejected rather than silently misaligned.
        if layout.align() > ALIGN {
            return core::ptr::null_mut();
        }
        self.lock_inner()
            .alloc(layout.size())
            .map_or(core::ptr::null_mut(), NonNull::as_ptr)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, _layout: Layout) {
        let _ = self.lock_inner().free(NonNull::new(ptr));
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if layout.align() > ALIGN {
            return core::ptr::null_mut();
        }
        self.lock_inner()
            .realloc(NonNull::new(ptr), new_size)
            .map_or(core::ptr::null_mut(), NonNull::as_ptr)
    }
}
