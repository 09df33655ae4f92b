//! A fixed-pool, intrusive-linked-list, first-fit dynamic memory allocator.
//!
//! This crate manages exactly one contiguous byte region supplied by the
//! caller (see [`Pool::try_new`]) and vends variable-sized aligned
//! sub-allocations from it. Live and free blocks are threaded together as an
//! intrusive doubly-linked list stored in-band at the front of every block,
//! so the crate needs no backing allocator of its own and never grows the
//! pool: when the pool is full, allocation fails.
//!
//! ```
//! # #[repr(align(4))]
//! # struct Aligned([u8; 128]);
//! # let mut buf = Aligned([0; 128]);
//! use dmem::Pool;
//!
//! let mut pool = Pool::<4, 4>::try_new(&mut buf.0).unwrap();
//! let p = pool.alloc(24).unwrap();
//! unsafe {
//!     p.as_ptr().write_bytes(0xAA, 24);
//!     pool.free(Some(p)).unwrap();
//! }
//! ```
//!
//! # Design
//!
//! Unlike a general-purpose allocator (TLSF, buddy, slab), this allocator
//! keeps a single free list and searches it first-fit from a cached
//! left-most-free hint, coalescing adjacent free blocks only on [`Pool::free`]
//! (never on allocation). That keeps the hot allocation path a short linear
//! scan and the list always normalized, at the cost of being unsuitable for
//! very large pools or workloads with many same-sized live objects — this is
//! a small-memory allocator in the real-time-kernel sense, not a
//! general-purpose one.
//!
//! Every public mutating operation takes `&mut self`, so Rust's borrow
//! checker — rather than a runtime lock — is what guarantees the exclusive
//! access the original single-threaded design assumes. Callers that need a
//! `'static`, `&self`-based `#[global_allocator]` can opt into the `global`
//! feature (see [`GlobalPool`]), which reintroduces an explicit,
//! caller-supplied [`Lock`].
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod block;
mod error;
#[cfg(feature = "global")]
mod global;
mod lock;
mod pool;
mod report;

pub use self::error::{FreeError, InitError};
#[cfg(feature = "global")]
pub use self::global::GlobalPool;
pub use self::lock::{Lock, NoLock};
pub use self::pool::Pool;
pub use self::report::Report;
