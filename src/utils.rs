#[cfg(all(not(loom), not(feature = "portable-atomic")))]
pub use core::sync::atomic::{self as _atomic, AtomicU8, AtomicU64};
#[cfg(all(not(loom), feature = "portable-atomic"))]
pub use portable_atomic::{self as _atomic, AtomicU8, AtomicU64};
#[cfg(loom)]
pub use loom::sync::atomic::{self as _atomic, AtomicU8, AtomicU64};

pub mod atomic {
    pub use super::_atomic::Ordering::*;
}

#[cfg(not(loom))]
pub use std::sync::{Condvar, Mutex};
#[cfg(loom)]
pub use loom::sync::{Condvar, Mutex};
