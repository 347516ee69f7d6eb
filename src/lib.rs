//! A counted `WaitGroup` synchronization primitive that reports progress.
//!
//! A coordinator registers a dynamically growable number of concurrent units
//! of work, blocks until all of them finish, and can query a fractional
//! completion estimate at any time. There is no scheduling, no retry or
//! cancellation, and no push-style notification; progress is a point-in-time
//! snapshot when asked.
//!
//! # Usage
//!
//! Explicit accounting, as with a classic wait group:
//!
//! ```rust
//! use progress_waitgroup::ProgressWaitGroup;
//!
//! let wg = ProgressWaitGroup::new();
//! wg.add(2);
//!
//! std::thread::scope(|s| {
//!     s.spawn(|| {
//!         // Long-running task
//!         wg.done();
//!     });
//!     s.spawn(|| {
//!         // Another long-running task
//!         wg.done();
//!     });
//!     // Wait for all tasks to complete
//!     wg.wait();
//! });
//!
//! assert_eq!(wg.progress(), 1.0);
//! ```
//!
//! Or RAII accounting with [`WorkToken`], which signals completion on drop
//! even if the worker panics:
//!
//! ```rust
//! use progress_waitgroup::ProgressWaitGroup;
//!
//! let wg = ProgressWaitGroup::new();
//!
//! std::thread::scope(|s| {
//!     for _ in 0..8 {
//!         let token = wg.token();
//!         s.spawn(move || {
//!             // ... perform one unit of work ...
//!             token.done();
//!         });
//!     }
//!     wg.wait();
//! });
//!
//! assert!(wg.is_done());
//! ```
//!
//! # Consistency
//!
//! The completed count is guarded by a dedicated lock and every read of it is
//! exact at the instant of the read. The total is maintained with a lock-free
//! atomic add and read without the lock, so [`progress`] may pair a completed
//! count with a total that does not yet reflect an `add` in flight on another
//! thread. The ratio is a best-effort estimate by design.
//!
//! Calling [`done`] more times than units were registered is a usage error
//! and panics at the offending call rather than corrupting the counters.
//!
//! [`progress`]: ProgressWaitGroup::progress
//! [`done`]: ProgressWaitGroup::done

mod join;
mod utils;
mod wait_group;

pub use crate::wait_group::{ProgressWaitGroup, WorkToken};

#[cfg(test)]
mod tests;
