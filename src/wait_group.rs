use core::fmt;

use derive_more::Debug;

use crate::{join::JoinCounter, utils::*};

/// A counted wait group that tracks the fraction of its work already
/// completed.
///
/// Units of work are registered with [`add`](Self::add) and signalled with
/// [`done`](Self::done); any number of threads may block in
/// [`wait`](Self::wait) until every registered unit has completed, and any
/// thread may poll [`progress`](Self::progress) for a point-in-time completion
/// estimate.
///
/// All methods take `&self`; share a `ProgressWaitGroup` by reference with
/// scoped threads, or wrap it in an `Arc`.
///
/// # Examples
///
/// ```
/// use progress_waitgroup::ProgressWaitGroup;
///
/// let wg = ProgressWaitGroup::new();
/// wg.add(2);
///
/// std::thread::scope(|s| {
///     s.spawn(|| wg.done());
///     s.spawn(|| wg.done());
///     wg.wait();
/// });
///
/// assert_eq!(wg.progress(), 1.0);
/// ```
pub struct ProgressWaitGroup {
    join: JoinCounter,
    total: AtomicU64,
    completed: Mutex<u64>,
}

impl ProgressWaitGroup {
    /// Creates an empty `ProgressWaitGroup`.
    ///
    /// A fresh group has no registered units: [`is_done`](Self::is_done)
    /// returns `true` and [`wait`](Self::wait) returns immediately.
    ///
    /// # Examples
    ///
    /// ```
    /// use progress_waitgroup::ProgressWaitGroup;
    ///
    /// let wg = ProgressWaitGroup::new();
    /// assert_eq!(wg.total(), 0);
    /// wg.wait();
    /// ```
    #[cfg(not(loom))]
    #[inline]
    pub const fn new() -> Self {
        Self {
            join: JoinCounter::new(),
            total: AtomicU64::new(0),
            completed: Mutex::new(0),
        }
    }

    #[cfg(loom)]
    pub fn new() -> Self {
        Self {
            join: JoinCounter::new(),
            total: AtomicU64::new(0),
            completed: Mutex::new(0),
        }
    }

    /// Registers `delta` new units of work.
    ///
    /// After `add(delta)` returns, a subsequent [`wait`](Self::wait) does not
    /// return until `delta` matching [`done`](Self::done) calls have occurred,
    /// and a subsequent [`progress`](Self::progress) reflects the increased
    /// total. `add(0)` is a no-op.
    ///
    /// `add` may be called concurrently with every other method, including
    /// while other threads are already blocked in `wait`.
    ///
    /// # Examples
    ///
    /// ```
    /// use progress_waitgroup::ProgressWaitGroup;
    ///
    /// let wg = ProgressWaitGroup::new();
    /// wg.add(3);
    /// assert_eq!(wg.total(), 3);
    /// assert!(!wg.is_done());
    /// ```
    #[inline]
    pub fn add(&self, delta: usize) {
        self.join.add(delta);
        self.total.fetch_add(delta as u64, atomic::Relaxed);
    }

    /// Records the completion of one unit of work.
    ///
    /// Completion is recorded unconditionally; whether the unit succeeded or
    /// failed is the caller's concern. The completed count is published before
    /// the unit is retired, so a waiter unblocked by the final `done` observes
    /// the fully updated count.
    ///
    /// # Panics
    ///
    /// Calling `done` more times than units were registered is a usage error
    /// and panics at the offending call:
    ///
    /// ```should_panic
    /// use progress_waitgroup::ProgressWaitGroup;
    ///
    /// let wg = ProgressWaitGroup::new();
    /// wg.add(1);
    /// wg.done();
    /// wg.done(); // panics
    /// ```
    #[inline]
    pub fn done(&self) {
        *self.completed.lock().unwrap() += 1;
        self.join.done();
    }

    /// Blocks the calling thread until every registered unit has completed.
    ///
    /// Returns immediately if no units are outstanding. Multiple threads may
    /// wait concurrently; all of them unblock once the outstanding count
    /// reaches zero. There is no timeout and no cancellation.
    ///
    /// A `wait` call returns as soon as it observes the outstanding count at
    /// zero: an [`add`](Self::add) racing with that observation either extends
    /// the wait (if it lands first) or starts a new sub-batch the returning
    /// waiter is not part of.
    ///
    /// # Examples
    ///
    /// ```
    /// use progress_waitgroup::ProgressWaitGroup;
    ///
    /// let wg = ProgressWaitGroup::new();
    /// wg.add(1);
    ///
    /// std::thread::scope(|s| {
    ///     s.spawn(|| wg.done());
    ///     wg.wait();
    /// });
    /// assert!(wg.is_done());
    /// ```
    #[inline]
    pub fn wait(&self) {
        self.join.wait();
    }

    /// Returns the completed fraction of all registered work.
    ///
    /// The completed count is read under its lock and is exact at the instant
    /// of the read; the total is read with a lock-free atomic load and may lag
    /// an `add` in flight on another thread. The ratio is a best-effort
    /// estimate, not an exact fraction.
    ///
    /// With no work registered the ratio is `0.0 / 0.0`, which is NaN; guard
    /// the call if a defined value is needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use progress_waitgroup::ProgressWaitGroup;
    ///
    /// let wg = ProgressWaitGroup::new();
    /// assert!(wg.progress().is_nan());
    ///
    /// wg.add(10);
    /// for _ in 0..4 {
    ///     wg.done();
    /// }
    /// assert_eq!(wg.progress(), 0.4);
    /// ```
    #[must_use]
    pub fn progress(&self) -> f64 {
        let completed = *self.completed.lock().unwrap();
        let total = self.total.load(atomic::Relaxed);
        completed as f64 / total as f64
    }

    /// Checks whether no registered units are outstanding.
    ///
    /// This is the non-blocking counterpart of [`wait`](Self::wait), and is
    /// `true` for a group that has not registered any work yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use progress_waitgroup::ProgressWaitGroup;
    ///
    /// let wg = ProgressWaitGroup::new();
    /// assert!(wg.is_done());
    ///
    /// wg.add(1);
    /// assert!(!wg.is_done());
    ///
    /// wg.done();
    /// assert!(wg.is_done());
    /// ```
    #[inline]
    pub fn is_done(&self) -> bool {
        self.join.outstanding() == 0
    }

    /// Returns the number of units ever registered.
    ///
    /// The total is monotonic; it is never decremented or reset.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total.load(atomic::Relaxed)
    }

    /// Returns the number of units that have completed so far.
    #[inline]
    pub fn completed(&self) -> u64 {
        *self.completed.lock().unwrap()
    }

    /// Registers one unit of work and returns a token that completes it when
    /// dropped.
    ///
    /// The token signals [`done`](Self::done) even if the worker panics, so a
    /// waiting coordinator is never left blocked by a crashed worker.
    ///
    /// # Examples
    ///
    /// ```
    /// use progress_waitgroup::ProgressWaitGroup;
    ///
    /// let wg = ProgressWaitGroup::new();
    ///
    /// std::thread::scope(|s| {
    ///     for _ in 0..4 {
    ///         let token = wg.token();
    ///         s.spawn(move || {
    ///             // ... perform one unit of work ...
    ///             token.done();
    ///         });
    ///     }
    ///     wg.wait();
    /// });
    ///
    /// assert_eq!(wg.progress(), 1.0);
    /// ```
    pub fn token(&self) -> WorkToken<'_> {
        self.add(1);
        WorkToken(self)
    }
}

impl Default for ProgressWaitGroup {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProgressWaitGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressWaitGroup")
            .field("total", &self.total())
            .field("completed", &self.completed())
            .field("done", &self.is_done())
            .finish()
    }
}

/// A registered unit of work that completes when dropped.
///
/// Created by [`ProgressWaitGroup::token`]. Cloning a token registers one
/// additional unit.
#[must_use]
#[derive(Debug)]
pub struct WorkToken<'wg>(#[debug("done: {}", _0.is_done())] &'wg ProgressWaitGroup);

impl WorkToken<'_> {
    /// Consumes the token.
    ///
    /// This is equivalent to dropping the token.
    #[inline]
    pub fn done(self) {
        drop(self);
    }
}

impl Clone for WorkToken<'_> {
    fn clone(&self) -> Self {
        self.0.token()
    }
}

impl Drop for WorkToken<'_> {
    #[inline]
    fn drop(&mut self) {
        self.0.done();
    }
}
