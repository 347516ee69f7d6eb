use crate::utils::*;

/// Outstanding-unit counter paired with a condition variable that is broadcast
/// when the count reaches zero.
///
/// Registration may interleave freely with in-flight [`wait`](Self::wait)
/// callers: a waiter returns iff it observes the count at zero while holding
/// the lock.
#[derive(Debug)]
pub(crate) struct JoinCounter {
    outstanding: Mutex<usize>,
    zeroed: Condvar,
}

impl JoinCounter {
    #[cfg(not(loom))]
    #[inline]
    pub const fn new() -> Self {
        Self {
            outstanding: Mutex::new(0),
            zeroed: Condvar::new(),
        }
    }

    #[cfg(loom)]
    pub fn new() -> Self {
        Self {
            outstanding: Mutex::new(0),
            zeroed: Condvar::new(),
        }
    }

    pub fn add(&self, delta: usize) {
        let mut outstanding = self.outstanding.lock().unwrap();
        *outstanding = outstanding
            .checked_add(delta)
            .expect("outstanding counter overflow");
    }

    /// Decrements the count, broadcasting to waiters when it reaches zero.
    ///
    /// # Panics
    ///
    /// Panics if the count is already zero. The count is checked before it is
    /// written, so a misusing caller cannot corrupt it.
    pub fn done(&self) {
        let mut outstanding = self.outstanding.lock().unwrap();
        *outstanding = outstanding
            .checked_sub(1)
            .expect("done() called more times than units were added");
        if *outstanding == 0 {
            self.zeroed.notify_all();
        }
    }

    /// Blocks until the count reaches zero.
    pub fn wait(&self) {
        let mut outstanding = self.outstanding.lock().unwrap();
        while *outstanding > 0 {
            outstanding = self.zeroed.wait(outstanding).unwrap();
        }
    }

    #[inline]
    pub fn outstanding(&self) -> usize {
        *self.outstanding.lock().unwrap()
    }
}
