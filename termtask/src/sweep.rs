//! Fixed-interval sweep timers ticked from the event loop.
//!
//! The two periodic jobs (reminder check, recurrence rollover) run on
//! [`SweepTimer`]s: no background threads, no async runtime. The event
//! loop asks [`SweepTimer::is_due`] once per iteration and calls
//! [`SweepTimer::mark_run`] after running the job. Timers are started
//! and stopped with the application lifecycle so nothing outlives
//! teardown.

use std::time::{Duration, Instant};

/// A fixed-interval timer with explicit lifecycle.
///
/// A freshly started timer is immediately due, so each sweep runs once
/// at startup and then on every interval boundary.
#[derive(Debug, Clone)]
pub struct SweepTimer {
    interval: Duration,
    last_run: Option<Instant>,
    running: bool,
}

impl SweepTimer {
    /// Creates a stopped timer with the given interval.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_run: None,
            running: false,
        }
    }

    /// Starts the timer. The first `is_due` check after starting is true.
    pub const fn start(&mut self) {
        self.running = true;
    }

    /// Stops the timer; `is_due` is false until restarted.
    pub const fn stop(&mut self) {
        self.running = false;
    }

    /// Returns true while the timer is started.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Returns true if the timer is running and the interval has elapsed
    /// since the last recorded run (or no run has been recorded yet).
    #[must_use]
    pub fn is_due(&self) -> bool {
        if !self.running {
            return false;
        }
        self.last_run
            .is_none_or(|last| last.elapsed() >= self.interval)
    }

    /// Records that the sweep ran now.
    pub fn mark_run(&mut self) {
        self.last_run = Some(Instant::now());
    }
}
