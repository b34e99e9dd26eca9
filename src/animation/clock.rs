//! Time sources for driving animations
//!
//! The dock never reads wall-clock time directly. It asks an injected
//! `FrameClock`, so tests can step time by hand and hosts can feed frame
//! timestamps from their own presentation loop.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time since some fixed origin
pub trait FrameClock {
    fn now(&self) -> Duration;
}

/// Real time, measured from when the clock was created
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock; clones share the same time
///
/// Time never moves backwards: `set` with an earlier value is ignored.
#[derive(Clone, Default)]
pub struct ManualClock {
    time: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_time(time: Duration) -> Self {
        Self {
            time: Rc::new(Cell::new(time)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.time.set(self.time.get() + by);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    pub fn set(&self, time: Duration) {
        if time >= self.time.get() {
            self.time.set(time);
        }
    }
}

impl FrameClock for ManualClock {
    fn now(&self) -> Duration {
        self.time.get()
    }
}

impl fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualClock")
            .field("time", &self.time.get())
            .finish()
    }
}
