//! Debounce for paste triggers that can fire twice for one gesture
//!
//! The guard remembers when the last paste arrived. A paste arriving
//! within the debounce window of the previous one is suppressed, and the
//! timestamp moves forward either way.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Default debounce window between two paste triggers
pub const DEFAULT_PASTE_DEBOUNCE: Duration = Duration::from_millis(50);

/// Source of monotonic time
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Hand-driven clock for tests. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed.get()
    }
}

#[derive(Debug, Clone)]
pub struct PasteGuard<C: Clock = SystemClock> {
    clock: C,
    window: Duration,
    last_paste: Option<Instant>,
}

impl PasteGuard<SystemClock> {
    pub fn new(window: Duration) -> Self {
        Self::with_clock(SystemClock, window)
    }
}

impl Default for PasteGuard<SystemClock> {
    fn default() -> Self {
        Self::new(DEFAULT_PASTE_DEBOUNCE)
    }
}

impl<C: Clock> PasteGuard<C> {
    pub fn with_clock(clock: C, window: Duration) -> Self {
        Self {
            clock,
            window,
            last_paste: None,
        }
    }

    /// Record a paste trigger. Returns false when it came too soon after
    /// the previous one and should be dropped.
    pub fn admit(&mut self) -> bool {
        let now = self.clock.now();
        let admitted = match self.last_paste {
            Some(last) => now.saturating_duration_since(last) >= self.window,
            None => true,
        };
        self.last_paste = Some(now);

        if !admitted {
            tracing::debug!(window = ?self.window, "paste debounced");
        }
        admitted
    }
}
