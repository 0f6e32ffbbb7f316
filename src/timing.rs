use instant::Instant;
use std::time::Duration;

/// Elapsed time from `start` to `now`, zero if `now` is not later.
#[inline]
pub fn since(start: Instant, now: Instant) -> Duration {
    if now > start {
        now - start
    } else {
        Duration::ZERO
    }
}

/// Trailing-edge debounce: `poll` fires once, `delay` after the last `touch`.
#[derive(Clone, Debug)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Register an event; pushes the deadline back.
    pub fn touch(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once when the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
