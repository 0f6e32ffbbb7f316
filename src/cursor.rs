use crate::constants::CURSOR_IDLE_MS;
use glam::Vec2;
use instant::Instant;
use std::time::Duration;

/// Interactive elements that switch the cursor into its `hover` look.
pub const HOVER_TARGETS: &str = "a, button, .enter-button, .nav-arrow";

/// Owned state behind the custom cursor element.
///
/// Event handlers write, the per-frame step reads and applies.
#[derive(Clone, Debug)]
pub struct CursorState {
    pub pos: Vec2,
    pub clicked: bool,
    pub hover: bool,
    idle_after: Duration,
    last_move: Option<Instant>,
    dirty: bool,
}

/// Class list the cursor element should carry this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorClasses {
    pub idle: bool,
    pub clicked: bool,
    pub hover: bool,
}

impl Default for CursorState {
    fn default() -> Self {
        Self::new(Duration::from_millis(CURSOR_IDLE_MS))
    }
}

impl CursorState {
    pub fn new(idle_after: Duration) -> Self {
        Self {
            pos: Vec2::ZERO,
            clicked: false,
            hover: false,
            idle_after,
            last_move: None,
            dirty: false,
        }
    }

    pub fn on_move(&mut self, client: Vec2, now: Instant) {
        self.pos = client;
        self.last_move = Some(now);
        self.dirty = true;
    }

    /// Position to write this frame, if it changed since the last take.
    pub fn take_position(&mut self) -> Option<Vec2> {
        std::mem::take(&mut self.dirty).then_some(self.pos)
    }

    /// Idle once `idle_after` has passed since the last move. A cursor that
    /// never moved is not idle.
    pub fn is_idle(&self, now: Instant) -> bool {
        self.last_move
            .map(|t| crate::timing::since(t, now) >= self.idle_after)
            .unwrap_or(false)
    }

    pub fn classes(&self, now: Instant) -> CursorClasses {
        CursorClasses {
            idle: self.is_idle(now),
            clicked: self.clicked,
            hover: self.hover,
        }
    }
}
