use crate::constants::*;
use crate::timing::since;
use glam::Vec2;
use instant::Instant;
use rand::prelude::*;

/// Quadratic in-out ease (GSAP's `power1.inOut`).
#[inline]
pub fn ease_power1_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Visual state of the focal element at one instant of the exit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlyFrame {
    pub offset: Vec2,
    pub rotation_deg: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl FlyFrame {
    pub fn transform_css(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) rotate({:.2}deg) scale({:.3})",
            self.offset.x, self.offset.y, self.rotation_deg, self.scale
        )
    }
}

/// Randomized off-screen trajectory: origin -> waypoint -> end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlyAwayPath {
    pub end: Vec2,
    pub rotation_deg: f32,
    pub duration_sec: f32,
}

impl FlyAwayPath {
    pub fn random(rng: &mut impl Rng) -> Self {
        let end = Vec2::new(
            rng.gen_range(FLY_WAVE_X.0..=FLY_WAVE_X.1),
            rng.gen_range(FLY_WAVE_Y.0..=FLY_WAVE_Y.1),
        );
        Self {
            end,
            rotation_deg: rng.gen_range(FLY_ROTATION_DEG.0..=FLY_ROTATION_DEG.1),
            duration_sec: FLY_DURATION_SEC,
        }
    }

    pub fn waypoint(&self) -> Vec2 {
        Vec2::new(self.end.x * FLY_MID_X, self.end.y * FLY_MID_Y)
    }

    /// Point on the curve at parameter `u` in [0, 1].
    ///
    /// Quadratic Bezier whose control point is chosen so the curve passes
    /// through `waypoint()` at `u = 0.5`.
    pub fn point_at(&self, u: f32) -> Vec2 {
        let u = u.clamp(0.0, 1.0);
        let ctrl = 2.0 * self.waypoint() - 0.5 * self.end;
        2.0 * u * (1.0 - u) * ctrl + u * u * self.end
    }

    pub fn sample(&self, elapsed_sec: f32) -> FlyFrame {
        let t = if self.duration_sec > 0.0 {
            elapsed_sec / self.duration_sec
        } else {
            1.0
        };
        let u = ease_power1_in_out(t);
        FlyFrame {
            offset: self.point_at(u),
            rotation_deg: self.rotation_deg * u,
            scale: 1.0 + (FLY_END_SCALE - 1.0) * u,
            opacity: 1.0 - u,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlyStep {
    Idle,
    Running(FlyFrame),
    /// The animation ended on this step; the caller scrolls and resets.
    Finished,
}

/// One-shot animated exit. Re-triggering while running is ignored.
pub struct FlyAway {
    active: Option<(FlyAwayPath, Instant)>,
    rng: StdRng,
}

impl FlyAway {
    pub fn new(seed: u64) -> Self {
        Self {
            active: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Start a new exit; returns `false` if one is already in flight.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.active.is_some() {
            return false;
        }
        let path = FlyAwayPath::random(&mut self.rng);
        log::debug!(
            "[fly] start end=({:.0},{:.0}) rot={:.0}",
            path.end.x,
            path.end.y,
            path.rotation_deg
        );
        self.active = Some((path, now));
        true
    }

    pub fn step(&mut self, now: Instant) -> FlyStep {
        let Some((path, started)) = self.active else {
            return FlyStep::Idle;
        };
        let elapsed = since(started, now).as_secs_f32();
        if elapsed >= path.duration_sec {
            self.active = None;
            return FlyStep::Finished;
        }
        FlyStep::Running(path.sample(elapsed))
    }
}
