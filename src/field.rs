use crate::constants::*;
use crate::surface::{Fill, Stroke, Surface};
use glam::Vec2;
use rand::prelude::*;

/// Numeric tuning for one particle field instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
    pub point_count: usize,
    pub max_distance: f32,
    pub disrupt_radius: f32,
    pub point_radius: f32,
    pub speed_max: f32,
    pub jitter: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            point_count: POINT_COUNT,
            max_distance: MAX_DISTANCE,
            disrupt_radius: DISRUPT_RADIUS,
            point_radius: POINT_RADIUS,
            speed_max: POINT_SPEED_MAX,
            jitter: JITTER_AMPLITUDE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Point {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    fn random(bounds: Vec2, speed_max: f32, radius: f32, rng: &mut impl Rng) -> Self {
        let pos = Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y);
        let vel = Vec2::new(
            (rng.gen::<f32>() - 0.5) * 2.0 * speed_max,
            (rng.gen::<f32>() - 0.5) * 2.0 * speed_max,
        );
        Self { pos, vel, radius }
    }

    /// Integrate one frame, then bounce off any edge the point has crossed.
    ///
    /// Position is never clamped: a point may sit up to one velocity step
    /// outside `[0, bounds]` until the flipped velocity carries it back.
    pub fn step(&mut self, bounds: Vec2) {
        self.pos += self.vel;
        if self.pos.x < 0.0 || self.pos.x > bounds.x {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > bounds.y {
            self.vel.y = -self.vel.y;
        }
    }
}

/// One proximity edge between `points[a]` and `points[b]` (`a < b`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    /// `1 - distance / max_distance`, before the per-style factor.
    pub opacity: f32,
    pub disrupted: bool,
}

impl Edge {
    pub fn stroke(&self) -> Stroke {
        if self.disrupted {
            Stroke {
                rgb: EDGE_RGB_DISRUPTED,
                alpha: self.opacity * EDGE_OPACITY_DISRUPTED,
                width: EDGE_WIDTH_DISRUPTED,
            }
        } else {
            Stroke {
                rgb: EDGE_RGB_NORMAL,
                alpha: self.opacity * EDGE_OPACITY_NORMAL,
                width: EDGE_WIDTH_NORMAL,
            }
        }
    }
}

/// Base opacity for a pair at `distance`, or `None` when they are not linked.
#[inline]
pub fn edge_opacity(distance: f32, max_distance: f32) -> Option<f32> {
    (distance < max_distance).then(|| 1.0 - distance / max_distance)
}

/// Animated point network with a pointer-driven disruption zone.
///
/// - Construct with `ParticleField::new(config, bounds, seed)`
/// - Call `tick` then `draw` once per animation frame
/// - Feed pointer position through `set_disruption`
pub struct ParticleField {
    pub config: FieldConfig,
    pub bounds: Vec2,
    pub points: Vec<Point>,
    disruption: Option<Vec2>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: FieldConfig, bounds: Vec2, seed: u64) -> Self {
        let mut field = Self::with_points(config, bounds, Vec::new(), seed);
        field.initialize(config.point_count, bounds);
        field
    }

    /// Build a field around an explicit point set.
    pub fn with_points(config: FieldConfig, bounds: Vec2, points: Vec<Point>, seed: u64) -> Self {
        Self {
            config,
            bounds,
            points,
            disruption: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Replace the whole point collection with `count` fresh random points.
    pub fn initialize(&mut self, count: usize, bounds: Vec2) {
        self.bounds = bounds;
        let (speed, radius) = (self.config.speed_max, self.config.point_radius);
        let rng = &mut self.rng;
        self.points = (0..count)
            .map(|_| Point::random(bounds, speed, radius, rng))
            .collect();
    }

    /// Record new logical bounds. Existing points are kept as they are.
    pub fn resize(&mut self, bounds: Vec2) {
        if bounds != self.bounds {
            log::debug!(
                "[field] resize {:.0}x{:.0} -> {:.0}x{:.0}",
                self.bounds.x,
                self.bounds.y,
                bounds.x,
                bounds.y
            );
        }
        self.bounds = bounds;
    }

    pub fn tick(&mut self) {
        let bounds = self.bounds;
        for p in &mut self.points {
            p.step(bounds);
        }
    }

    pub fn set_disruption(&mut self, at: Option<Vec2>) {
        self.disruption = at;
    }

    pub fn disruption(&self) -> Option<Vec2> {
        self.disruption
    }

    fn is_disrupted(&self, pos: Vec2) -> bool {
        self.disruption
            .map(|c| pos.distance(c) < self.config.disrupt_radius)
            .unwrap_or(false)
    }

    /// Full pairwise proximity graph for the current positions.
    pub fn edges(&self) -> Vec<Edge> {
        let max = self.config.max_distance;
        let mut out = Vec::new();
        for (i, pi) in self.points.iter().enumerate() {
            for (j, pj) in self.points.iter().enumerate().skip(i + 1) {
                let Some(opacity) = edge_opacity(pi.pos.distance(pj.pos), max) else {
                    continue;
                };
                out.push(Edge {
                    a: i,
                    b: j,
                    opacity,
                    disrupted: self.is_disrupted(pi.pos) || self.is_disrupted(pj.pos),
                });
            }
        }
        out
    }

    fn jitter(&mut self) -> Vec2 {
        let amp = self.config.jitter;
        Vec2::new(
            (self.rng.gen::<f32>() - 0.5) * 2.0 * amp,
            (self.rng.gen::<f32>() - 0.5) * 2.0 * amp,
        )
    }

    /// Clear, stroke every edge, then dot every point on top.
    pub fn draw(&mut self, surface: &mut impl Surface) {
        surface.clear(self.bounds);
        for edge in self.edges() {
            let (mut from, mut to) = (self.points[edge.a].pos, self.points[edge.b].pos);
            if edge.disrupted {
                from += self.jitter();
                to += self.jitter();
            }
            surface.line(from, to, edge.stroke());
        }
        let fill = Fill {
            color: POINT_FILL,
            glow: Some((POINT_GLOW, POINT_GLOW_BLUR)),
        };
        for p in &self.points {
            surface.dot(p.pos, p.radius, fill);
        }
    }
}
