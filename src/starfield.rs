use crate::constants::*;
use crate::surface::{Fill, Surface};
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
}

/// Static star backdrop, regenerated whenever the viewport size settles.
pub struct Starfield {
    pub bounds: Vec2,
    pub stars: Vec<Star>,
    count: usize,
    rng: StdRng,
}

impl Starfield {
    pub fn new(count: usize, bounds: Vec2, seed: u64) -> Self {
        let mut field = Self {
            bounds,
            stars: Vec::with_capacity(count),
            count,
            rng: StdRng::seed_from_u64(seed),
        };
        field.regenerate(bounds);
        field
    }

    pub fn regenerate(&mut self, bounds: Vec2) {
        self.bounds = bounds;
        let rng = &mut self.rng;
        self.stars = (0..self.count)
            .map(|_| Star {
                pos: Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y),
                radius: STAR_RADIUS_MIN + rng.gen::<f32>() * STAR_RADIUS_SPAN,
            })
            .collect();
        log::debug!("[stars] regenerated {} stars", self.stars.len());
    }

    pub fn draw(&self, surface: &mut impl Surface) {
        surface.clear(self.bounds);
        let fill = Fill {
            color: STAR_FILL,
            glow: None,
        };
        for s in &self.stars {
            surface.dot(s.pos, s.radius, fill);
        }
    }
}
