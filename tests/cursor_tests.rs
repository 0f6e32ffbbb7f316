// Host-side tests for the cursor state, debounce timing and the starfield.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod timing {
    include!("../src/timing.rs");
}
mod cursor {
    include!("../src/cursor.rs");
}
mod surface {
    include!("../src/surface.rs");
}
mod starfield {
    include!("../src/starfield.rs");
}

use cursor::*;
use glam::Vec2;
use instant::Instant;
use std::time::Duration;
use timing::{since, Debounce};

#[test]
fn cursor_is_not_idle_before_first_move() {
    let c = CursorState::default();
    assert!(!c.is_idle(Instant::now() + Duration::from_secs(10)));
}

#[test]
fn cursor_goes_idle_after_quiet_period() {
    let mut c = CursorState::default();
    let t0 = Instant::now();
    c.on_move(Vec2::new(10.0, 20.0), t0);
    assert!(!c.is_idle(t0 + Duration::from_millis(1499)));
    assert!(c.is_idle(t0 + Duration::from_millis(constants::CURSOR_IDLE_MS)));

    let t1 = t0 + Duration::from_millis(2000);
    c.on_move(Vec2::new(11.0, 20.0), t1);
    assert!(!c.is_idle(t1 + Duration::from_millis(100)), "movement wakes the cursor");
}

#[test]
fn cursor_position_is_taken_once_per_change() {
    let mut c = CursorState::default();
    assert_eq!(c.take_position(), None);
    let t0 = Instant::now();
    c.on_move(Vec2::new(1.0, 2.0), t0);
    c.on_move(Vec2::new(3.0, 4.0), t0);
    assert_eq!(c.take_position(), Some(Vec2::new(3.0, 4.0)));
    assert_eq!(c.take_position(), None);
}

#[test]
fn cursor_classes_reflect_buttons_and_hover() {
    let mut c = CursorState::new(Duration::from_millis(50));
    let t0 = Instant::now();
    c.on_move(Vec2::ZERO, t0);
    c.clicked = true;
    c.hover = true;
    assert_eq!(
        c.classes(t0 + Duration::from_millis(60)),
        CursorClasses {
            idle: true,
            clicked: true,
            hover: true
        }
    );
}

#[test]
fn since_saturates_at_zero() {
    let t0 = Instant::now();
    let t1 = t0 + Duration::from_millis(5);
    assert_eq!(since(t1, t0), Duration::ZERO);
    assert_eq!(since(t0, t1), Duration::from_millis(5));
}

#[test]
fn debounce_fires_once_after_last_touch() {
    let mut d = Debounce::new(Duration::from_millis(250));
    let t0 = Instant::now();
    assert!(!d.poll(t0));
    d.touch(t0);
    d.touch(t0 + Duration::from_millis(200));
    assert!(d.is_pending());
    assert!(!d.poll(t0 + Duration::from_millis(300)), "second touch pushed the deadline");
    assert!(d.poll(t0 + Duration::from_millis(450)));
    assert!(!d.poll(t0 + Duration::from_millis(900)));
    assert!(!d.is_pending());
}

#[test]
fn starfield_generates_stars_in_bounds() {
    use starfield::Starfield;
    let bounds = Vec2::new(1024.0, 768.0);
    let mut sf = Starfield::new(constants::STAR_COUNT, bounds, 9);
    assert_eq!(sf.stars.len(), constants::STAR_COUNT);
    for s in &sf.stars {
        assert!(s.pos.x >= 0.0 && s.pos.x <= bounds.x);
        assert!(s.pos.y >= 0.0 && s.pos.y <= bounds.y);
        assert!(s.radius >= constants::STAR_RADIUS_MIN);
        assert!(s.radius < constants::STAR_RADIUS_MIN + constants::STAR_RADIUS_SPAN);
    }

    let small = Vec2::new(100.0, 50.0);
    sf.regenerate(small);
    assert_eq!(sf.bounds, small);
    assert_eq!(sf.stars.len(), constants::STAR_COUNT);
    assert!(sf.stars.iter().all(|s| s.pos.x <= 100.0 && s.pos.y <= 50.0));
}

#[test]
fn starfield_draws_every_star_without_glow() {
    use starfield::Starfield;
    use surface::{Fill, Stroke, Surface};

    #[derive(Default)]
    struct Count {
        clears: usize,
        dots: usize,
    }
    impl Surface for Count {
        fn clear(&mut self, _: Vec2) {
            self.clears += 1;
        }
        fn line(&mut self, _: Vec2, _: Vec2, _: Stroke) {
            panic!("starfield draws no lines");
        }
        fn dot(&mut self, _: Vec2, _: f32, fill: Fill) {
            assert_eq!(fill.glow, None);
            self.dots += 1;
        }
    }

    let sf = Starfield::new(40, Vec2::new(300.0, 200.0), 1);
    let mut c = Count::default();
    sf.draw(&mut c);
    assert_eq!(c.clears, 1);
    assert_eq!(c.dots, 40);
}
