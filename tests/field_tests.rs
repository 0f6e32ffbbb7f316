// Host-side tests for the particle field.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod surface {
    include!("../src/surface.rs");
}
mod field {
    include!("../src/field.rs");
}

use field::*;
use glam::Vec2;
use surface::{Fill, Stroke, Surface};

#[derive(Default)]
struct Recorder {
    clears: Vec<Vec2>,
    lines: Vec<(Vec2, Vec2, Stroke)>,
    dots: Vec<(Vec2, f32, Fill)>,
}

impl Surface for Recorder {
    fn clear(&mut self, size: Vec2) {
        assert!(self.lines.is_empty() && self.dots.is_empty(), "clear must come first");
        self.clears.push(size);
    }
    fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        assert!(self.dots.is_empty(), "edges are drawn before points");
        self.lines.push((from, to, stroke));
    }
    fn dot(&mut self, center: Vec2, radius: f32, fill: Fill) {
        self.dots.push((center, radius, fill));
    }
}

fn still(x: f32, y: f32) -> Point {
    Point::new(Vec2::new(x, y), Vec2::ZERO, constants::POINT_RADIUS)
}

fn fixed_field(points: Vec<Point>, max_distance: f32) -> ParticleField {
    let config = FieldConfig {
        max_distance,
        ..FieldConfig::default()
    };
    ParticleField::with_points(config, Vec2::new(200.0, 200.0), points, 7)
}

#[test]
fn initialize_creates_exact_count_within_bounds() {
    let bounds = Vec2::new(800.0, 600.0);
    for n in [0usize, 1, 7, 150, 200] {
        let config = FieldConfig {
            point_count: n,
            ..FieldConfig::default()
        };
        let field = ParticleField::new(config, bounds, 42);
        assert_eq!(field.points.len(), n);
        for p in &field.points {
            assert!(p.pos.x >= 0.0 && p.pos.x <= bounds.x);
            assert!(p.pos.y >= 0.0 && p.pos.y <= bounds.y);
            assert!(p.vel.x.abs() <= constants::POINT_SPEED_MAX);
            assert!(p.vel.y.abs() <= constants::POINT_SPEED_MAX);
            assert_eq!(p.radius, constants::POINT_RADIUS);
        }
    }
}

#[test]
fn initialize_replaces_the_whole_collection() {
    let mut field = ParticleField::new(FieldConfig::default(), Vec2::new(300.0, 300.0), 1);
    let before = field.points.clone();
    field.initialize(10, Vec2::new(50.0, 50.0));
    assert_eq!(field.points.len(), 10);
    assert_ne!(field.points[..10], before[..10]);
    assert!(field.points.iter().all(|p| p.pos.x <= 50.0 && p.pos.y <= 50.0));
}

#[test]
fn same_seed_gives_same_field() {
    let a = ParticleField::new(FieldConfig::default(), Vec2::new(640.0, 480.0), 99);
    let b = ParticleField::new(FieldConfig::default(), Vec2::new(640.0, 480.0), 99);
    assert_eq!(a.points, b.points);
}

#[test]
fn tick_never_overshoots_by_more_than_one_step() {
    let bounds = Vec2::new(400.0, 300.0);
    let mut field = ParticleField::new(FieldConfig::default(), bounds, 5);
    for _ in 0..5000 {
        field.tick();
        for p in &field.points {
            let (sx, sy) = (p.vel.x.abs() + 1e-3, p.vel.y.abs() + 1e-3);
            assert!(p.pos.x >= -sx && p.pos.x <= bounds.x + sx, "x={}", p.pos.x);
            assert!(p.pos.y >= -sy && p.pos.y <= bounds.y + sy, "y={}", p.pos.y);
        }
    }
}

#[test]
fn crossing_an_edge_reflects_velocity_without_clamping() {
    let bounds = Vec2::new(100.0, 100.0);
    let mut p = Point::new(Vec2::new(0.1, 50.0), Vec2::new(-0.25, 0.2), 1.5);
    p.step(bounds);
    assert!((p.pos.x - -0.15).abs() < 1e-6, "position is not clamped");
    assert_eq!(p.vel.x, 0.25);
    assert_eq!(p.vel.y, 0.2);
    p.step(bounds);
    assert!((p.pos.x - 0.1).abs() < 1e-6);
    assert_eq!(p.vel.x, 0.25);

    let mut q = Point::new(Vec2::new(50.0, 99.9), Vec2::new(0.0, 0.25), 1.5);
    q.step(bounds);
    assert_eq!(q.vel.y, -0.25);
}

#[test]
fn resize_keeps_existing_points() {
    let mut field = ParticleField::new(FieldConfig::default(), Vec2::new(800.0, 600.0), 3);
    let before = field.points.clone();
    field.resize(Vec2::new(200.0, 100.0));
    assert_eq!(field.bounds, Vec2::new(200.0, 100.0));
    assert_eq!(field.points, before);
}

#[test]
fn edge_opacity_is_strict_at_max_distance() {
    assert_eq!(edge_opacity(120.0, 120.0), None);
    assert_eq!(edge_opacity(130.0, 120.0), None);
    assert_eq!(edge_opacity(0.0, 120.0), Some(1.0));
    let half = edge_opacity(60.0, 120.0).unwrap();
    assert!((half - 0.5).abs() < 1e-6);
}

#[test]
fn pair_at_exactly_max_distance_has_no_edge() {
    let field = fixed_field(vec![still(0.0, 0.0), still(120.0, 0.0)], 120.0);
    assert!(field.edges().is_empty());
}

#[test]
fn half_distance_edge_uses_normal_factor() {
    let field = fixed_field(vec![still(0.0, 0.0), still(60.0, 0.0)], 120.0);
    let edges = field.edges();
    assert_eq!(edges.len(), 1);
    assert!((edges[0].opacity - 0.5).abs() < 1e-6);
    let stroke = edges[0].stroke();
    assert!((stroke.alpha - 0.5 * constants::EDGE_OPACITY_NORMAL).abs() < 1e-6);
    assert_eq!(stroke.rgb, constants::EDGE_RGB_NORMAL);
    assert_eq!(stroke.width, constants::EDGE_WIDTH_NORMAL);
}

fn four_points() -> Vec<Point> {
    vec![
        still(0.0, 0.0),
        still(10.0, 0.0),
        still(0.0, 10.0),
        still(100.0, 100.0),
    ]
}

#[test]
fn far_point_never_links_to_the_cluster() {
    // (10,0)-(0,10) is 14.14 apart, so all three cluster pairs link at 20.
    let field = fixed_field(four_points(), 20.0);
    let edges = field.edges();
    assert_eq!(edges.len(), 3);
    assert!(edges.iter().all(|e| e.a != 3 && e.b != 3));
    assert!(edges.iter().all(|e| e.a < e.b));
}

#[test]
fn tighter_threshold_keeps_only_the_two_short_edges() {
    let field = fixed_field(four_points(), 12.0);
    let pairs: Vec<(usize, usize)> = field.edges().iter().map(|e| (e.a, e.b)).collect();
    assert_eq!(pairs, vec![(0, 1), (0, 2)]);

    let mut rec = Recorder::default();
    let mut field = field;
    field.draw(&mut rec);
    assert_eq!(rec.lines.len(), 2);
    assert_eq!(rec.dots.len(), 4);
}

#[test]
fn disruption_marks_edges_touching_the_zone() {
    let mut field = fixed_field(
        vec![
            still(0.0, 0.0),
            still(10.0, 0.0),
            still(150.0, 150.0),
            still(160.0, 150.0),
        ],
        20.0,
    );
    field.config.disrupt_radius = 5.0;
    field.set_disruption(Some(Vec2::new(1.0, 1.0)));
    let edges = field.edges();
    assert_eq!(edges.len(), 2);
    assert!(edges[0].disrupted, "near edge disrupted");
    assert!(!edges[1].disrupted, "far edge untouched");

    let stroke = edges[0].stroke();
    assert_eq!(stroke.rgb, constants::EDGE_RGB_DISRUPTED);
    assert_eq!(stroke.width, constants::EDGE_WIDTH_DISRUPTED);
    assert!((stroke.alpha - edges[0].opacity * constants::EDGE_OPACITY_DISRUPTED).abs() < 1e-6);
}

#[test]
fn disrupted_edges_jitter_drawn_ends_only() {
    let mut field = fixed_field(
        vec![
            still(0.0, 0.0),
            still(10.0, 0.0),
            still(150.0, 150.0),
            still(160.0, 150.0),
        ],
        20.0,
    );
    field.set_disruption(Some(Vec2::new(5.0, 0.0)));
    let stored = field.points.clone();
    let amp = field.config.jitter + 1e-4;

    let mut rec = Recorder::default();
    field.draw(&mut rec);
    assert_eq!(rec.clears, vec![field.bounds]);
    assert_eq!(rec.lines.len(), 2);

    let (from, to, _) = rec.lines[0];
    assert!((from - stored[0].pos).abs().max_element() <= amp);
    assert!((to - stored[1].pos).abs().max_element() <= amp);

    let (from, to, _) = rec.lines[1];
    assert_eq!(from, stored[2].pos);
    assert_eq!(to, stored[3].pos);

    assert_eq!(field.points, stored, "draw never moves stored points");
    let drawn: Vec<Vec2> = rec.dots.iter().map(|d| d.0).collect();
    let true_pos: Vec<Vec2> = stored.iter().map(|p| p.pos).collect();
    assert_eq!(drawn, true_pos);
}

#[test]
fn clearing_disruption_restores_normal_edges() {
    let mut field = fixed_field(vec![still(0.0, 0.0), still(10.0, 0.0)], 20.0);
    field.set_disruption(Some(Vec2::ZERO));
    assert!(field.edges()[0].disrupted);
    field.set_disruption(None);
    assert_eq!(field.disruption(), None);
    assert!(!field.edges()[0].disrupted);
}

#[test]
fn points_are_drawn_with_glow() {
    let mut field = ParticleField::new(
        FieldConfig {
            point_count: 12,
            ..FieldConfig::default()
        },
        Vec2::new(500.0, 500.0),
        11,
    );
    let mut rec = Recorder::default();
    field.draw(&mut rec);
    assert_eq!(rec.dots.len(), 12);
    for (_, r, fill) in &rec.dots {
        assert_eq!(*r, constants::POINT_RADIUS);
        assert_eq!(fill.color, constants::POINT_FILL);
        assert_eq!(fill.glow, Some((constants::POINT_GLOW, constants::POINT_GLOW_BLUR)));
    }
}

#[test]
fn stroke_css_formats_rgba() {
    let s = Stroke {
        rgb: [0, 255, 255],
        alpha: 0.25,
        width: 1.0,
    };
    assert_eq!(s.css(), "rgba(0, 255, 255, 0.25)");
}
