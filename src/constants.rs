/// Tuning constants for the particle field, scroll chrome and cursor.
///
/// Everything here is hard-coded page behavior; `PageConfig` picks these up
/// as defaults so per-page overrides stay in one place.
// Particle field
pub const POINT_COUNT: usize = 150;
pub const MAX_DISTANCE: f32 = 120.0; // edges only below this (strict)
pub const DISRUPT_RADIUS: f32 = 170.0;
pub const POINT_RADIUS: f32 = 1.5;
pub const POINT_SPEED_MAX: f32 = 0.25; // per axis, per frame tick
pub const JITTER_AMPLITUDE: f32 = 5.0; // +- units per axis on disrupted ends

// Edge styling
pub const EDGE_OPACITY_NORMAL: f32 = 0.3;
pub const EDGE_OPACITY_DISRUPTED: f32 = 0.6;
pub const EDGE_WIDTH_NORMAL: f32 = 1.0;
pub const EDGE_WIDTH_DISRUPTED: f32 = 1.5;
pub const EDGE_RGB_NORMAL: [u8; 3] = [0, 255, 255];
pub const EDGE_RGB_DISRUPTED: [u8; 3] = [255, 0, 255];
pub const POINT_FILL: &str = "rgba(0, 255, 255, 0.7)";
pub const POINT_GLOW: &str = "#0ff";
pub const POINT_GLOW_BLUR: f32 = 6.0;

// Scroll chrome
pub const EXIT_THRESHOLD: f32 = 0.1; // landing progress past which the astronaut departs
pub const VISIBLE_THRESHOLD: f32 = 0.3; // intersection ratio for the `visible` class
pub const ARROW_THRESHOLD: f32 = 0.6; // viewport heights scrolled before the arrow shows
pub const BG_TRANSLATE_MAX: f32 = 50.0;

// Fly-away
pub const FLY_DURATION_SEC: f32 = 1.6;
pub const FLY_WAVE_X: (f32, f32) = (-300.0, 300.0);
pub const FLY_WAVE_Y: (f32, f32) = (-700.0, -400.0);
pub const FLY_ROTATION_DEG: (f32, f32) = (-200.0, 200.0);
pub const FLY_END_SCALE: f32 = 0.3;
pub const FLY_MID_X: f32 = 0.5; // waypoint fractions of the final offset
pub const FLY_MID_Y: f32 = 0.4;

// Cursor
pub const CURSOR_IDLE_MS: u64 = 1500;

// Starfield
pub const STAR_COUNT: usize = 200;
pub const STAR_RADIUS_MIN: f32 = 0.5;
pub const STAR_RADIUS_SPAN: f32 = 1.5;
pub const STAR_FILL: &str = "#fff";

// Resize work that rebuilds content waits this long for the last event
pub const RESIZE_DEBOUNCE_MS: u64 = 250;
