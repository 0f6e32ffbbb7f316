use glam::Vec2;

/// Line style for one stroked segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub rgb: [u8; 3],
    pub alpha: f32,
    pub width: f32,
}

impl Stroke {
    pub fn css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.rgb[0], self.rgb[1], self.rgb[2], self.alpha
        )
    }
}

/// Fill style for dots, with an optional glow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fill {
    pub color: &'static str,
    pub glow: Option<(&'static str, f32)>,
}

/// Minimal 2D drawing target the field and starfield render into.
///
/// The browser implementation wraps `CanvasRenderingContext2d`; tests record
/// calls instead.
pub trait Surface {
    fn clear(&mut self, size: Vec2);
    fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke);
    fn dot(&mut self, center: Vec2, radius: f32, fill: Fill);
}
