// Pure scroll geometry: section progress, chrome effects, arrow rules and
// the derived per-section state.
//
// Nothing here is cached between events. Callers read fresh bounding rects
// on every scroll/resize and feed them in; the DOM class list is the only
// place a result survives until the next event.

use crate::constants::*;

/// Vertical extent of an element in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub top: f32,
    pub bottom: f32,
}

impl Span {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    /// Same overlap test as `top <= innerHeight && bottom >= 0`.
    #[inline]
    pub fn overlaps_viewport(&self, viewport_height: f32) -> bool {
        self.top <= viewport_height && self.bottom >= 0.0
    }

    /// Fraction of the element's own height currently inside the viewport.
    pub fn visible_ratio(&self, viewport_height: f32) -> f32 {
        let height = self.bottom - self.top;
        if height <= 0.0 {
            return 0.0;
        }
        let shown = self.bottom.min(viewport_height) - self.top.max(0.0);
        (shown / height).clamp(0.0, 1.0)
    }
}

/// 0 while the section's bottom is at or below the viewport bottom, rising to
/// 1 once the bottom edge has passed the viewport top.
#[inline]
pub fn compute_section_progress(bottom: f32, viewport_height: f32) -> f32 {
    if viewport_height <= 0.0 {
        return if bottom <= 0.0 { 1.0 } else { 0.0 };
    }
    1.0 - (bottom / viewport_height).clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    pub exit_threshold: f32,
    pub visible_threshold: f32,
    pub arrow_threshold: f32,
    pub translate_max: f32,
    pub arrow_rule: ArrowRule,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            exit_threshold: EXIT_THRESHOLD,
            visible_threshold: VISIBLE_THRESHOLD,
            arrow_threshold: ARROW_THRESHOLD,
            translate_max: BG_TRANSLATE_MAX,
            arrow_rule: ArrowRule::ScrollFraction,
        }
    }
}

/// Derived page chrome for one landing progress value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChromeEffects {
    /// `translateY` in px for the background layer.
    pub translate_y: f32,
    /// Opacity for the landing background.
    pub opacity: f32,
    /// Focal graphic should be in its departing state.
    pub exited: bool,
}

impl ChromeEffects {
    pub fn transform_css(&self) -> String {
        format!("translateY({}px)", self.translate_y)
    }
}

pub fn apply_chrome_effects(progress: f32, cfg: &ScrollConfig) -> ChromeEffects {
    ChromeEffects {
        translate_y: (progress * cfg.translate_max).min(cfg.translate_max),
        opacity: 1.0 - progress,
        exited: progress > cfg.exit_threshold,
    }
}

/// Which rule decides whether the navigation arrow is shown.
///
/// Only one is ever active for a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowRule {
    /// Visible once more than `arrow_threshold` viewport heights are scrolled.
    ScrollFraction,
    /// Hidden while the first or last section overlaps the viewport.
    HideAtExtremes,
}

/// Inputs for one arrow decision; only the fields the active rule needs
/// are read.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowInput {
    pub scroll_fraction: f32,
    pub viewport_height: f32,
    pub first: Option<Span>,
    pub last: Option<Span>,
}

#[inline]
pub fn evaluate_arrow_visibility(scroll_fraction: f32, threshold: f32) -> bool {
    scroll_fraction > threshold
}

#[inline]
pub fn arrow_visible_outside_extremes(first: Option<Span>, last: Option<Span>, vh: f32) -> bool {
    let at_extreme = |s: Option<Span>| s.map(|s| s.overlaps_viewport(vh)).unwrap_or(false);
    !(at_extreme(first) || at_extreme(last))
}

impl ScrollConfig {
    pub fn arrow_visible(&self, input: &ArrowInput) -> bool {
        match self.arrow_rule {
            ArrowRule::ScrollFraction => {
                evaluate_arrow_visibility(input.scroll_fraction, self.arrow_threshold)
            }
            ArrowRule::HideAtExtremes => {
                arrow_visible_outside_extremes(input.first, input.last, input.viewport_height)
            }
        }
    }

    #[inline]
    pub fn section_visible(&self, intersection_ratio: f32) -> bool {
        intersection_ratio >= self.visible_threshold
    }
}

/// `scrollY / innerHeight`, 0 for a degenerate viewport.
#[inline]
pub fn scroll_fraction(scroll_y: f32, viewport_height: f32) -> f32 {
    if viewport_height > 0.0 {
        scroll_y / viewport_height
    } else {
        0.0
    }
}

/// Progress bar width in percent of the scrollable range.
pub fn scroll_percent(scroll_y: f32, document_height: f32, viewport_height: f32) -> f32 {
    let range = document_height - viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_y / range * 100.0).clamp(0.0, 100.0)
}

/// Index of the section the nav arrow should scroll to: the first whose top
/// is at or below the viewport top, falling back to the first section.
pub fn next_section_index(tops: &[f32]) -> Option<usize> {
    if tops.is_empty() {
        return None;
    }
    Some(tops.iter().position(|&t| t >= 0.0).unwrap_or(0))
}

/// Per-section lifecycle, recomputed from geometry on every event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionState {
    Hidden,
    Entering,
    Visible,
    Exiting,
    Exited,
}

impl SectionState {
    pub fn classify(span: Span, viewport_height: f32, cfg: &ScrollConfig) -> Self {
        if span.bottom <= 0.0 {
            return SectionState::Exited;
        }
        if span.top >= viewport_height {
            return SectionState::Hidden;
        }
        if compute_section_progress(span.bottom, viewport_height) > cfg.exit_threshold {
            return SectionState::Exiting;
        }
        if cfg.section_visible(span.visible_ratio(viewport_height)) {
            SectionState::Visible
        } else {
            SectionState::Entering
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionState::Hidden => "hidden",
            SectionState::Entering => "entering",
            SectionState::Visible => "visible",
            SectionState::Exiting => "exiting",
            SectionState::Exited => "exited",
        }
    }
}
