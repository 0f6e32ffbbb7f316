use crate::field::FieldConfig;
use crate::scroll::ScrollConfig;

/// Element ids/selectors and tuning for one page.
///
/// Any element that is missing at mount time disables the feature that
/// needs it; the rest of the page still mounts.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub cursor: &'static str,
    pub field_canvas_id: &'static str,
    pub disruption_container: &'static str,
    pub starfield_canvas_id: &'static str,
    pub progress_bar: &'static str,
    pub nav_arrow: &'static str,
    pub sections: &'static str,
    pub landing_id: &'static str,
    pub connect_id: &'static str,
    pub bg_bottom: &'static str,
    pub landing_bg_id: &'static str,
    pub astronaut_id: &'static str,
    /// Clicking these only sets the terminal fly-away class.
    pub fly_triggers: &'static str,
    pub fly_target_id: &'static str,
    /// `(element id, class)` added the first time the element is shown.
    pub reveal_once: &'static [(&'static str, &'static str)],
    /// `(element id, class)` held while the element has scrolled past the top.
    pub exit_classes: &'static [(&'static str, &'static str)],
    pub field: FieldConfig,
    pub scroll: ScrollConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            cursor: ".custom-cursor",
            field_canvas_id: "sci-fi-bg",
            disruption_container: ".landing-core",
            starfield_canvas_id: "starfield",
            progress_bar: ".scroll-progress-bar",
            nav_arrow: ".nav-arrow",
            sections: ".section",
            landing_id: "landing",
            connect_id: "connect",
            bg_bottom: ".bg-bottom",
            landing_bg_id: "landing-background",
            astronaut_id: "astronaut",
            fly_triggers: "#landing button, #landing .scroll-down-arrow",
            fly_target_id: "core1",
            reveal_once: &[("core1", "fade-in")],
            exit_classes: &[("core2", "blurred")],
            field: FieldConfig::default(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// CSS classes shared between the Rust side and the stylesheet.
pub mod classes {
    pub const VISIBLE: &str = "visible";
    pub const FLY_AWAY: &str = "fly-away";
    pub const IDLE: &str = "idle";
    pub const CLICKED: &str = "clicked";
    pub const HOVER: &str = "hover";
}

/// Attribute carrying the derived `SectionState` of each section.
pub const SECTION_STATE_ATTR: &str = "data-section-state";
