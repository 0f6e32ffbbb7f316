pub mod cursor;
pub mod field;
pub mod fly;
pub mod scroll;
pub mod stars;

use crate::frame::LoopHandle;
use crate::page::PageConfig;
use web_sys as web;

/// Loops owned by a mounted page, kept so they can be stopped explicitly.
#[derive(Default)]
pub struct MountedPage {
    pub loops: Vec<LoopHandle>,
}

impl MountedPage {
    pub fn stop(&self) {
        for l in &self.loops {
            l.stop();
        }
    }
}

fn mounted<T>(name: &str, result: anyhow::Result<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("[page] {} disabled: {:?}", name, e);
            None
        }
    }
}

/// Attach every decorative feature `page` describes.
///
/// Features mount independently; a missing element only disables the
/// feature that needed it.
pub fn mount_page(document: &web::Document, page: &PageConfig) -> MountedPage {
    let mut out = MountedPage::default();

    let loops = [
        mounted("cursor", cursor::wire_cursor(document, page.cursor)),
        mounted(
            "particle field",
            field::wire_particle_field(
                document,
                page.field_canvas_id,
                page.disruption_container,
                page.field,
            ),
        ),
        mounted(
            "starfield",
            stars::wire_starfield(document, page.starfield_canvas_id),
        ),
    ];
    out.loops.extend(loops.into_iter().flatten());

    mounted("scroll chrome", scroll::wire_scroll_chrome(document, page));
    mounted("nav arrow", scroll::wire_nav_arrow(document, page));
    mounted("section reveal", scroll::wire_section_reveal(document, page));
    mounted("fly-away", fly::wire_fly_away(document, page));

    log::info!("[page] mounted with {} frame loops", out.loops.len());
    out
}
