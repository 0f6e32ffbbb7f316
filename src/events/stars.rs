use crate::constants::{RESIZE_DEBOUNCE_MS, STAR_COUNT};
use crate::dom;
use crate::frame::{self, LoopHandle};
use crate::render::CanvasSurface;
use crate::starfield::Starfield;
use crate::timing::Debounce;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

/// Static starfield on `#canvas_id`, rebuilt once resizing settles.
pub fn wire_starfield(document: &web::Document, canvas_id: &str) -> anyhow::Result<LoopHandle> {
    let canvas: web::HtmlCanvasElement = dom::by_id(document, canvas_id)?;
    let mut surface = CanvasSurface::new(canvas)?;
    let mut stars = Starfield::new(STAR_COUNT, surface.fit(), dom::random_seed());
    let resize = Rc::new(RefCell::new(Debounce::new(Duration::from_millis(
        RESIZE_DEBOUNCE_MS,
    ))));

    if let Some(window) = web::window() {
        let r = resize.clone();
        dom::add_listener(&window, "resize", move |_: web::Event| {
            r.borrow_mut().touch(Instant::now());
        });
    }

    Ok(frame::start_loop(move || {
        if resize.borrow_mut().poll(Instant::now()) {
            stars.regenerate(surface.fit());
        }
        stars.draw(&mut surface);
        true
    }))
}
