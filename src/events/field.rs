use crate::dom;
use crate::field::{FieldConfig, ParticleField};
use crate::frame::{self, LoopHandle};
use crate::input;
use crate::render::CanvasSurface;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct FieldWiring {
    pub field: Rc<RefCell<ParticleField>>,
    pub surface: Rc<RefCell<CanvasSurface>>,
}

/// Mount the particle field on `#canvas_id` and start its frame loop.
///
/// Pointer disruption is tracked on `container`; if that element is absent
/// the field still animates, just without disruption.
pub fn wire_particle_field(
    document: &web::Document,
    canvas_id: &str,
    container: &str,
    config: FieldConfig,
) -> anyhow::Result<LoopHandle> {
    let canvas: web::HtmlCanvasElement = dom::by_id(document, canvas_id)?;
    let surface = CanvasSurface::new(canvas)?;
    let bounds = surface.fit();
    let field = ParticleField::new(config, bounds, dom::random_seed());
    log::info!(
        "[field] {} points on {:.0}x{:.0}",
        field.points.len(),
        bounds.x,
        bounds.y
    );
    let w = FieldWiring {
        field: Rc::new(RefCell::new(field)),
        surface: Rc::new(RefCell::new(surface)),
    };

    wire_resize(&w);
    match dom::query(document, container) {
        Some(el) => wire_disruption(&w, &el),
        None => log::warn!("[field] {} missing; disruption disabled", container),
    }

    Ok(frame::start_loop(move || {
        let mut field = w.field.borrow_mut();
        field.tick();
        field.draw(&mut *w.surface.borrow_mut());
        true
    }))
}

fn wire_resize(w: &FieldWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    dom::add_listener(&window, "resize", move |_: web::Event| {
        let bounds = w.surface.borrow().fit();
        w.field.borrow_mut().resize(bounds);
    });
}

fn wire_disruption(w: &FieldWiring, container: &web::Element) {
    let field = w.field.clone();
    let el = container.clone();
    dom::add_listener(container, "pointermove", move |ev: web::PointerEvent| {
        let at = input::pointer_relative(&ev, &el);
        field.borrow_mut().set_disruption(Some(at));
    });

    let field = w.field.clone();
    dom::add_listener(container, "pointerleave", move |_: web::PointerEvent| {
        field.borrow_mut().set_disruption(None);
    });
}
