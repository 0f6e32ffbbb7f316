use crate::dom;
use crate::flyaway::{FlyAway, FlyStep};
use crate::frame;
use crate::page::{classes, PageConfig};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Terminal fly-away state: just the class. Adding it twice is a no-op.
#[inline]
pub fn trigger_fly_away(target: &web::Element) {
    _ = target.class_list().add_1(classes::FLY_AWAY);
}

#[derive(Clone)]
struct FlyWiring {
    fly: Rc<RefCell<FlyAway>>,
    focal: web::Element,
    destination: Option<web::Element>,
}

/// Astronaut click runs the animated exit, then scrolls to the fly target.
/// Other landing controls only apply the terminal class.
pub fn wire_fly_away(document: &web::Document, page: &PageConfig) -> anyhow::Result<()> {
    let focal = document
        .get_element_by_id(page.astronaut_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", page.astronaut_id))?;
    let destination = document.get_element_by_id(page.fly_target_id);
    if destination.is_none() {
        log::warn!("[fly] #{} missing; fly-away will not scroll", page.fly_target_id);
    }
    let w = FlyWiring {
        fly: Rc::new(RefCell::new(FlyAway::new(dom::random_seed()))),
        focal: focal.clone(),
        destination,
    };

    let wc = w.clone();
    dom::add_listener(&focal, "click", move |_: web::Event| animate_and_scroll(&wc));

    let terminal = focal.clone();
    let n = dom::add_click_listeners(document, page.fly_triggers, move || {
        trigger_fly_away(&terminal)
    });
    log::debug!("[fly] {} extra triggers", n);
    Ok(())
}

fn animate_and_scroll(w: &FlyWiring) {
    if !w.fly.borrow_mut().start(Instant::now()) {
        return;
    }
    dom::set_style(&w.focal, "pointer-events", "none");
    let w = w.clone();
    frame::start_loop(move || {
        let step = w.fly.borrow_mut().step(Instant::now());
        match step {
            FlyStep::Running(f) => {
                dom::set_style(&w.focal, "transform", &f.transform_css());
                dom::set_style(&w.focal, "opacity", &f.opacity.to_string());
                true
            }
            FlyStep::Finished => {
                if let Some(dest) = &w.destination {
                    dom::scroll_into_view_smooth(dest);
                }
                dom::clear_styles(&w.focal);
                log::info!("[fly] done");
                false
            }
            FlyStep::Idle => false,
        }
    });
}
