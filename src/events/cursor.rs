use crate::cursor::{CursorState, HOVER_TARGETS};
use crate::dom;
use crate::frame::{self, LoopHandle};
use crate::input;
use crate::page::classes;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Custom cursor element that trails the pointer.
///
/// Move events only record the position; the element itself is written at
/// most once per animation frame.
pub fn wire_cursor(document: &web::Document, selector: &str) -> anyhow::Result<LoopHandle> {
    let el = dom::query(document, selector).ok_or_else(|| anyhow::anyhow!("missing {}", selector))?;
    let state = Rc::new(RefCell::new(CursorState::default()));

    let s = state.clone();
    dom::add_listener(document, "mousemove", move |ev: web::MouseEvent| {
        s.borrow_mut().on_move(input::pointer_client(&ev), Instant::now());
    });
    let s = state.clone();
    dom::add_listener(document, "mousedown", move |_: web::MouseEvent| {
        s.borrow_mut().clicked = true;
    });
    let s = state.clone();
    dom::add_listener(document, "mouseup", move |_: web::MouseEvent| {
        s.borrow_mut().clicked = false;
    });

    for target in dom::query_all(document, HOVER_TARGETS) {
        let s = state.clone();
        dom::add_listener(&target, "mouseenter", move |_: web::MouseEvent| {
            s.borrow_mut().hover = true;
        });
        let s = state.clone();
        dom::add_listener(&target, "mouseleave", move |_: web::MouseEvent| {
            s.borrow_mut().hover = false;
        });
    }

    Ok(frame::start_loop(move || {
        let mut st = state.borrow_mut();
        if let Some(pos) = st.take_position() {
            dom::set_style(&el, "left", &format!("{}px", pos.x));
            dom::set_style(&el, "top", &format!("{}px", pos.y));
        }
        let c = st.classes(Instant::now());
        dom::toggle_class(&el, classes::IDLE, c.idle);
        dom::toggle_class(&el, classes::CLICKED, c.clicked);
        dom::toggle_class(&el, classes::HOVER, c.hover);
        true
    }))
}
