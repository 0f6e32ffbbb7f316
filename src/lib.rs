#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;

mod constants;
mod cursor;
mod dom;
mod events;
mod field;
mod flyaway;
mod frame;
mod input;
mod page;
mod render;
mod scroll;
mod starfield;
mod surface;
mod timing;

use page::PageConfig;

thread_local! {
    static MOUNTED: RefCell<Option<events::MountedPage>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-fx starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let page = events::mount_page(&document, &PageConfig::default());
    MOUNTED.with(|m| *m.borrow_mut() = Some(page));
    Ok(())
}

/// Stop every animation loop started for this page.
#[wasm_bindgen]
pub fn stop_effects() {
    MOUNTED.with(|m| {
        if let Some(page) = m.borrow_mut().take() {
            page.stop();
            log::info!("[page] effects stopped");
        }
    });
}
