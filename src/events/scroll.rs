use crate::dom;
use crate::input::span_of;
use crate::page::{classes, PageConfig, SECTION_STATE_ATTR};
use crate::scroll::{self, ArrowInput, ScrollConfig, SectionState};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Elements the scroll pass writes to, looked up once at mount.
///
/// Each is optional: whatever is missing is simply skipped on every pass.
pub struct ScrollView {
    cfg: ScrollConfig,
    landing: Option<web::Element>,
    connect: Option<web::Element>,
    bg_bottom: Option<web::Element>,
    landing_bg: Option<web::Element>,
    astronaut: Option<web::Element>,
    nav_arrow: Option<web::Element>,
    progress_bar: Option<web::Element>,
    sections: Vec<web::Element>,
    exit_classes: Vec<(web::Element, &'static str)>,
}

impl ScrollView {
    pub fn collect(document: &web::Document, page: &PageConfig) -> Self {
        let by_id = |id: &str| document.get_element_by_id(id);
        let view = Self {
            cfg: page.scroll,
            landing: by_id(page.landing_id),
            connect: by_id(page.connect_id),
            bg_bottom: dom::query(document, page.bg_bottom),
            landing_bg: by_id(page.landing_bg_id),
            astronaut: by_id(page.astronaut_id),
            nav_arrow: dom::query(document, page.nav_arrow),
            progress_bar: dom::query(document, page.progress_bar),
            sections: dom::query_all(document, page.sections),
            exit_classes: page
                .exit_classes
                .iter()
                .filter_map(|&(id, class)| by_id(id).map(|el| (el, class)))
                .collect(),
        };
        log::debug!(
            "[scroll] landing={} arrow={} bar={} sections={}",
            view.landing.is_some(),
            view.nav_arrow.is_some(),
            view.progress_bar.is_some(),
            view.sections.len()
        );
        view
    }

    /// Recompute everything from current geometry.
    pub fn update(&self, window: &web::Window) {
        let vh = dom::viewport_height(window);
        let scroll_y = dom::scroll_y(window);

        if let Some(landing) = &self.landing {
            let progress = scroll::compute_section_progress(span_of(landing).bottom, vh);
            let fx = scroll::apply_chrome_effects(progress, &self.cfg);
            if let Some(el) = &self.bg_bottom {
                dom::set_style(el, "transform", &fx.transform_css());
            }
            if let Some(el) = &self.landing_bg {
                dom::set_style(el, "opacity", &fx.opacity.to_string());
            }
            if let Some(el) = &self.astronaut {
                dom::toggle_class(el, classes::FLY_AWAY, fx.exited);
            }
        }

        if let Some(arrow) = &self.nav_arrow {
            let visible = self.cfg.arrow_visible(&ArrowInput {
                scroll_fraction: scroll::scroll_fraction(scroll_y, vh),
                viewport_height: vh,
                first: self.landing.as_ref().map(span_of),
                last: self.connect.as_ref().map(span_of),
            });
            dom::toggle_class(arrow, classes::VISIBLE, visible);
        }

        if let Some(bar) = &self.progress_bar {
            let doc_height = dom::window_document()
                .and_then(|d| d.body())
                .map(|b| b.scroll_height() as f32)
                .unwrap_or(vh);
            let pct = scroll::scroll_percent(scroll_y, doc_height, vh);
            dom::set_style(bar, "width", &format!("{}%", pct));
        }

        for section in &self.sections {
            let state = SectionState::classify(span_of(section), vh, &self.cfg);
            _ = section.set_attribute(SECTION_STATE_ATTR, state.as_str());
        }

        for (el, class) in &self.exit_classes {
            let exited = SectionState::classify(span_of(el), vh, &self.cfg) == SectionState::Exited;
            dom::toggle_class(el, class, exited);
        }
    }
}

/// Drive `ScrollView::update` from scroll, resize and load, plus once now.
pub fn wire_scroll_chrome(document: &web::Document, page: &PageConfig) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let view = Rc::new(ScrollView::collect(document, page));
    for event in ["scroll", "resize", "load"] {
        let view = view.clone();
        let wnd = window.clone();
        dom::add_listener(&window, event, move |_: web::Event| view.update(&wnd));
    }
    view.update(&window);
    Ok(())
}

/// Nav arrow click: smooth scroll to the next section at or below the top.
pub fn wire_nav_arrow(document: &web::Document, page: &PageConfig) -> anyhow::Result<()> {
    let arrow = dom::query(document, page.nav_arrow)
        .ok_or_else(|| anyhow::anyhow!("missing {}", page.nav_arrow))?;
    let sections = dom::query_all(document, page.sections);
    dom::add_listener(&arrow, "click", move |_: web::Event| {
        let tops: Vec<f32> = sections.iter().map(|s| span_of(s).top).collect();
        if let Some(i) = scroll::next_section_index(&tops) {
            dom::scroll_into_view_smooth(&sections[i]);
        }
    });
    Ok(())
}

fn observe(
    targets: &[web::Element],
    threshold: f32,
    mut on_entry: impl FnMut(&web::IntersectionObserverEntry, &web::IntersectionObserver) + 'static,
) -> anyhow::Result<()> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    on_entry(&entry, &observer);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold as f64));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    callback.forget();
    for el in targets {
        observer.observe(el);
    }
    Ok(())
}

/// Toggle `visible` on each section around the 30% intersection mark, and
/// add each reveal-once class the first time its element shows.
pub fn wire_section_reveal(document: &web::Document, page: &PageConfig) -> anyhow::Result<()> {
    let cfg = page.scroll;
    let sections = dom::query_all(document, page.sections);
    if !sections.is_empty() {
        observe(&sections, cfg.visible_threshold, move |entry, _| {
            let visible = cfg.section_visible(entry.intersection_ratio() as f32);
            dom::toggle_class(&entry.target(), classes::VISIBLE, visible);
        })?;
    }

    for &(id, class) in page.reveal_once {
        let Some(el) = document.get_element_by_id(id) else {
            log::debug!("[scroll] reveal target #{} missing", id);
            continue;
        };
        observe(&[el], cfg.visible_threshold, move |entry, observer| {
            let target = entry.target();
            if cfg.section_visible(entry.intersection_ratio() as f32) {
                _ = target.class_list().add_1(class);
                observer.unobserve(&target);
            }
        })?;
    }
    Ok(())
}
