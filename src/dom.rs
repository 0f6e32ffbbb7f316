use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// Look up `#id` and cast it, naming the id in the error.
pub fn by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has the wrong element type: {:?}", id, e))
}

/// Attach a listener for the lifetime of the page.
pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn add_click_listeners(
    document: &web::Document,
    selector: &str,
    handler: impl FnMut() + Clone + 'static,
) -> usize {
    let targets = query_all(document, selector);
    for el in &targets {
        let mut h = handler.clone();
        add_listener(el, "click", move |_: web::Event| h());
    }
    targets.len()
}

#[inline]
pub fn toggle_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(h) = el.dyn_ref::<web::HtmlElement>() {
        _ = h.style().set_property(property, value);
    }
}

/// Drop every inline style (GSAP's `clearProps: 'all'`).
#[inline]
pub fn clear_styles(el: &web::Element) {
    _ = el.remove_attribute("style");
}

pub fn scroll_into_view_smooth(el: &web::Element) {
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

#[inline]
pub fn viewport_height(window: &web::Window) -> f32 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

/// Size the backing store to CSS size * devicePixelRatio and return the CSS
/// size the drawing code works in.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (Vec2, f64) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let w_css = canvas.client_width().max(1) as f64;
    let h_css = canvas.client_height().max(1) as f64;
    canvas.set_width(((w_css * dpr) as u32).max(1));
    canvas.set_height(((h_css * dpr) as u32).max(1));
    (Vec2::new(w_css as f32, h_css as f32), dpr)
}

/// Fresh RNG seed per page load.
#[inline]
pub fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}
