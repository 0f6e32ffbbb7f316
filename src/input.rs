use glam::Vec2;
use web_sys as web;

/// Pointer position relative to `el`'s top-left corner, in CSS px.
#[inline]
pub fn pointer_relative(ev: &web::MouseEvent, el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

#[inline]
pub fn pointer_client(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Vertical extent of `el` in viewport coordinates.
#[inline]
pub fn span_of(el: &web::Element) -> crate::scroll::Span {
    let rect = el.get_bounding_client_rect();
    crate::scroll::Span::new(rect.top() as f32, rect.bottom() as f32)
}
