use crate::constants::{CAPTION_SELECTOR, FIGURE_SELECTOR};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Top-left of `el` relative to `surface_el`, plus its size, in CSS pixels.
pub fn rect_relative_to(el: &web::Element, surface_el: &web::Element) -> (Vec2, Vec2) {
    let r = el.get_bounding_client_rect();
    let s = surface_el.get_bounding_client_rect();
    (
        Vec2::new((r.left() - s.left()) as f32, (r.top() - s.top()) as f32),
        Vec2::new(r.width() as f32, r.height() as f32),
    )
}

/// Client coordinates converted into the surface's coordinate space. The
/// surface rect is re-read on every call since it moves under scroll/resize.
#[inline]
pub fn surface_point(surface_el: &web::Element, client_x: f32, client_y: f32) -> Vec2 {
    let s = surface_el.get_bounding_client_rect();
    Vec2::new(client_x - s.left() as f32, client_y - s.top() as f32)
}

#[inline]
pub fn surface_extent(surface_el: &web::Element) -> Vec2 {
    let s = surface_el.get_bounding_client_rect();
    Vec2::new(s.width() as f32, s.height() as f32)
}

pub fn set_position_px(el: &web::HtmlElement, pos: Vec2) {
    let style = el.style();
    _ = style.set_property("left", &format!("{:.1}px", pos.x));
    _ = style.set_property("top", &format!("{:.1}px", pos.y));
}

pub fn set_z_index(el: &web::HtmlElement, z: u32) {
    _ = el.style().set_property("z-index", &z.to_string());
}

pub fn set_cursor(el: &web::HtmlElement, cursor: &str) {
    _ = el.style().set_property("cursor", cursor);
}

/// The gallery's `figure` children, in document order. The set is fixed at
/// startup; indices into this list are the figure identities everywhere.
pub fn figure_elements(gallery: &web::Element) -> Vec<web::HtmlElement> {
    let mut out = Vec::new();
    if let Ok(list) = gallery.query_selector_all(FIGURE_SELECTOR) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<web::HtmlElement>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

pub fn caption_text(figure_el: &web::Element) -> String {
    figure_el
        .query_selector(CAPTION_SELECTOR)
        .ok()
        .flatten()
        .and_then(|c| c.text_content())
        .map(|t| t.trim().to_owned())
        .unwrap_or_default()
}
