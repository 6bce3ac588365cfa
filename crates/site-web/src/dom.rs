use site_core::capped_pixel_ratio;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Create an element with a class attribute; builder for the view modules.
pub fn el(document: &web::Document, tag: &str, class: &str) -> Option<web::Element> {
    let element = document.create_element(tag).ok()?;
    if !class.is_empty() {
        let _ = element.set_attribute("class", class);
    }
    Some(element)
}

/// Create an element with a class and text content.
pub fn el_text(
    document: &web::Document,
    tag: &str,
    class: &str,
    text: &str,
) -> Option<web::Element> {
    let element = el(document, tag, class)?;
    element.set_text_content(Some(text));
    Some(element)
}

/// Remove every child, oldest first. Used both on the app root between
/// renders and on the hero container before a new session attaches, so a
/// re-mount never appends a duplicate surface.
pub fn clear_children(element: &web::Element) {
    while let Some(child) = element.first_child() {
        let _ = element.remove_child(&child);
    }
}

#[inline]
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    (w.max(1.0), h.max(1.0))
}

/// Size the canvas backing store to the viewport times the capped device
/// pixel ratio. CSS size is left to the stylesheet; this only touches pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = capped_pixel_ratio(w.device_pixel_ratio());
        let (vw, vh) = viewport_size(&w);
        canvas.set_width((vw * dpr) as u32);
        canvas.set_height((vh * dpr) as u32);
    }
}

/// Walk up from an event target looking for the named attribute. Used for
/// delegated click handling on the portfolio grid, filter chips and tab strip.
pub fn closest_with_attribute(
    target: Option<web::EventTarget>,
    attribute: &str,
) -> Option<(web::Element, String)> {
    use wasm_bindgen::JsCast;
    let mut current: Option<web::Element> = target.and_then(|t| t.dyn_into::<web::Element>().ok());
    while let Some(element) = current {
        if let Some(value) = element.get_attribute(attribute) {
            return Some((element, value));
        }
        current = element.parent_element();
    }
    None
}
