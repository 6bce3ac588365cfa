//! Event closures for one hero session. Unlike app-lifetime wiring, these are
//! returned to the caller and owned by the session so teardown can remove
//! them from the window again.

use crate::dom;
use crate::frame::FrameContext;
use site_core::PointerSample;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// Store the latest pointer position. Last write wins; the frame loop reads
/// whatever is current when it runs.
pub fn pointer_closure(sample: Rc<RefCell<PointerSample>>) -> Closure<dyn FnMut(web::PointerEvent)> {
    Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut s = sample.borrow_mut();
        s.client_x = ev.client_x() as f32;
        s.client_y = ev.client_y() as f32;
    }) as Box<dyn FnMut(_)>)
}

/// Resize the canvas backing store and surface to the new viewport. The point
/// field is never rebuilt here.
pub fn resize_closure(
    canvas: web::HtmlCanvasElement,
    ctx: Rc<RefCell<FrameContext>>,
) -> Closure<dyn FnMut()> {
    Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas);
        let mut ctx = ctx.borrow_mut();
        let width = canvas.width();
        let height = canvas.height();
        ctx.gpu.resize_if_needed(width, height);
        ctx.camera.set_aspect(width as f32, height as f32);
    }) as Box<dyn FnMut()>)
}
