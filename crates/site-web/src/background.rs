//! The animated hero background: one lifetime-bounded view session per
//! mount, from Initializing through Running to Tearing down.
//!
//! Every resource the session allocates (canvas, GPU state, window listeners,
//! the pending animation frame) is owned by this struct and released in
//! `unmount`. Teardown is idempotent and tolerates a container that has
//! already left the document.

use crate::render::GpuState;
use crate::{dom, events, frame};
use instant::Instant;
use site_core::{
    Camera, PointField, PointerSample, RotationSmoother, Theme, GRID_DEPTH, GRID_SEPARATION,
    GRID_WIDTH,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct BackgroundView {
    window: web::Window,
    canvas: web::HtmlCanvasElement,
    frame_loop: frame::FrameLoop,
    on_pointer: Option<wasm_bindgen::closure::Closure<dyn FnMut(web::PointerEvent)>>,
    on_resize: Option<wasm_bindgen::closure::Closure<dyn FnMut()>>,
    mounted: bool,
}

impl BackgroundView {
    /// Initialize a session inside the container with the given element id.
    /// Returns `None` (after cleaning up anything partially built) when the
    /// container is missing or the GPU cannot be acquired; the hero then
    /// simply renders without a background.
    pub async fn mount(
        document: &web::Document,
        container_id: &str,
        theme: Theme,
    ) -> Option<BackgroundView> {
        let window = web::window()?;
        let container = match document.get_element_by_id(container_id) {
            Some(c) => c,
            None => {
                log::info!("no #{container_id} mount target; skipping hero background");
                return None;
            }
        };
        // A re-mount must never stack a second surface on top of an old one.
        dom::clear_children(&container);

        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .ok()?
            .dyn_into::<web::HtmlCanvasElement>()
            .ok()?;
        let _ = canvas.set_attribute("class", "hero-canvas");
        dom::sync_canvas_backing_size(&canvas);
        container.append_child(&canvas).ok()?;

        let field = PointField::new(GRID_WIDTH, GRID_DEPTH, GRID_SEPARATION);
        let gpu = match GpuState::new(&canvas, field.point_count()).await {
            Ok(g) => g,
            Err(e) => {
                log::error!("WebGPU init error: {:?}", e);
                if let Some(parent) = canvas.parent_element() {
                    let _ = parent.remove_child(&canvas);
                }
                return None;
            }
        };

        let width = canvas.width().max(1) as f32;
        let height = canvas.height().max(1) as f32;
        let pointer = Rc::new(RefCell::new(PointerSample::default()));
        let ctx = Rc::new(RefCell::new(frame::FrameContext {
            gpu,
            field,
            camera: Camera::hero(width / height),
            rotation: RotationSmoother::default(),
            pointer: pointer.clone(),
            canvas: canvas.clone(),
            started: Instant::now(),
            point_color: theme.primary,
        }));

        let on_pointer = events::pointer_closure(pointer);
        let _ = window.add_event_listener_with_callback(
            "pointermove",
            on_pointer.as_ref().unchecked_ref(),
        );
        let on_resize = events::resize_closure(canvas.clone(), ctx.clone());
        let _ =
            window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());

        let frame_loop = frame::start_loop(ctx);
        log::info!("hero background mounted ({GRID_WIDTH}x{GRID_DEPTH} points)");

        Some(BackgroundView {
            window,
            canvas,
            frame_loop,
            on_pointer: Some(on_pointer),
            on_resize: Some(on_resize),
            mounted: true,
        })
    }

    /// Tear the session down: cancel the frame loop, remove both window
    /// listeners, detach the canvas. Listener removal happens before the GPU
    /// state drops so no callback can observe a released surface.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.frame_loop.cancel(&self.window);
        if let Some(closure) = self.on_pointer.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        if let Some(closure) = self.on_resize.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
        // The container may already be detached; removal failure is fine.
        if let Some(parent) = self.canvas.parent_element() {
            let _ = parent.remove_child(&self.canvas);
        }
        log::info!("hero background unmounted");
    }
}

impl Drop for BackgroundView {
    fn drop(&mut self) {
        self.unmount();
    }
}
