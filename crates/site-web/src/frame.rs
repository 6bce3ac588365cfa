//! Per-frame update and the requestAnimationFrame loop for one hero session.
//!
//! The loop holds a cancel token instead of running forever: unmounting
//! clears the alive flag, cancels the pending frame and drops the tick
//! closure, so no callback can observe released resources.

use crate::dom;
use crate::render::GpuState;
use instant::Instant;
use site_core::{Camera, PointField, PointerSample, RotationSmoother};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub gpu: GpuState,
    pub field: PointField,
    pub camera: Camera,
    pub rotation: RotationSmoother,
    pub pointer: Rc<RefCell<PointerSample>>,
    pub canvas: web::HtmlCanvasElement,
    pub started: Instant,
    pub point_color: [f32; 3],
}

impl FrameContext {
    /// One animation frame: advance time, recompute heights in place, chase
    /// the pointer-derived rotation target, sync the surface, draw once.
    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f32();
        self.field.update_heights(elapsed);

        if let Some(window) = web::window() {
            let (vw, vh) = dom::viewport_size(&window);
            // Only the latest sample matters; intermediate moves were dropped.
            let sample = *self.pointer.borrow();
            self.rotation
                .set_target_from_pointer(sample, vw as f32, vh as f32);
        }
        self.rotation.step();

        let width = self.canvas.width();
        let height = self.canvas.height();
        self.gpu.resize_if_needed(width, height);
        self.camera.set_aspect(width as f32, height as f32);

        if let Err(e) = self
            .gpu
            .render(&self.field, &self.camera, &self.rotation, self.point_color)
        {
            log::error!("render error: {:?}", e);
        }
    }
}

pub struct FrameLoop {
    alive: Rc<Cell<bool>>,
    raf_id: Rc<Cell<i32>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    /// Stop the loop: no tick runs after this returns. Safe to call twice.
    pub fn cancel(&self, window: &web::Window) {
        self.alive.set(false);
        let _ = window.cancel_animation_frame(self.raf_id.get());
        // Breaks the tick -> tick Rc cycle.
        self.tick.borrow_mut().take();
    }
}

pub fn start_loop(ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let alive = Rc::new(Cell::new(true));
    let raf_id = Rc::new(Cell::new(0));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let alive_tick = alive.clone();
    let raf_tick = raf_id.clone();
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !alive_tick.get() {
            return;
        }
        ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                raf_tick.set(id);
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            raf_id.set(id);
        }
    }

    FrameLoop {
        alive,
        raf_id,
        tick,
    }
}
