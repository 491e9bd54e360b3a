use crate::core::{Starfield, Viewport};
use crate::dom;
use crate::render::GlowPainter;
use rand::rngs::StdRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub starfield: Starfield,
    pub painter: GlowPainter,
    pub canvas: web::HtmlCanvasElement,
    pub rng: StdRng,
}

impl FrameContext {
    /// Resize the backing store, rescale drawing, and regenerate stars.
    pub fn resize(&mut self, viewport: Viewport) {
        dom::sync_canvas_backing_size(&self.canvas, &viewport);
        self.painter.set_pixel_ratio(viewport.dpr);
        self.starfield.resize(viewport, &mut self.rng);
        log::debug!(
            "[sky] resized to {}x{} @{} -> {} stars",
            viewport.width,
            viewport.height,
            viewport.dpr,
            self.starfield.particles().len()
        );
    }

    pub fn frame(&mut self, now_ms: f64) {
        self.starfield.step(now_ms);
        self.painter.clear(&self.starfield.viewport);
        for glow in self.starfield.glows() {
            self.painter.draw_glow(&glow);
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Owner of a running `requestAnimationFrame` loop.
pub struct AnimationHandle {
    running: Rc<Cell<bool>>,
    frame_id: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

impl AnimationHandle {
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Cancel the pending frame and release the loop closure.
    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.frame_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &TickSlot, frame_id: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    let slot = tick.borrow();
    if let Some(cb) = slot.as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => frame_id.set(Some(id)),
            Err(e) => log::warn!("[sky] requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> AnimationHandle {
    let running = Rc::new(Cell::new(true));
    let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: TickSlot = Rc::new(RefCell::new(None));

    // The closure holds a weak link to its own slot so `stop` can drop it.
    let tick_weak = Rc::downgrade(&tick);
    let running_tick = running.clone();
    let frame_id_tick = frame_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        frame_id_tick.set(None);
        if !running_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame(now_ms);
        if let Some(tick) = tick_weak.upgrade() {
            request_frame(&tick, &frame_id_tick);
        }
    }) as Box<dyn FnMut(f64)>));

    request_frame(&tick, &frame_id);
    AnimationHandle {
        running,
        frame_id,
        tick,
    }
}
