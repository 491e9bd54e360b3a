use crate::constants::SKY_CANVAS_ID;
use crate::core::Starfield;
use crate::dom::{self, WindowListener};
use crate::error::SetupError;
use crate::events;
use crate::frame::{self, AnimationHandle, FrameContext};
use crate::render::GlowPainter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Running starfield: the frame loop plus its window listeners.
#[wasm_bindgen]
pub struct StarfieldHandle {
    animation: AnimationHandle,
    listeners: Vec<WindowListener>,
}

#[wasm_bindgen]
impl StarfieldHandle {
    /// Stop scheduling frames and unhook resize/pointer/tilt listeners.
    pub fn stop(&mut self) {
        self.animation.stop();
        self.listeners.clear();
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.animation.is_running()
    }
}

fn sky_canvas(document: &web::Document) -> Result<web::HtmlCanvasElement, SetupError> {
    document
        .get_element_by_id(SKY_CANVAS_ID)
        .ok_or(SetupError::MissingElement(SKY_CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| SetupError::NotACanvas(SKY_CANVAS_ID))
}

/// Find `#sky`, size it, seed stars and start the frame loop.
pub fn start() -> Result<StarfieldHandle, SetupError> {
    let window = dom::window()?;
    let document = dom::window_document()?;
    let canvas = sky_canvas(&document)?;
    let painter = GlowPainter::new(&canvas)?;

    let motion = dom::motion_preference(&window);
    let now_ms = window.performance().map(|p| p.now()).unwrap_or(0.0);
    let ctx = Rc::new(RefCell::new(FrameContext {
        starfield: Starfield::new(motion, now_ms),
        painter,
        canvas,
        rng: StdRng::from_entropy(),
    }));

    let listeners = events::wire_starfield_listeners(&window, &ctx)?;
    ctx.borrow_mut().resize(dom::viewport(&window));
    log::info!(
        "[sky] starting with {} stars (motion: {:?})",
        ctx.borrow().starfield.particles().len(),
        motion
    );

    let animation = frame::start_loop(ctx);
    Ok(StarfieldHandle {
        animation,
        listeners,
    })
}
