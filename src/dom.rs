use crate::constants::REDUCED_MOTION_QUERY;
use crate::core::{MotionPreference, Viewport};
use crate::error::SetupError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window() -> Result<web::Window, SetupError> {
    web::window().ok_or(SetupError::NoWindow)
}

#[inline]
pub fn window_document() -> Result<web::Document, SetupError> {
    window()?.document().ok_or(SetupError::NoDocument)
}

/// Current inner size of the window and its device pixel ratio.
pub fn viewport(window: &web::Window) -> Viewport {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport::new(
        read(window.inner_width()),
        read(window.inner_height()),
        window.device_pixel_ratio(),
    )
}

pub fn motion_preference(window: &web::Window) -> MotionPreference {
    let reduced = window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false);
    MotionPreference::from_reduced_flag(reduced)
}

/// Size the canvas backing store in device pixels and its CSS box in px.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let (w_px, h_px) = viewport.backing_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.width));
    _ = style.set_property("height", &format!("{}px", viewport.height));
}

/// A passive window event listener that is removed when dropped.
pub struct WindowListener {
    window: web::Window,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl WindowListener {
    pub fn new(
        window: &web::Window,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Result<Self, SetupError> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &opts,
        )?;
        Ok(Self {
            window: window.clone(),
            event,
            closure,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
