use crate::dom::WindowListener;
use crate::error::SetupError;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Device tilt (gamma = left/right, beta = front/back) steers the parallax target.
pub fn wire_deviceorientation(
    window: &web::Window,
    ctx: Rc<RefCell<FrameContext>>,
) -> Result<WindowListener, SetupError> {
    WindowListener::new(window, "deviceorientation", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::DeviceOrientationEvent>() else {
            return;
        };
        ctx.borrow_mut().starfield.aim_at_tilt(ev.gamma(), ev.beta());
    })
}
