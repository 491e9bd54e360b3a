use crate::dom::{self, WindowListener};
use crate::error::SetupError;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub mod pointer;
pub mod tilt;

pub fn wire_resize(
    window: &web::Window,
    ctx: Rc<RefCell<FrameContext>>,
) -> Result<WindowListener, SetupError> {
    let window_for_size = window.clone();
    WindowListener::new(window, "resize", move |_ev: web::Event| {
        let viewport = dom::viewport(&window_for_size);
        ctx.borrow_mut().resize(viewport);
    })
}

/// Resize, pointer and tilt listeners for the starfield. Dropping the
/// returned listeners unhooks them.
pub fn wire_starfield_listeners(
    window: &web::Window,
    ctx: &Rc<RefCell<FrameContext>>,
) -> Result<Vec<WindowListener>, SetupError> {
    Ok(vec![
        wire_resize(window, ctx.clone())?,
        pointer::wire_mousemove(window, ctx.clone())?,
        tilt::wire_deviceorientation(window, ctx.clone())?,
    ])
}
