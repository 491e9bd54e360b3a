use crate::dom::WindowListener;
use crate::error::SetupError;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position steers the parallax target.
pub fn wire_mousemove(
    window: &web::Window,
    ctx: Rc<RefCell<FrameContext>>,
) -> Result<WindowListener, SetupError> {
    WindowListener::new(window, "mousemove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        // Handlers only write the target; the next frame eases toward it.
        ctx.borrow_mut()
            .starfield
            .aim_at_pointer(ev.client_x() as f64, ev.client_y() as f64);
    })
}
