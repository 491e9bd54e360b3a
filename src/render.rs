use crate::constants::{GLOW_MID_ALPHA, GLOW_MID_STOP};
use crate::core::{Glow, Viewport};
use crate::error::SetupError;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(serde::Serialize)]
struct ContextOptions {
    alpha: bool,
}

/// Canvas 2D painter for starfield glows.
pub struct GlowPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl GlowPainter {
    pub fn new(canvas: &web::HtmlCanvasElement) -> Result<Self, SetupError> {
        let opts = serde_wasm_bindgen::to_value(&ContextOptions { alpha: true })?;
        let ctx = canvas
            .get_context_with_context_options("2d", &opts)?
            .ok_or(SetupError::NoContext)?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| SetupError::NoContext)?;
        Ok(Self { ctx })
    }

    /// Reset to identity then scale so drawing happens in CSS px.
    pub fn set_pixel_ratio(&self, dpr: f64) {
        _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        _ = self.ctx.scale(dpr, dpr);
    }

    pub fn clear(&self, viewport: &Viewport) {
        self.ctx
            .clear_rect(0.0, 0.0, viewport.width, viewport.height);
    }

    /// Three-stop radial falloff: full color, 60% alpha at mid radius,
    /// transparent at the rim.
    pub fn draw_glow(&self, glow: &Glow) {
        let Glow {
            center,
            radius,
            alpha,
            color,
        } = *glow;
        if radius <= 0.0 || alpha <= 0.0 {
            return;
        }
        let gradient = match self
            .ctx
            .create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius)
        {
            Ok(g) => g,
            Err(_) => return,
        };
        _ = gradient.add_color_stop(0.0, &color.rgba(alpha));
        _ = gradient.add_color_stop(GLOW_MID_STOP, &color.rgba(alpha * GLOW_MID_ALPHA));
        _ = gradient.add_color_stop(1.0, &color.rgba(0.0));
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.fill();
    }
}
