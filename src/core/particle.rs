use crate::constants::*;
use crate::core::config::{StarfieldConfig, Viewport};
use glam::DVec2;
use rand::prelude::*;
use std::f64::consts::TAU;

/// Fixed three-way star palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarColor {
    Accent,
    Bright,
    Neutral,
}

impl StarColor {
    /// Map a uniform roll in `[0, 1)` onto the weighted palette
    /// (≈6% accent, ≈6% bright, rest neutral).
    pub fn from_roll(roll: f64) -> Self {
        if roll < ACCENT_THRESHOLD {
            StarColor::Accent
        } else if roll < BRIGHT_THRESHOLD {
            StarColor::Bright
        } else {
            StarColor::Neutral
        }
    }

    /// Comma separated `r, g, b` triple for CSS `rgba()`.
    pub fn rgb(self) -> &'static str {
        match self {
            StarColor::Accent => ACCENT_RGB,
            StarColor::Bright => BRIGHT_RGB,
            StarColor::Neutral => NEUTRAL_RGB,
        }
    }

    pub fn rgba(self, alpha: f64) -> String {
        format!("rgba({}, {})", self.rgb(), alpha)
    }
}

/// One star.
///
/// `z` is a synthetic depth in `[0.2, 1.0)`: smaller is closer, which means
/// faster drift, a larger radius and a stronger parallax response. It is
/// fixed for the particle's lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    z: f64,
    pub radius: f64,
    pub base_alpha: f64,
    pub twinkle_amp: f64,
    pub twinkle_freq: f64,
    pub phase: f64,
    pub color: StarColor,
}

impl Particle {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: &Viewport, cfg: &StarfieldConfig) -> Self {
        let z = DEPTH_MIN + rng.gen::<f64>() * DEPTH_SPAN;
        let color = StarColor::from_roll(rng.gen::<f64>());
        let direction = rng.gen::<f64>() * TAU;
        let speed = cfg.base_speed * (1.0 - z);
        let pos = DVec2::new(
            rng.gen::<f64>() * viewport.width,
            rng.gen::<f64>() * viewport.height,
        );
        let vel = DVec2::new(
            direction.cos() * speed * viewport.width,
            direction.sin() * speed * viewport.height,
        );
        let radius = ((1.0 - z) * RADIUS_DEPTH_SPAN + rng.gen::<f64>() * RADIUS_JITTER).max(RADIUS_MIN);
        let base_alpha = ALPHA_BASE + rng.gen::<f64>() * ALPHA_SPAN;
        let twinkle_freq =
            (TWINKLE_FREQ_MIN + rng.gen::<f64>() * TWINKLE_FREQ_SPAN) * TWINKLE_FREQ_SCALE;
        let phase = rng.gen::<f64>() * TAU;
        Self {
            pos,
            vel,
            z,
            radius,
            base_alpha,
            twinkle_amp: cfg.twinkle_depth_gain * (1.0 - z),
            twinkle_freq,
            phase,
            color,
        }
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Closeness factor `1 - z`, used for drift, parallax and size.
    #[inline]
    pub fn nearness(&self) -> f64 {
        1.0 - self.z
    }

    /// Integrate position over `dt_sec`, scaled by closeness.
    pub fn advance(&mut self, dt_sec: f64) {
        self.pos += self.vel * (dt_sec * self.nearness() * DRIFT_DEPTH_GAIN);
    }

    /// Move a particle that left the padded viewport to the opposite edge.
    pub fn wrap(&mut self, viewport: &Viewport, margin: f64) {
        let max_x = viewport.width + margin;
        let max_y = viewport.height + margin;
        if self.pos.x < -margin {
            self.pos.x = max_x;
        }
        if self.pos.x > max_x {
            self.pos.x = -margin;
        }
        if self.pos.y < -margin {
            self.pos.y = max_y;
        }
        if self.pos.y > max_y {
            self.pos.y = -margin;
        }
    }

    /// Twinkled alpha at page time `now_ms`, clamped to `[0, 1]`.
    pub fn alpha_at(&self, now_ms: f64) -> f64 {
        let twinkle = self.twinkle_amp * (now_ms * 0.001 * self.twinkle_freq + self.phase).sin();
        (self.base_alpha + twinkle).clamp(0.0, 1.0)
    }
}
