// Starfield simulation state.
//
// `Starfield` is the animator context: it owns the particles, the parallax
// offset and the previous frame timestamp. The browser frame loop calls
// [`Starfield::step`] and then paints whatever [`Starfield::glows`] yields.

use crate::constants::{GLOW_RADIUS_MULTIPLIER, MAX_FRAME_DT_SEC, WRAP_MARGIN_PX};
use crate::core::config::{MotionPreference, StarfieldConfig, Viewport};
use crate::core::parallax::Parallax;
use crate::core::particle::{Particle, StarColor};
use glam::DVec2;
use rand::Rng;

/// A single radial glow ready to paint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub center: DVec2,
    pub radius: f64,
    pub alpha: f64,
    pub color: StarColor,
}

pub struct Starfield {
    pub cfg: StarfieldConfig,
    pub viewport: Viewport,
    pub parallax: Parallax,
    particles: Vec<Particle>,
    last_ms: f64,
    now_ms: f64,
}

impl Starfield {
    /// Empty field; call [`Starfield::resize`] before the first step.
    pub fn new(motion: MotionPreference, now_ms: f64) -> Self {
        Self {
            cfg: StarfieldConfig::for_motion(motion),
            viewport: Viewport::default(),
            parallax: Parallax::default(),
            particles: Vec::new(),
            last_ms: now_ms,
            now_ms,
        }
    }

    #[inline]
    pub fn motion(&self) -> MotionPreference {
        self.cfg.motion
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Adopt a new viewport and replace every particle.
    pub fn resize<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        self.viewport = viewport;
        let count = self.cfg.particle_count(&viewport);
        self.particles = (0..count)
            .map(|_| Particle::spawn(rng, &self.viewport, &self.cfg))
            .collect();
    }

    /// Advance the simulation to `now_ms` and return the integrated step in
    /// seconds, clamped to `[0, MAX_FRAME_DT_SEC]`.
    pub fn step(&mut self, now_ms: f64) -> f64 {
        let dt = frame_dt(self.last_ms, now_ms);
        self.last_ms = now_ms;
        self.now_ms = now_ms;
        self.parallax.ease();
        for p in &mut self.particles {
            p.advance(dt);
            p.wrap(&self.viewport, WRAP_MARGIN_PX);
        }
        dt
    }

    /// Paint commands for the current frame, parallax applied.
    pub fn glows(&self) -> impl Iterator<Item = Glow> + '_ {
        let now_ms = self.now_ms;
        let parallax = self.parallax;
        self.particles.iter().map(move |p| Glow {
            center: p.pos + parallax.offset_for(p.nearness()),
            radius: p.radius * GLOW_RADIUS_MULTIPLIER,
            alpha: p.alpha_at(now_ms),
            color: p.color,
        })
    }

    pub fn aim_at_pointer(&mut self, client_x: f64, client_y: f64) {
        let motion = self.motion();
        self.parallax
            .aim_at_pointer(client_x, client_y, &self.viewport, motion);
    }

    pub fn aim_at_tilt(&mut self, gamma: Option<f64>, beta: Option<f64>) {
        let motion = self.motion();
        self.parallax.aim_at_tilt(gamma, beta, motion);
    }
}

/// Seconds between two frame timestamps, never negative and never more
/// than one stalled-frame budget.
#[inline]
pub fn frame_dt(last_ms: f64, now_ms: f64) -> f64 {
    let dt = (now_ms - last_ms) / 1000.0;
    if dt.is_finite() {
        dt.clamp(0.0, MAX_FRAME_DT_SEC)
    } else {
        0.0
    }
}
