use crate::constants::{PARALLAX_FOLLOW, PARALLAX_LIMIT, PARALLAX_POINTER_RANGE};
use crate::core::config::{MotionPreference, Viewport};
use glam::DVec2;

/// Eased pointer/tilt offset applied to stars in proportion to closeness.
///
/// Input handlers only write `target`; `ease` runs once per frame and is the
/// only place `current` moves.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Parallax {
    pub current: DVec2,
    pub target: DVec2,
}

impl Parallax {
    /// Single-pole follow: close a fixed fraction of the remaining distance.
    pub fn ease(&mut self) {
        self.current += (self.target - self.current) * PARALLAX_FOLLOW;
    }

    /// Map a pointer position in CSS px to a target. Ignored under reduced motion.
    pub fn aim_at_pointer(
        &mut self,
        client_x: f64,
        client_y: f64,
        viewport: &Viewport,
        motion: MotionPreference,
    ) {
        if motion.is_reduced() || viewport.width <= 0.0 || viewport.height <= 0.0 {
            return;
        }
        let tx = (client_x / viewport.width - 0.5) * PARALLAX_POINTER_RANGE;
        let ty = (client_y / viewport.height - 0.5) * PARALLAX_POINTER_RANGE;
        self.set_target(tx, ty);
    }

    /// Map device tilt (degrees) to a target. Missing angles read as level.
    pub fn aim_at_tilt(&mut self, gamma: Option<f64>, beta: Option<f64>, motion: MotionPreference) {
        if motion.is_reduced() {
            return;
        }
        self.set_target(gamma.unwrap_or(0.0), beta.unwrap_or(0.0));
    }

    fn set_target(&mut self, x: f64, y: f64) {
        let clamp = |v: f64| {
            if v.is_finite() {
                v.clamp(-PARALLAX_LIMIT, PARALLAX_LIMIT)
            } else {
                0.0
            }
        };
        self.target = DVec2::new(clamp(x), clamp(y));
    }

    /// Offset for a star with the given closeness (`1 - z`).
    #[inline]
    pub fn offset_for(&self, nearness: f64) -> DVec2 {
        self.current * nearness
    }
}
