// Viewport description and per-motion-preference tuning.
//
// Everything in here is platform-free so the starfield can be driven and
// tested without a browser.

use crate::constants::*;

/// Whether the user asked the platform for reduced motion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn from_reduced_flag(reduced: bool) -> Self {
        if reduced {
            MotionPreference::Reduced
        } else {
            MotionPreference::Full
        }
    }

    #[inline]
    pub fn is_reduced(self) -> bool {
        self == MotionPreference::Reduced
    }
}

/// Visible area in CSS pixels plus the device pixel ratio used for the
/// canvas backing store.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Viewport {
    /// Non-finite or negative sizes collapse to zero; `dpr` never drops below 1.
    pub fn new(width: f64, height: f64, dpr: f64) -> Self {
        let sane = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
        let dpr = if dpr.is_finite() { dpr.max(1.0) } else { 1.0 };
        Self {
            width: sane(width),
            height: sane(height),
            dpr,
        }
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Canvas backing size in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.dpr).floor() as u32,
            (self.height * self.dpr).floor() as u32,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

/// Tuning values that differ between full and reduced motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarfieldConfig {
    pub motion: MotionPreference,
    pub density_per_kpx: f64,
    pub base_speed: f64,
    pub twinkle_depth_gain: f64,
}

impl StarfieldConfig {
    pub fn for_motion(motion: MotionPreference) -> Self {
        match motion {
            MotionPreference::Full => Self {
                motion,
                density_per_kpx: DENSITY_PER_KPX,
                base_speed: BASE_SPEED,
                twinkle_depth_gain: TWINKLE_AMP_DEPTH_GAIN,
            },
            MotionPreference::Reduced => Self {
                motion,
                density_per_kpx: DENSITY_PER_KPX_REDUCED,
                base_speed: BASE_SPEED_REDUCED,
                twinkle_depth_gain: 0.0,
            },
        }
    }

    /// `min(MAX_PARTICLES, floor(area / 1000 * density))`.
    pub fn particle_count(&self, viewport: &Viewport) -> usize {
        let n = (viewport.area() / 1000.0 * self.density_per_kpx).floor();
        if n.is_finite() && n > 0.0 {
            (n as usize).min(MAX_PARTICLES)
        } else {
            0
        }
    }
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self::for_motion(MotionPreference::Full)
    }
}
