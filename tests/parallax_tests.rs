// Host-side tests for pointer/tilt parallax.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod parallax {
        include!("../src/core/parallax.rs");
    }
}

use crate::constants::PARALLAX_LIMIT;
use crate::core::config::{MotionPreference, Viewport};
use crate::core::parallax::Parallax;
use glam::DVec2;

fn viewport() -> Viewport {
    Viewport::new(800.0, 600.0, 2.0)
}

#[test]
fn pointer_maps_viewport_to_plus_minus_twenty() {
    let mut p = Parallax::default();
    let vp = viewport();

    p.aim_at_pointer(400.0, 300.0, &vp, MotionPreference::Full);
    assert_eq!(p.target, DVec2::ZERO);

    p.aim_at_pointer(0.0, 0.0, &vp, MotionPreference::Full);
    assert_eq!(p.target, DVec2::new(-20.0, -20.0));

    p.aim_at_pointer(800.0, 600.0, &vp, MotionPreference::Full);
    assert_eq!(p.target, DVec2::new(20.0, 20.0));

    // handlers never move the eased offset directly
    assert_eq!(p.current, DVec2::ZERO);
}

#[test]
fn pointer_far_outside_the_window_is_clamped() {
    let mut p = Parallax::default();
    p.aim_at_pointer(4000.0, -3000.0, &viewport(), MotionPreference::Full);
    assert_eq!(p.target, DVec2::new(PARALLAX_LIMIT, -PARALLAX_LIMIT));
}

#[test]
fn tilt_is_clamped_and_missing_angles_read_level() {
    let mut p = Parallax::default();
    p.aim_at_tilt(Some(10.0), Some(70.0), MotionPreference::Full);
    assert_eq!(p.target, DVec2::new(10.0, 40.0));

    p.aim_at_tilt(Some(-90.0), None, MotionPreference::Full);
    assert_eq!(p.target, DVec2::new(-40.0, 0.0));

    p.aim_at_tilt(Some(f64::NAN), Some(5.0), MotionPreference::Full);
    assert_eq!(p.target, DVec2::new(0.0, 5.0));
}

#[test]
fn reduced_motion_ignores_pointer_and_tilt() {
    let mut p = Parallax::default();
    p.aim_at_pointer(0.0, 0.0, &viewport(), MotionPreference::Reduced);
    assert_eq!(p.target, DVec2::ZERO);
    p.aim_at_tilt(Some(30.0), Some(-30.0), MotionPreference::Reduced);
    assert_eq!(p.target, DVec2::ZERO);
}

#[test]
fn ease_closes_six_percent_of_the_gap() {
    let mut p = Parallax {
        current: DVec2::ZERO,
        target: DVec2::new(10.0, -50.0),
    };
    p.ease();
    assert!((p.current.x - 0.6).abs() < 1e-12);
    assert!((p.current.y + 3.0).abs() < 1e-12);
}

#[test]
fn ease_approaches_monotonically_without_overshoot() {
    let target = DVec2::new(33.0, -17.5);
    let mut p = Parallax {
        current: DVec2::new(-5.0, 12.0),
        target,
    };
    let mut gap = (target - p.current).length();
    for _ in 0..600 {
        p.ease();
        let next_gap = (target - p.current).length();
        assert!(next_gap <= gap, "gap grew from {gap} to {next_gap}");
        assert!(p.current.x <= target.x);
        assert!(p.current.y >= target.y);
        gap = next_gap;
    }
    assert!(gap < 1e-6);
}

#[test]
fn offset_scales_with_nearness() {
    let p = Parallax {
        current: DVec2::new(20.0, -10.0),
        target: DVec2::ZERO,
    };
    assert_eq!(p.offset_for(0.0), DVec2::ZERO);
    assert_eq!(p.offset_for(0.5), DVec2::new(10.0, -5.0));
}

#[test]
fn zero_sized_viewport_keeps_previous_target() {
    let mut p = Parallax::default();
    p.aim_at_tilt(Some(3.0), Some(4.0), MotionPreference::Full);
    p.aim_at_pointer(10.0, 10.0, &Viewport::new(0.0, 0.0, 1.0), MotionPreference::Full);
    assert_eq!(p.target, DVec2::new(3.0, 4.0));
}
