// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn depth_range_stays_inside_unit_interval() {
    assert!(DEPTH_MIN > 0.0);
    assert!(DEPTH_MIN + DEPTH_SPAN <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reduced_motion_is_calmer() {
    assert!(DENSITY_PER_KPX_REDUCED < DENSITY_PER_KPX);
    assert!(BASE_SPEED_REDUCED < BASE_SPEED);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn palette_thresholds_are_ordered() {
    assert!(ACCENT_THRESHOLD > 0.0);
    assert!(BRIGHT_THRESHOLD > ACCENT_THRESHOLD);
    assert!(BRIGHT_THRESHOLD < 1.0);
    for rgb in [ACCENT_RGB, BRIGHT_RGB, NEUTRAL_RGB] {
        let parts: Vec<u8> = rgb
            .split(',')
            .map(|c| c.trim().parse().expect("channel"))
            .collect();
        assert_eq!(parts.len(), 3, "{rgb}");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn alpha_and_glow_values_are_sane() {
    assert!(ALPHA_BASE + ALPHA_SPAN <= 1.0);
    assert!(GLOW_MID_ALPHA > 0.0 && GLOW_MID_ALPHA < 1.0);
    assert!(GLOW_MID_STOP > 0.0 && GLOW_MID_STOP < 1.0);
    assert!(GLOW_RADIUS_MULTIPLIER >= 1.0);
    assert!(RADIUS_MIN > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_and_parallax_limits() {
    // one stalled frame at 30 fps at most
    assert!(MAX_FRAME_DT_SEC > 0.0 && MAX_FRAME_DT_SEC < 0.05);
    assert!(PARALLAX_FOLLOW > 0.0 && PARALLAX_FOLLOW < 1.0);
    assert!(PARALLAX_POINTER_RANGE / 2.0 <= PARALLAX_LIMIT);
    assert!(WRAP_MARGIN_PX >= 0.0);
    assert!(MAX_PARTICLES > 0);
}
