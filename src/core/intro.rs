// Map intro choreography.
//
// The map library is reached through [`MapSurface`] so the load-time
// sequence can run against a recording fake in host tests.

use serde::Serialize;

pub const SOFIA: LngLat = LngLat(23.3219, 42.6977);
pub const DARK_STYLE_URL: &str =
    "https://basemaps.cartocdn.com/gl/dark-matter-gl-style/style.json";
pub const INITIAL_ZOOM: f64 = 0.5;
pub const TARGET_ZOOM: f64 = 11.0;
pub const INTRO_DURATION_MS: f64 = 9000.0;
pub const MARKER_COLOR: &str = "#38bdf8";

pub const MAP_CONTAINER_ID: &str = "map";
pub const TIME_BADGE_SELECTOR: &str = ".time-badge";
pub const TIME_ZONE: &str = "Europe/Sofia";
pub const TIME_LOCALE: &str = "en-GB";
pub const ZONE_LABEL: &str = "EET";

/// `[lng, lat]`, serialized as a two-element array.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LngLat(pub f64, pub f64);

/// Instant camera placement (`jumpTo`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CameraView {
    pub center: LngLat,
    pub zoom: f64,
}

/// Animated camera move (`easeTo`). The easing curve is always
/// [`ease_out_cubic`]; the surface is responsible for passing it along.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EaseTo {
    pub center: LngLat,
    pub zoom: f64,
    pub duration: f64,
    pub essential: bool,
}

/// Commands the intro issues against a map widget.
pub trait MapSurface {
    fn jump_to(&mut self, view: CameraView);
    fn ease_to(&mut self, ease: EaseTo);
    fn add_marker(&mut self, at: LngLat, color: &str);
}

#[derive(Clone, Debug, PartialEq)]
pub struct IntroSettings {
    pub center: LngLat,
    pub style_url: &'static str,
    pub initial_zoom: f64,
    pub target_zoom: f64,
    pub duration_ms: f64,
    pub marker_color: &'static str,
}

impl Default for IntroSettings {
    fn default() -> Self {
        Self {
            center: SOFIA,
            style_url: DARK_STYLE_URL,
            initial_zoom: INITIAL_ZOOM,
            target_zoom: TARGET_ZOOM,
            duration_ms: INTRO_DURATION_MS,
            marker_color: MARKER_COLOR,
        }
    }
}

impl IntroSettings {
    /// Zoom level `elapsed_ms` into the intro.
    pub fn zoom_at(&self, elapsed_ms: f64) -> f64 {
        let t = if self.duration_ms > 0.0 {
            elapsed_ms / self.duration_ms
        } else {
            1.0
        };
        self.initial_zoom + (self.target_zoom - self.initial_zoom) * ease_out_cubic(t)
    }

    /// Run once when the widget reports `load`.
    pub fn play<S: MapSurface + ?Sized>(&self, surface: &mut S) {
        surface.jump_to(CameraView {
            center: self.center,
            zoom: self.initial_zoom,
        });
        surface.ease_to(EaseTo {
            center: self.center,
            zoom: self.target_zoom,
            duration: self.duration_ms,
            essential: true,
        });
        surface.add_marker(self.center, self.marker_color);
    }
}

/// `1 - (1 - t)^3`, with `t` clamped to `[0, 1]`.
#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    1.0 - (1.0 - t).powi(3)
}

/// Text written into the time badge, e.g. `"14:05 EET"`.
pub fn badge_text(hh_mm: &str, zone_label: &str) -> String {
    format!("{} {}", hh_mm.trim(), zone_label)
}
