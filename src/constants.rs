/// Starfield tuning constants.
///
/// Time values are in seconds unless the name says otherwise; distances are
/// CSS pixels. Reduced-motion variants apply when the page reports
/// `prefers-reduced-motion: reduce`.
// Population
pub const MAX_PARTICLES: usize = 1000;
pub const DENSITY_PER_KPX: f64 = 0.12; // particles per 1000 px² of viewport
pub const DENSITY_PER_KPX_REDUCED: f64 = 0.05;

// Depth range (smaller = closer)
pub const DEPTH_MIN: f64 = 0.2;
pub const DEPTH_SPAN: f64 = 0.8;

// Drift speed as a fraction of viewport size per second, before depth scaling
pub const BASE_SPEED: f64 = 0.024;
pub const BASE_SPEED_REDUCED: f64 = 0.01;
pub const DRIFT_DEPTH_GAIN: f64 = 1.2;

// Size and brightness
pub const RADIUS_MIN: f64 = 0.6;
pub const RADIUS_DEPTH_SPAN: f64 = 1.8;
pub const RADIUS_JITTER: f64 = 0.6;
pub const ALPHA_BASE: f64 = 0.4;
pub const ALPHA_SPAN: f64 = 0.6;
pub const GLOW_RADIUS_MULTIPLIER: f64 = 3.0;
pub const GLOW_MID_STOP: f32 = 0.5;
pub const GLOW_MID_ALPHA: f64 = 0.6;

// Twinkle oscillator
pub const TWINKLE_AMP_DEPTH_GAIN: f64 = 0.4;
pub const TWINKLE_FREQ_MIN: f64 = 0.5;
pub const TWINKLE_FREQ_SPAN: f64 = 1.5;
pub const TWINKLE_FREQ_SCALE: f64 = 0.6;

// Palette thresholds on a uniform roll in [0, 1)
pub const ACCENT_THRESHOLD: f64 = 0.06;
pub const BRIGHT_THRESHOLD: f64 = 0.12;
pub const ACCENT_RGB: &str = "125, 211, 252"; // sky blue
pub const BRIGHT_RGB: &str = "248, 250, 252"; // near white
pub const NEUTRAL_RGB: &str = "148, 163, 184"; // slate

// Frame integration
pub const MAX_FRAME_DT_SEC: f64 = 0.033;
pub const WRAP_MARGIN_PX: f64 = 12.0;

// Parallax
pub const PARALLAX_FOLLOW: f64 = 0.06; // fraction of remaining distance per frame
pub const PARALLAX_POINTER_RANGE: f64 = 40.0;
pub const PARALLAX_LIMIT: f64 = 40.0;

// DOM hooks
pub const SKY_CANVAS_ID: &str = "sky";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
