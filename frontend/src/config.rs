use log::Level;

pub const BRAND_NAME: &str = "SmartClinic";
pub const BRAND_ACCENT: &str = "AI";

/// Vertical offset, in CSS pixels, past which the sticky call-to-action slides in.
pub const STICKY_CTA_THRESHOLD: f64 = 800.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
