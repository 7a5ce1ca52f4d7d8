use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// ABYSS countdown, wall clock in the chapter's time zone
pub const ABYSS_STARTS_AT: &str = "2026-02-06T00:00:00";
pub const CHAPTER_TIME_ZONE: chrono_tz::Tz = chrono_tz::Asia::Kolkata;
pub const COUNTDOWN_TICK_MS: u32 = 1000;

// About section curve
pub const SCRUB_LAG_SECS: f64 = 1.5;

// Card entrance
pub const ENTRANCE_ROOT_MARGIN: &str = "-100px";
pub const ENTRANCE_STAGGER_MS: u32 = 100;
pub const ENTRANCE_DURATION_MS: u32 = 600;

// Tilted game cards
pub const TILT_AMPLITUDE_DEG: f64 = 12.0;
pub const TILT_SCALE_ON_HOVER: f64 = 1.05;

// Sticky countdown bar on the ABYSS page
pub const STICKY_BAR_SCROLL_THRESHOLD: f64 = 100.0;
