use log::Level;

use crate::motion::spring::SpringConfig;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose widget tracing when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const SALON_NAME: &str = "Lashi By Hasi";
pub const SALON_PHONE: &str = "+32 445 45 45 45";
pub const SALON_CITY: &str = "8600 Diksmuide";
pub const SALON_INSTAGRAM: &str = "https://www.instagram.com/lashi_byhasi/";

/// Spring used by every magnetic button unless a prop overrides it.
pub const MAGNETIC_SPRING: SpringConfig = SpringConfig::POINTER_FOLLOW;
/// Fraction of the pointer's distance from the button center that the button follows.
pub const MAGNETIC_SENSITIVITY: f64 = 0.25;

pub const SLIDER_SPRING: SpringConfig = SpringConfig::SLIDER;
pub const SLIDER_START_PERCENTAGE: f64 = 50.0;

pub const SHAPE_INTERVAL_MS: u32 = 4000;
pub const FLOATING_LIGHT_COUNT: usize = 6;

pub const BOOKING_NOTICE_MS: u32 = 5000;
