//! # Shared Utility Functions
//!
//! Display formatting helpers used by the tracking and pharmacy screens.
//!
//! ## Reading Formatting
//!
//! - [`format_glucose`] - Format a glucose value with its unit
//! - [`format_pressure`] - Format a blood-pressure pair with its unit
//!
//! ## Distance Formatting
//!
//! - [`format_distance`] - Format a pharmacy distance in m or km
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_glucose, format_pressure};
//!
//! assert_eq!(format_glucose(110), "110 mg/dL");
//! assert_eq!(format_pressure(120, 80), "120/80 mmHg");
//! ```

/// Format a capillary glucose value for display.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_glucose;
///
/// assert_eq!(format_glucose(95), "95 mg/dL");
/// ```
pub fn format_glucose(value: u32) -> String {
    format!("{} mg/dL", value)
}

/// Format a blood-pressure reading for display.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_pressure;
///
/// assert_eq!(format_pressure(130, 85), "130/85 mmHg");
/// ```
pub fn format_pressure(systolic: u32, diastolic: u32) -> String {
    format!("{}/{} mmHg", systolic, diastolic)
}

/// Format a distance in kilometers for display.
///
/// Distances under one kilometer are shown in meters; longer distances are
/// shown in kilometers with one decimal.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_distance;
///
/// assert_eq!(format_distance(0.85), "850 m");
/// assert_eq!(format_distance(1.42), "1.4 km");
/// ```
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{} m", (km * 1000.0).round() as i64)
    } else {
        format!("{:.1} km", km)
    }
}
