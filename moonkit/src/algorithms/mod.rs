//! Closed-form lunar approximation formulas.
//!
//! All functions here are pure `f64` arithmetic on a Julian Day Number:
//!
//! - [`phase`]: synodic phase fraction, age in days and phase classification
//! - [`orbit`]: distance, ecliptic latitude and ecliptic longitude
//!
//! Wrapping into typed quantities and rounding for presentation is done by
//! [`crate::services::snapshot`].

pub mod orbit;
pub mod phase;

pub use orbit::{orbital_geometry, OrbitalGeometry};
pub use phase::{age_in_days, classify_phase, phase_fraction};

/// Fractional part of `value`, always in `[0, 1)`, including for negative input.
pub fn normalize(value: f64) -> f64 {
    let mut fraction = value - value.floor();
    if fraction < 0.0 {
        fraction += 1.0;
    }
    // -1e-20 - (-1.0) rounds up to exactly 1.0
    if fraction >= 1.0 {
        fraction = 0.0;
    }
    fraction
}

/// Round to two decimal places, halves away from zero.
pub fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
