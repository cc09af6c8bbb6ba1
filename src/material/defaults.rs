//! Form defaults offered by the calculator front end.
//!
//! The ratio engine never falls back to these; callers pass them explicitly.

use super::ReferenceShot;

/// Suggested target density in kg/m³.
pub const TARGET_DENSITY: f64 = 23.6;

/// Suggested polyol weight of the standard test, in grams.
pub const POLYOL_WEIGHT: f64 = 300.0;

/// Suggested c-pentane weight of the standard test, in grams.
pub const C_PENTANE_WEIGHT: f64 = 43.0;

/// Suggested MDI weight of the standard test, in grams.
pub const MDI_WEIGHT: f64 = 152.0;

/// Suggested polyol + pentane mix weight of the standard test, in grams.
pub const POLYOL_MIX_WEIGHT: f64 = 114.2;

/// Suggested cavity edge length in centimeters.
pub const EDGE_LENGTH_CM: f64 = 50.0;

/// The standard lab shot assembled from the suggested weights.
#[must_use]
pub fn standard_shot() -> ReferenceShot {
    ReferenceShot::new(POLYOL_WEIGHT, C_PENTANE_WEIGHT, MDI_WEIGHT, POLYOL_MIX_WEIGHT)
}
