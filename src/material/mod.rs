//! Input and output records of the mixture-ratio calculation.

pub mod defaults;
mod dimensions;
mod preset;

pub use dimensions::CavityDimensions;
pub use preset::CavityPreset;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result};

/// Lab reference thickening time in seconds (±4 s at 25 °C).
pub const THICKENING_TIME_SEC: u32 = 45;

/// Target foam density in kg/m³.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetDensity(f64);

impl TargetDensity {
    /// Creates a target density.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonPositive`] if `kg_per_m3` is not a positive
    /// finite number.
    pub fn new(kg_per_m3: f64) -> Result<Self> {
        if !(kg_per_m3.is_finite() && kg_per_m3 > 0.0) {
            return Err(DomainError::NonPositive {
                parameter: "target_density",
                value: kg_per_m3,
            }
            .into());
        }
        Ok(Self(kg_per_m3))
    }

    /// Returns the density in kg/m³.
    #[must_use]
    pub fn kg_per_m3(self) -> f64 {
        self.0
    }
}

/// Component masses of the standard laboratory test shot, in grams.
///
/// Values are accepted as given. The mix-weight precondition is only checked
/// when the caller asks for it through [`ReferenceShot::validate_mix`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceShot {
    /// Polyol weight used in the test.
    pub polyol_weight: f64,
    /// c-Pentane (blowing agent) weight used in the test.
    pub c_pentane_weight: f64,
    /// MDI (isocyanate) weight used in the test.
    pub mdi_weight: f64,
    /// Combined polyol + c-pentane mix weight used in the test.
    pub polyol_mix_weight: f64,
}

impl ReferenceShot {
    /// Creates a reference shot from its four component masses.
    #[must_use]
    pub fn new(
        polyol_weight: f64,
        c_pentane_weight: f64,
        mdi_weight: f64,
        polyol_mix_weight: f64,
    ) -> Self {
        Self {
            polyol_weight,
            c_pentane_weight,
            mdi_weight,
            polyol_mix_weight,
        }
    }

    /// Checks that the mix weight does not exceed its components.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MixExceedsComponents`] if
    /// `polyol_mix_weight > polyol_weight + c_pentane_weight`.
    pub fn validate_mix(&self) -> Result<()> {
        let components = self.polyol_weight + self.c_pentane_weight;
        if self.polyol_mix_weight > components {
            return Err(DomainError::MixExceedsComponents {
                mix: self.polyol_mix_weight,
                components,
            }
            .into());
        }
        Ok(())
    }
}

/// Required material masses for one cavity.
///
/// Field order is the column order of the results log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoamRequirementResult {
    pub volume_cm3: f64,
    pub volume_m3: f64,
    pub total_mass_g: f64,
    pub total_mass_kg: f64,
    pub required_polyol: f64,
    pub required_c_pentane: f64,
    pub required_mdi: f64,
    pub thickening_time_sec: u32,
    pub target_density: f64,
}

impl FoamRequirementResult {
    /// Column names in log order.
    pub const FIELD_NAMES: [&'static str; 9] = [
        "volume_cm3",
        "volume_m3",
        "total_mass_g",
        "total_mass_kg",
        "required_polyol",
        "required_c_pentane",
        "required_mdi",
        "thickening_time_sec",
        "target_density",
    ];

    /// Sum of the three required component masses in grams.
    #[must_use]
    pub fn total_components_g(&self) -> f64 {
        self.required_polyol + self.required_c_pentane + self.required_mdi
    }
}
