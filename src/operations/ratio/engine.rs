use tracing::debug;

use crate::error::{DomainError, Result};
use crate::material::{
    CavityDimensions, FoamRequirementResult, ReferenceShot, TargetDensity, THICKENING_TIME_SEC,
};

const CM3_PER_M3: f64 = 1_000_000.0;
const G_PER_KG: f64 = 1000.0;

/// Mass fractions derived from a reference shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixFractions {
    /// Share of the polyol mix in the total shot mass.
    pub polyol: f64,
    /// Share of MDI in the total shot mass.
    pub mdi: f64,
    /// c-Pentane mass per unit of polyol.
    pub c_pentane: f64,
}

/// Scales a laboratory reference shot up to a full cavity.
///
/// The engine holds no results between calls. Keeping the last result around
/// for redisplay is up to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct RatioEngine {
    validate_mix: bool,
}

impl RatioEngine {
    /// Creates a permissive engine (mix validation off).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables the `polyol_mix_weight <= polyol_weight + c_pentane_weight`
    /// check on every reference shot.
    #[must_use]
    pub fn with_mix_validation(mut self, enabled: bool) -> Self {
        self.validate_mix = enabled;
        self
    }

    /// Derives the mixing fractions of a reference shot.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ZeroPolyolWeight`] if the polyol weight is zero
    /// and [`DomainError::ZeroMixTotal`] if mix plus MDI weight is zero.
    pub fn fractions(&self, shot: &ReferenceShot) -> Result<MixFractions> {
        if self.validate_mix {
            shot.validate_mix()?;
        }

        let shot_total = shot.polyol_mix_weight + shot.mdi_weight;
        if shot_total == 0.0 {
            return Err(DomainError::ZeroMixTotal.into());
        }
        if shot.polyol_weight == 0.0 {
            return Err(DomainError::ZeroPolyolWeight.into());
        }

        Ok(MixFractions {
            polyol: shot.polyol_mix_weight / shot_total,
            mdi: shot.mdi_weight / shot_total,
            c_pentane: shot.c_pentane_weight / shot.polyol_weight,
        })
    }

    /// Computes the component masses needed to fill `dimensions` at
    /// `target_density` with the ratios of `shot`.
    ///
    /// No rounding is applied.
    ///
    /// # Errors
    ///
    /// See [`RatioEngine::fractions`]. Nothing is returned on failure.
    pub fn compute(
        &self,
        dimensions: &CavityDimensions,
        target_density: TargetDensity,
        shot: &ReferenceShot,
    ) -> Result<FoamRequirementResult> {
        let fractions = self.fractions(shot)?;
        let density = target_density.kg_per_m3();

        let volume_cm3 = dimensions.volume_cm3();
        let volume_m3 = volume_cm3 / CM3_PER_M3;
        let total_mass_kg = density * volume_m3;
        let total_mass_g = total_mass_kg * G_PER_KG;

        let required_polyol = total_mass_g * fractions.polyol / (1.0 + fractions.c_pentane);
        let required_c_pentane = required_polyol * fractions.c_pentane;
        let required_mdi = total_mass_g * fractions.mdi;

        debug!(
            volume_cm3,
            total_mass_g,
            required_polyol,
            required_c_pentane,
            required_mdi,
            "computed foam shot"
        );

        Ok(FoamRequirementResult {
            volume_cm3,
            volume_m3,
            total_mass_g,
            total_mass_kg,
            required_polyol,
            required_c_pentane,
            required_mdi,
            thickening_time_sec: THICKENING_TIME_SEC,
            target_density: density,
        })
    }
}
