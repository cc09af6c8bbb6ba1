use std::fmt;
use std::str::FromStr;

use crate::error::{DomainError, FoamError, Result};

use super::CavityDimensions;

/// Standard cavity sizes offered by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CavityPreset {
    /// 50 × 50 × 50 cm.
    Small,
    /// 100 × 60 × 60 cm.
    Medium,
    /// 150 × 80 × 70 cm.
    Large,
}

impl CavityPreset {
    /// All presets, smallest first.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Edge lengths in centimeters as `(length, width, height)`.
    #[must_use]
    pub fn edges(self) -> (f64, f64, f64) {
        match self {
            Self::Small => (50.0, 50.0, 50.0),
            Self::Medium => (100.0, 60.0, 60.0),
            Self::Large => (150.0, 80.0, 70.0),
        }
    }

    /// Returns the preset as cavity dimensions.
    ///
    /// # Errors
    ///
    /// Never fails for the built-in presets; the signature mirrors
    /// [`CavityDimensions::new`].
    pub fn dimensions(self) -> Result<CavityDimensions> {
        let (l, w, h) = self.edges();
        CavityDimensions::new(l, w, h)
    }

    fn name(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }
}

/// Formats as the front-end label, e.g. `Medium:100x60x60`.
impl fmt::Display for CavityPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (l, w, h) = self.edges();
        write!(f, "{}:{l}x{w}x{h}", self.name())
    }
}

impl FromStr for CavityPreset {
    type Err = FoamError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (name, dims) = match trimmed.split_once(':') {
            Some((name, dims)) => (name.trim(), Some(dims)),
            None => (trimmed, None),
        };

        let preset = Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| DomainError::UnparsableDimensions(s.to_owned()))?;

        // A label with mismatched edges is rejected rather than silently resized.
        if let Some(dims) = dims {
            let parsed: CavityDimensions = dims.parse()?;
            if parsed != preset.dimensions()? {
                return Err(DomainError::UnparsableDimensions(s.to_owned()).into());
            }
        }

        Ok(preset)
    }
}
