use std::str::FromStr;

use crate::error::{DomainError, FoamError, Result};

/// Interior dimensions of a cavity, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CavityDimensions {
    length: f64,
    width: f64,
    height: f64,
}

impl CavityDimensions {
    /// Creates cavity dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonPositive`] if any edge is not a positive
    /// finite number.
    pub fn new(length: f64, width: f64, height: f64) -> Result<Self> {
        for (parameter, value) in [("length", length), ("width", width), ("height", height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(DomainError::NonPositive { parameter, value }.into());
            }
        }
        Ok(Self {
            length,
            width,
            height,
        })
    }

    /// Returns the length in centimeters.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the width in centimeters.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height in centimeters.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns `length * width * height` in cm³.
    #[must_use]
    pub fn volume_cm3(&self) -> f64 {
        self.length * self.width * self.height
    }

    /// Returns these dimensions with every edge multiplied by `factor`.
    ///
    /// # Errors
    ///
    /// Returns an error if the scaled edges are not positive.
    pub fn scaled(&self, factor: f64) -> Result<Self> {
        Self::new(
            self.length * factor,
            self.width * factor,
            self.height * factor,
        )
    }
}

/// Parses `"LxWxH"`, optionally prefixed with a label (`"Small:50x50x50"`).
impl FromStr for CavityDimensions {
    type Err = FoamError;

    fn from_str(s: &str) -> Result<Self> {
        let unparsable = || DomainError::UnparsableDimensions(s.to_owned());

        let edges_text = s.rsplit_once(':').map_or(s, |(_, dims)| dims).trim();
        let mut edges = edges_text.split(['x', 'X', '×']).map(|part| part.trim().parse::<f64>());

        let (Some(Ok(length)), Some(Ok(width)), Some(Ok(height)), None) =
            (edges.next(), edges.next(), edges.next(), edges.next())
        else {
            return Err(unparsable().into());
        };

        Self::new(length, width, height)
    }
}
