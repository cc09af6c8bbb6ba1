use serde::{Deserialize, Serialize};

/// Linear RGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Empty cavity.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    /// Filled cavity.
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);

    /// Creates a color.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Returns `[r, g, b]` for vertex buffers.
    #[must_use]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// Maps a fill fraction to a color, red at 0 and green at 1.
///
/// Fractions outside `[0, 1]` are clamped; NaN maps to red.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn fill_color(fraction: f64) -> Rgb {
    let t = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0) as f32
    };
    Rgb::new(1.0 - t, t, 0.0)
}

/// Evenly spaced `(fraction, color)` stops for a color-scale legend.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn legend(stops: usize) -> Vec<(f64, Rgb)> {
    match stops {
        0 => Vec::new(),
        1 => vec![(0.0, fill_color(0.0))],
        n => (0..n)
            .map(|i| {
                let fraction = i as f64 / (n - 1) as f64;
                (fraction, fill_color(fraction))
            })
            .collect(),
    }
}
