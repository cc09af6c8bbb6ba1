//! Bottom-up fill animation over a cavity mesh.
//!
//! Each frame lowers every vertex above the current fill line onto that line,
//! so the surface appears to rise from the lowest point of the cavity to the
//! highest. This is a geometric illusion, not a flow simulation.

mod color;
mod fill_animator;

pub use color::{fill_color, legend, Rgb};
pub use fill_animator::{FillAnimator, FillFrames};

use crate::math::Point3;

/// How vertices above the fill line are moved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FillStyle {
    /// `z = min(z, fill_height)`.
    #[default]
    Clamp,
    /// Vertices above the line keep their offset scaled by the progress:
    /// `z = fill_height + (z - fill_height) * progress`.
    Shrink,
}

/// Cosmetic per-vertex variation of the fill line.
///
/// Every vertex gets a multiplier in `[1 - amplitude, 1 + amplitude]` applied
/// to its fill progress. Multipliers come from a generator seeded with `seed`
/// and are drawn once per [`FillAnimator::generate_frames`] call, so the same
/// seed always yields the same frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Jitter {
    pub seed: u64,
    pub amplitude: f64,
}

impl Jitter {
    /// Creates a jitter setting.
    #[must_use]
    pub fn new(seed: u64, amplitude: f64) -> Self {
        Self { seed, amplitude }
    }
}

/// Animation settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillParams {
    /// Number of steps; frames are produced for `0..=step_count`.
    pub step_count: usize,
    /// Vertex displacement style.
    pub style: FillStyle,
    /// Whether frames carry per-vertex colors.
    pub colors: bool,
    /// Optional cosmetic variation, off by default.
    pub jitter: Option<Jitter>,
}

impl Default for FillParams {
    fn default() -> Self {
        Self {
            step_count: 20,
            style: FillStyle::Clamp,
            colors: true,
            jitter: None,
        }
    }
}

/// One snapshot of the filling cavity.
#[derive(Debug, Clone, PartialEq)]
pub struct FillFrame {
    /// Step index in `0..=step_count`.
    pub step: usize,
    /// `step / step_count`.
    pub progress: f64,
    /// Height of the fill line for this step.
    pub fill_height: f64,
    /// One position per mesh vertex, in mesh order.
    pub vertices: Vec<Point3>,
    /// One color per mesh vertex when colors are enabled.
    pub colors: Option<Vec<Rgb>>,
}
