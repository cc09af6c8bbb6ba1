use thiserror::Error;

/// Top-level error type for foamshot.
#[derive(Debug, Error)]
pub enum FoamError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Stl(#[from] StlError),

    #[error(transparent)]
    Log(#[from] LogError),
}

/// Invalid or degenerate numeric input.
///
/// Always recoverable: correct the input and call the operation again.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("{parameter} must be positive and finite, got {value}")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("reference polyol weight is zero")]
    ZeroPolyolWeight,

    #[error("reference polyol mix weight plus MDI weight is zero")]
    ZeroMixTotal,

    #[error("polyol mix weight {mix} exceeds polyol + c-pentane weight {components}")]
    MixExceedsComponents { mix: f64, components: f64 },

    #[error("mesh has {vertices} vertices and {faces} faces")]
    EmptyMesh { vertices: usize, faces: usize },

    #[error("face {face} references vertex {index}, mesh has {vertex_count}")]
    FaceIndexOutOfRange {
        face: usize,
        index: u32,
        vertex_count: usize,
    },

    #[error("step count must be at least 1, got {0}")]
    InvalidStepCount(usize),

    #[error("jitter amplitude must be in [0, 1), got {0}")]
    InvalidJitter(f64),

    #[error("cannot parse cavity dimensions from {0:?}")]
    UnparsableDimensions(String),
}

/// Errors raised while reading STL data.
#[derive(Debug, Error)]
pub enum StlError {
    #[error("failed to open STL file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse STL data: {0}")]
    Parse(#[source] std::io::Error),

    #[error("STL data contains no facets")]
    NoFacets,

    #[error("STL vertex {index} has a non-finite coordinate")]
    NonFiniteVertex { index: usize },

    #[error("STL mesh has {0} vertices, more than a u32 index can address")]
    TooManyVertices(usize),
}

/// Errors raised by the results log.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("results log I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("results log CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for results using [`FoamError`].
pub type Result<T> = std::result::Result<T, FoamError>;
