pub mod animation;
pub mod error;
pub mod history;
pub mod material;
pub mod math;
pub mod mesh;
pub mod operations;

pub use error::{DomainError, FoamError, Result};
