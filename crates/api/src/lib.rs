//! Public API traits and types for the ecalg engine
//!
//! This crate provides the public API surface for the ecalg ecosystem: the
//! error type, the point representation shared by both algebraic domains,
//! the rendering contract consumed by plotting front-ends, and the
//! [`CurveAlgebra`] capability trait implemented by every curve variant.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use types::*;

// Re-export all traits from the traits module
pub use traits::CurveAlgebra;

// Re-export trait modules for direct access
pub use traits::curve;
