//! Error handling for curve algorithms
//!
//! The algorithms share the API crate's error type; this module adds the
//! input guards used when a curve or a solver is set up.

pub use ecalg_api::error::{Error, Result, ResultExt};

// Include the validation submodule
pub mod validate;
