//! Capability traits implemented by the curve variants

pub mod curve;

pub use curve::CurveAlgebra;
