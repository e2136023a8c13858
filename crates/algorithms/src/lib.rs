//! Elliptic-curve algebra over the reals and over the integers modulo k
//!
//! This crate implements the chord-and-tangent group law for curves
//! y² = x³ + ax + b in two domains, together with what an interactive
//! front-end needs around it: the real roots and stationary points that
//! frame a real plot, the finite point set of a modular curve, sampled
//! curves and lines (wrapped around the k × k grid in the modular case),
//! snapping of edited coordinates back onto the curve, subgroup orders and
//! discrete logarithm solvers for small modular curves.
//!
//! Nothing here is constant-time or meant for secret data.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Cubic root extraction
pub mod cubic;

// Curve implementations
pub mod ec;
pub use ec::{ModularCurve, ModularParams, RealCurve, RealParams, RenderConfig};

// Generic double-and-add
pub mod scalar;
pub use scalar::mul_point;

// Composed views and the parameter session
pub mod session;
pub mod view;
pub use session::CurveSession;
pub use view::{PointAddition, ScalarMultiplication};

// Discrete logarithm solvers
pub mod dlog;
pub use dlog::{baby_step_giant_step, brute_force, pollard_rho, Logarithm};
