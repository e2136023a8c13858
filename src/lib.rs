//! # ecalg
//!
//! An elliptic-curve algebra engine for curves `y² = x³ + ax + b`, over the
//! real numbers and over the integers modulo `k`.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ecalg = "0.3"
//! ```
//!
//! ## Features
//!
//! - `serde`: Serialize/Deserialize for points, ranges, samples and parameters
//! - `trace`: stderr tracing of recomputation decision points
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`ecalg-api`]: Error type, point and rendering types, the `CurveAlgebra` trait
//! - [`ecalg-common`]: Modular arithmetic and numeric helpers
//! - [`ecalg-params`]: Rendering and solver constants
//! - [`ecalg-algorithms`]: Curve algebra, snapping, scalar multiplication,
//!   views, sessions and discrete logarithms
//!
//! ## Example
//!
//! ```
//! use ecalg::prelude::*;
//!
//! let curve = ModularCurve::new(0, 1, 7).unwrap();
//! assert_eq!(curve.curve_order(), 12);
//!
//! let p = Point::new(0, 1);
//! let three_p = mul_point(&curve, 3, &p).unwrap();
//! assert!(three_p.is_infinity());
//! ```

// Core re-exports (always available)
pub use ecalg_algorithms as algorithms;
pub use ecalg_api as api;
pub use ecalg_common as common;
pub use ecalg_params as params;

// Randomness source for the discrete logarithm solvers
pub use rand;

/// Common imports for ecalg users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits and types
    pub use crate::api::{
        Coordinate, CurveAlgebra, Label, PlotData, PlotRange, Point, Sample, Series, SeriesRole,
        SeriesStyle,
    };

    // Re-export the two algebra variants and their parameter records
    pub use crate::algorithms::ec::{
        ModularCurve, ModularParams, RealCurve, RealParams, RenderConfig,
    };

    // Scalar multiplication, views and sessions
    pub use crate::algorithms::scalar::mul_point;
    pub use crate::algorithms::session::CurveSession;
    pub use crate::algorithms::view::{PointAddition, ScalarMultiplication};

    // Discrete logarithms
    pub use crate::algorithms::dlog::{
        baby_step_giant_step, brute_force, pollard_rho, Logarithm,
    };

    // Modular arithmetic
    pub use crate::common::math_common::{inverse_of, is_prime};
}
