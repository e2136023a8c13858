//! Common implementations and shared functionality for the ecalg crates
//!
//! This crate provides the integer arithmetic modulo `k` used by the modular
//! curve, the floating-point helpers used by the real curve, and the
//! [`trace!`] diagnostics macro.

pub mod math_common;
pub mod numeric;

mod trace;

// Re-export the modular arithmetic primitives
pub use math_common::{inverse_of, is_prime, modulo};

// Re-export floating-point helpers
pub use numeric::{round10, sort_unique};
