//! Constant values for the ecalg crates

pub mod dlog;
pub mod plot;
