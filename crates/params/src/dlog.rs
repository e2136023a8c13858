//! Constants for discrete logarithm solvers

/// Number of classes the Pollard rho walk partitions the plane into
pub const RHO_PARTITIONS: i64 = 3;

/// Fresh random walks tried before Pollard rho gives up
pub const RHO_MAX_ATTEMPTS: u64 = 3;
