//! Opt-in stderr tracing
//!
//! With the `trace` feature enabled, [`trace!`](crate::trace) writes one
//! `[ecalg]`-prefixed line per call to stderr. Without it the macro expands
//! to nothing and its arguments are never evaluated.

/// Trace a recomputation decision point.
#[cfg(feature = "trace")]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        ::std::eprintln!("[ecalg] {}", ::std::format_args!($($arg)*))
    };
}

/// Trace a recomputation decision point (disabled).
#[cfg(not(feature = "trace"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}
