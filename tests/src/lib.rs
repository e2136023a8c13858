//! Shared fixtures and strategies for the ecalg integration tests

pub mod fixtures;
pub mod strategies;
