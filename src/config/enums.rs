//! Configuration enumerations.

/// Errors raised while loading or validating a configuration.
pub mod configuration_error;
