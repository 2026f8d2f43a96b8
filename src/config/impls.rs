//! Implementation blocks for configuration types.

/// Loading, saving, defaults and validation.
pub mod configuration;

/// `Display` and `Error` for `ConfigurationError`.
pub mod configuration_error;

/// Defaults for backend node entries.
pub mod backend_node_config;
