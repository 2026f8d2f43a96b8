//! Configuration data structures.
//!
//! Each struct corresponds to a section in the configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// A single backend StatsD daemon.
pub mod backend_node_config;
