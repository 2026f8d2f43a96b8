//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the proxy
//! configuration. TOML is the native format; files ending in `.json` are read
//! as JSON so existing proxy configurations keep working.
//!
//! # Configuration Structure
//!
//! The configuration file contains:
//! - **log_level / log_console_interval**: Logging and periodic stats output
//! - **host / port**: The UDP listener receiving StatsD traffic
//! - **management_host / management_port**: The management console
//! - **check_interval**: Milliseconds between backend health checks
//! - **mirror**: Send every metric to every backend
//! - **worker_threads / queue_size**: Pipeline sizing
//! - **nodes**: The backend StatsD daemons
//!
//! # Example
//!
//! ```rust,ignore
//! use statsd_proxy::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_file("config.toml")?;
//! config.validate()?;
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
