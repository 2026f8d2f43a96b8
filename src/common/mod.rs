//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules in the proxy.
//!
//! # Utilities
//!
//! - Logging setup (`fern` dispatcher with colored levels)
//! - Hostname defaulting for unset host fields
//! - Host/port resolution into socket addresses
//!
//! # Data Structures
//!
//! - `CustomError` - Free-form error type
//!
//! # Example
//!
//! ```rust,ignore
//! use statsd_proxy::common::common::{resolve_host, resolve_socket_address};
//!
//! // An empty host falls back to the local hostname
//! let host = resolve_host("");
//! let address = resolve_socket_address(&host, 8125)?;
//! ```

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
