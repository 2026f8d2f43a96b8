//! # StatsD Proxy
//!
//! A UDP relay that spreads StatsD metrics over a pool of backend StatsD
//! daemons.
//!
//! ## Overview
//!
//! Every metric name is placed on a consistent hashing ring, so the same name
//! always reaches the same backend while that backend is alive. This lets a
//! fleet of StatsD servers scale horizontally while each metric is still
//! aggregated in exactly one place. In mirror mode every metric is sent to
//! every backend instead.
//!
//! ## Features
//!
//! - **Consistent hashing**: MD5 based ring positions, nearest clockwise alive backend
//! - **Liveness probing**: periodic `health` checks against each backend's management port
//! - **Concurrent pipeline**: listener, parse worker pool and a single relay stage over bounded queues
//! - **Byte exact relaying**: backends receive the original line, never a re-encoded one
//! - **Management console**: health, counters, ring membership over a TCP text protocol
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use statsd_proxy::proxy::proxy::start_proxy;
//!
//! let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//! start_proxy("config.toml", shutdown_rx).await?;
//! ```
//!
//! ## Modules
//!
//! - [`backend`] - Backend daemons, transport and liveness probes
//! - [`common`] - Logging setup, host resolution and shared errors
//! - [`config`] - Configuration loading and validation
//! - [`management`] - TCP management console
//! - [`metric`] - StatsD line parsing
//! - [`proxy`] - Startup, wiring and shutdown
//! - [`ring`] - Consistent hashing ring
//! - [`stats`] - Self-observability counters
//! - [`structs`] - CLI argument parsing
//! - [`udp`] - Listener, parse workers and relay

/// Backend StatsD daemons.
///
/// Owns the per-backend UDP socket and liveness flag, and the probes that
/// keep the flag current.
pub mod backend;

/// Common utilities and shared functionality.
pub mod common;

/// Configuration management module.
///
/// Handles loading TOML (or JSON) configuration files, applying defaults and
/// validating values before the proxy starts.
pub mod config;

/// Management console.
pub mod management;

/// StatsD line protocol parsing.
pub mod metric;

/// Process control: `start_proxy`, `run_proxy` and the running proxy.
pub mod proxy;

/// Consistent hashing ring.
///
/// Resolves metric names to backends, with wraparound and mirror mode.
pub mod ring;

/// Real-time statistics tracking.
pub mod stats;

/// Command-line interface structures.
pub mod structs;

/// Ingestion pipeline: UDP listener, parse workers and relay.
pub mod udp;
