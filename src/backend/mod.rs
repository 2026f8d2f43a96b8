//! Backend StatsD daemons.
//!
//! A backend is one remote StatsD daemon: a UDP data port that receives the
//! relayed metric lines, and an optional management port used to check that
//! the daemon is alive.
//!
//! # Liveness
//!
//! Liveness is a single atomic flag per backend. It is written only by the
//! backend's own health-check task (and by the initial check at startup) and
//! read by the relay while resolving metrics on the hash ring.
//!
//! The check itself is pluggable through the `LivenessProbe` trait:
//! - `ManagementProbe` sends `health` to the StatsD admin interface and
//!   expects `health: up`
//! - `StaticProbe` always succeeds, used when no management port is configured
//!
//! # Transport
//!
//! Sends are fire-and-forget datagrams on a non-blocking socket owned by the
//! backend. A send that cannot complete immediately fails instead of stalling
//! the relay.

/// Backend error enumeration.
pub mod enums;

/// Implementation blocks for backends and probes.
pub mod impls;

/// Constants shared by the probes.
#[allow(clippy::module_inception)]
pub mod backend;

/// Backend and probe data structures.
pub mod structs;

/// The liveness probe trait.
pub mod traits;
