//! Process control.
//!
//! `start_proxy` is the entry point used by the binary: it loads the
//! configuration, then hands over to `run_proxy`, which runs until the
//! shutdown signal fires.
//!
//! # Startup order
//!
//! 1. Every configured backend is constructed and probed once, concurrently
//! 2. Backends that passed the probe are added to the hash ring, the others
//!    are dropped with a warning
//! 3. The UDP listener and the management console are bound, bind errors are
//!    returned to the caller
//! 4. Relay, parse workers, listener, health checks and the stats console are
//!    spawned
//!
//! The ring is never rebuilt afterwards. Backends that recover or fail later
//! only flip their liveness flag.

/// Proxy error enumeration.
pub mod enums;

/// Implementation blocks for the running proxy.
pub mod impls;

/// Entry points.
#[allow(clippy::module_inception)]
pub mod proxy;

/// Running proxy data structures.
pub mod structs;
