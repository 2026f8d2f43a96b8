//! Consistent hashing ring.
//!
//! Backends and metric names are placed on the same 32-bit circle. A
//! position is the first four bytes of the MD5 digest of a string, read
//! little-endian, the same placement libketama uses. Backends are placed by
//! their `host:port`, metrics by their name.
//!
//! # Resolution
//!
//! A metric belongs to the first alive backend found walking clockwise from
//! the metric's position: the alive backend with the smallest position
//! strictly greater than the metric's, or, past the last backend, the alive
//! backend with the smallest position on the ring. Dead backends stay on the
//! ring and are skipped, so their metrics move to the next neighbour and come
//! back once they recover.
//!
//! In mirror mode every backend receives every metric.
//!
//! # Membership
//!
//! The ring is built once at startup. A backend must be alive when it is
//! added, and the same `host:port` can only be added once.

/// Ring error enumeration.
pub mod enums;

/// Implementation blocks for the ring and positions.
pub mod impls;

/// Ring constants.
#[allow(clippy::module_inception)]
pub mod ring;

/// Ring data structures.
pub mod structs;
