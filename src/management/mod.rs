//! Management console.
//!
//! A small TCP service speaking newline delimited text commands, compatible
//! with the StatsD admin interface probed by `ManagementProbe`:
//!
//! | Command    | Reply                                                         |
//! |------------|---------------------------------------------------------------|
//! | `health`   | `health: up`                                                  |
//! | `stats`    | the counter snapshot as one JSON line                         |
//! | `backends` | `host:port position=<n> alive=<bool>` per member, then `END`  |
//! | `mirror`   | `mirror: <bool>`                                              |
//! | `help`     | the command list                                              |
//! | `quit`     | closes the connection                                         |
//!
//! The console only reads state, it never changes the ring or a backend.

/// Console command enumeration.
pub mod enums;

/// Implementation blocks for the console.
pub mod impls;

/// Console service entry point.
#[allow(clippy::module_inception)]
pub mod management;

/// Console data structures.
pub mod structs;

/// Unit tests for the console.
pub mod tests;
