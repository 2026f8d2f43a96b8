//! StatsD line protocol parsing.
//!
//! Every datagram received by the proxy carries one or more newline separated
//! lines of the form:
//!
//! ```text
//! <name>:<value>|<type>[|@<samplerate>]
//! <name>:<value>|<type>[@<samplerate>]
//! ```
//!
//! Only the name, the numeric value and the type token are interpreted. The
//! proxy never re-encodes a metric: the parsed sample keeps the untouched
//! line, and that is what travels to the backend.
//!
//! # Accepted types
//!
//! | Token | Type      |
//! |-------|-----------|
//! | `c`   | Counter   |
//! | `ms`  | Timer     |
//! | `g`   | Gauge     |
//! | `h`   | Histogram |
//! | `s`   | Set       |

/// Metric type and parse error enumerations.
pub mod enums;

/// Implementation blocks for parsing.
pub mod impls;

/// Core parsing entry points.
#[allow(clippy::module_inception)]
pub mod metric;

/// Parsed metric data structures.
pub mod structs;
