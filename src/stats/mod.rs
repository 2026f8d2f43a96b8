//! Self-observability counters.
//!
//! Every pipeline stage reports what it did through `StatsAtomics`, a set of
//! atomic integers shared behind an `Arc`. Stages never block on the counters.
//!
//! # Counters
//!
//! - `DatagramsReceived`: datagrams read by the listener
//! - `PacketsReceived`: metric lines handed to the parser
//! - `MetricsParsed` / `MalformedMetrics`: parser outcome per line
//! - `MetricsRelayed` / `RelayFailures`: outcome per backend send
//! - `Unroutable`: samples dropped because no backend was usable
//!
//! # Gauges
//!
//! - `BackendsConfigured`: ring members after startup
//! - `BackendsAlive`: ring members currently passing their liveness probe
//!
//! # Example
//!
//! ```rust
//! use statsd_proxy::stats::enums::stats_event::StatsEvent;
//! use statsd_proxy::stats::structs::stats_atomics::StatsAtomics;
//!
//! let stats = StatsAtomics::new();
//! stats.update_stats(StatsEvent::PacketsReceived, 1);
//! assert_eq!(stats.get_stats().packets_received, 1);
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters and snapshot).
pub mod structs;
