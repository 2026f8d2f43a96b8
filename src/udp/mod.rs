//! Ingestion pipeline.
//!
//! Metrics flow through three stages connected by bounded queues:
//!
//! ```text
//! UdpServer ──(work queue)──▶ ParsePool (N workers) ──(relay queue)──▶ Relay ──▶ backends
//! ```
//!
//! - `UdpServer` is the only writer to the work queue. It reads one datagram
//!   at a time into a fixed `MAX_PACKET_SIZE` buffer.
//! - `ParsePool` runs a fixed number of workers sharing the work queue. A
//!   worker splits a datagram into lines, parses each line and forwards the
//!   samples to the relay queue in the order they appeared in the datagram.
//! - `Relay` is the single reader of the relay queue. It resolves every
//!   sample on the hash ring and sends the untouched line to the backend(s).
//!
//! # Backpressure
//!
//! Both queues are bounded. When the relay falls behind, workers stall on the
//! relay queue, the work queue fills up and the listener stops reading, so
//! excess datagrams are dropped by the kernel rather than buffered in memory.
//!
//! # Shutdown
//!
//! Only the listener watches the shutdown signal. When it stops it drops the
//! work queue sender; workers drain what is queued and exit, which closes the
//! relay queue, and the relay exits after dispatching the remaining samples.
//! A socket read error stops the listener the same way.

/// Implementation blocks for the pipeline stages.
pub mod impls;

/// Pipeline stage data structures.
pub mod structs;

/// Pipeline constants and the listener entry point.
#[allow(clippy::module_inception)]
pub mod udp;
