/// A handle to one remote StatsD daemon.
pub mod statsd_backend;

/// Probe talking to the StatsD management interface.
pub mod management_probe;

/// Probe that always reports the backend alive.
pub mod static_probe;
