/// Command sent to a StatsD management port.
pub const HEALTH_COMMAND: &[u8] = b"health\n";

/// Reply of a healthy StatsD daemon.
pub const HEALTHY_REPLY: &str = "health: up";

/// Lower bound of a single probe exchange, in milliseconds.
pub const MIN_PROBE_TIMEOUT_MS: u64 = 100;
