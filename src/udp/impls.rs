/// Worker pool implementation.
pub mod parse_pool;

/// Relay implementation.
pub mod relay;

/// Listener implementation.
pub mod udp_server;
