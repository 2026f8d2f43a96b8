/// A datagram read by the listener.
pub mod datagram;

/// Worker pool that parses datagrams.
pub mod parse_pool;

/// Single relay stage that dispatches samples to backends.
pub mod relay;

/// UDP listener.
pub mod udp_server;
