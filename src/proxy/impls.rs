/// Startup and shutdown of a running proxy.
pub mod proxy_server;
