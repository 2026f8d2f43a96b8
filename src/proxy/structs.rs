/// Handles to a running proxy.
pub mod proxy_server;
