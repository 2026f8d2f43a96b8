/// Errors surfaced by the proxy entry points.
pub mod proxy_error;
