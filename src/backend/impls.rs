pub mod statsd_backend;
pub mod management_probe;
pub mod static_probe;
