use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Resolve error: {0}")]
    Resolve(String),

    #[error("Socket error: {0}")]
    Socket(#[source] std::io::Error),

    #[error("Transport error: {0}")]
    Transport(#[source] std::io::Error),

    #[error("Probe error: {0}")]
    Probe(#[source] std::io::Error),

    #[error("Probe timed out after {0}ms")]
    ProbeTimeout(u64),

    #[error("Backend reported unhealthy: {0}")]
    Unhealthy(String),
}
