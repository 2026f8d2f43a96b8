use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RingError {
    #[error("Backend {0} doesn't seem to be alive")]
    BackendUnavailable(String),

    #[error("Backend {0} is already part of the hash ring")]
    DuplicateBackend(String),

    #[error("No usable backends in the hash ring")]
    EmptyRing,
}
