use thiserror::Error;
use crate::config::enums::configuration_error::ConfigurationError;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Unable to resolve {0}")]
    Address(String),

    #[error("Unable to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}
