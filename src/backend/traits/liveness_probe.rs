use async_trait::async_trait;
use crate::backend::enums::backend_error::BackendError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LivenessProbe: Send + Sync {
    async fn probe(&self) -> Result<(), BackendError>;
}
