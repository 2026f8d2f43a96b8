use async_trait::async_trait;
use crate::backend::enums::backend_error::BackendError;
use crate::backend::structs::static_probe::StaticProbe;
use crate::backend::traits::liveness_probe::LivenessProbe;

#[async_trait]
impl LivenessProbe for StaticProbe {
    async fn probe(&self) -> Result<(), BackendError> {
        Ok(())
    }
}
