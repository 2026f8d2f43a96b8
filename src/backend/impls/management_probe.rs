use std::time::Duration;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use crate::backend::backend::{HEALTH_COMMAND, HEALTHY_REPLY, MIN_PROBE_TIMEOUT_MS};
use crate::backend::enums::backend_error::BackendError;
use crate::backend::structs::management_probe::ManagementProbe;
use crate::backend::traits::liveness_probe::LivenessProbe;

impl ManagementProbe {
    pub fn new(host: &str, port: u16, timeout: Duration) -> ManagementProbe {
        ManagementProbe {
            host: host.to_string(),
            port,
            timeout: timeout.max(Duration::from_millis(MIN_PROBE_TIMEOUT_MS)),
        }
    }

    async fn health_exchange(&self) -> Result<(), BackendError> {
        let mut stream = TcpStream::connect((self.host.as_str(), self.port)).await.map_err(BackendError::Probe)?;
        stream.write_all(HEALTH_COMMAND).await.map_err(BackendError::Probe)?;

        let mut reader = BufReader::new(stream);
        let mut reply = String::new();
        reader.read_line(&mut reply).await.map_err(BackendError::Probe)?;

        let reply = reply.trim();
        if reply == HEALTHY_REPLY {
            Ok(())
        } else {
            Err(BackendError::Unhealthy(reply.to_string()))
        }
    }
}

#[async_trait]
impl LivenessProbe for ManagementProbe {
    async fn probe(&self) -> Result<(), BackendError> {
        match tokio::time::timeout(self.timeout, self.health_exchange()).await {
            Ok(result) => result,
            Err(_) => Err(BackendError::ProbeTimeout(self.timeout.as_millis() as u64))
        }
    }
}
