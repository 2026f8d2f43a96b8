use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ManagementProbe {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) timeout: Duration,
}
