use serde::{Deserialize, Serialize};
use crate::config::structs::backend_node_config::BackendNodeConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub host: String,
    pub port: u16,
    #[serde(alias = "managementHost", alias = "managementhost")]
    pub management_host: String,
    #[serde(alias = "managementPort", alias = "managementport")]
    pub management_port: u16,
    #[serde(alias = "checkInterval", alias = "checkinterval")]
    pub check_interval: u64,
    pub mirror: bool,
    #[serde(alias = "workerThreads")]
    pub worker_threads: usize,
    #[serde(alias = "queueSize")]
    pub queue_size: usize,
    #[serde(alias = "receiveBufferSize")]
    pub receive_buffer_size: usize,
    pub nodes: Vec<BackendNodeConfig>
}
