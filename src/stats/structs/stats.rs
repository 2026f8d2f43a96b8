use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub started: i64,
    pub datagrams_received: i64,
    pub packets_received: i64,
    pub metrics_parsed: i64,
    pub malformed_metrics: i64,
    pub metrics_relayed: i64,
    pub relay_failures: i64,
    pub unroutable: i64,
    pub backends_alive: i64,
    pub backends_configured: i64,
}
