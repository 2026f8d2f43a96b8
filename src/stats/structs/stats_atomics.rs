use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub datagrams_received: AtomicI64,
    pub packets_received: AtomicI64,
    pub metrics_parsed: AtomicI64,
    pub malformed_metrics: AtomicI64,
    pub metrics_relayed: AtomicI64,
    pub relay_failures: AtomicI64,
    pub unroutable: AtomicI64,
    pub backends_alive: AtomicI64,
    pub backends_configured: AtomicI64,
}
