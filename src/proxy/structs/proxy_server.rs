use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;
use crate::ring::structs::hash_ring::HashRing;
use crate::stats::structs::stats_atomics::StatsAtomics;

/// A started proxy. Dropping it does not stop anything, use the shutdown
/// signal and `wait`.
#[derive(Debug)]
pub struct ProxyServer {
    pub(crate) udp_addr: SocketAddr,
    pub(crate) management_addr: Option<SocketAddr>,
    pub(crate) ring: Arc<HashRing>,
    pub(crate) stats: Arc<StatsAtomics>,
    pub(crate) handles: Vec<JoinHandle<()>>,
}
