use std::sync::Arc;
use tokio::net::UdpSocket;
use crate::stats::structs::stats_atomics::StatsAtomics;

#[derive(Debug)]
pub struct UdpServer {
    pub(crate) socket: Arc<UdpSocket>,
    pub(crate) stats: Arc<StatsAtomics>,
}
