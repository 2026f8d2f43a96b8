use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::udp::structs::datagram::Datagram;

pub struct ParsePool {
    pub(crate) workers: usize,
    pub(crate) payload: Arc<Mutex<mpsc::Receiver<Datagram>>>,
    pub(crate) stats: Arc<StatsAtomics>,
}
