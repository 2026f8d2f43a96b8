use std::net::SocketAddr;
use std::sync::Arc;
use log::info;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::udp::structs::datagram::Datagram;
use crate::udp::structs::udp_server::UdpServer;

/// Size of the inbound read buffer. Longer datagrams are truncated.
pub const MAX_PACKET_SIZE: usize = 512;

/// Default capacity of the work and relay queues.
pub const DEFAULT_QUEUE_SIZE: usize = 100;

/// Default number of parse workers.
pub const DEFAULT_WORKER_COUNT: usize = 8;

/// Binds the listener on `addr` and spawns its read loop.
///
/// Bind errors are returned to the caller; nothing is spawned in that case.
pub async fn udp_service(addr: SocketAddr, recv_buffer_size: usize, work_tx: mpsc::Sender<Datagram>, stats: Arc<StatsAtomics>, rx: watch::Receiver<bool>) -> std::io::Result<(SocketAddr, JoinHandle<()>)>
{
    let udp_server = UdpServer::new(addr, recv_buffer_size, stats).await?;
    let local_addr = udp_server.local_addr()?;
    info!("[UDP] Starting a server listener on {local_addr}");
    let handle = tokio::spawn(async move {
        udp_server.start(work_tx, rx).await;
    });
    Ok((local_addr, handle))
}
