use std::net::SocketAddr;
use std::sync::Arc;
use log::{debug, error, info};
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;
use tokio::sync::{mpsc, watch};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::udp::structs::datagram::Datagram;
use crate::udp::structs::udp_server::UdpServer;
use crate::udp::udp::MAX_PACKET_SIZE;

impl UdpServer {
    /// Binds a non-blocking UDP socket on `bind_address`.
    ///
    /// A `recv_buffer_size` of 0 keeps the operating system default.
    #[tracing::instrument(level = "debug", skip(stats))]
    pub async fn new(bind_address: SocketAddr, recv_buffer_size: usize, stats: Arc<StatsAtomics>) -> tokio::io::Result<UdpServer>
    {
        let domain = if bind_address.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
        let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;

        if recv_buffer_size > 0 {
            socket.set_recv_buffer_size(recv_buffer_size).map_err(tokio::io::Error::other)?;
        }
        socket.bind(&bind_address.into())?;
        socket.set_nonblocking(true)?;

        let std_socket: std::net::UdpSocket = socket.into();
        let tokio_socket = UdpSocket::from_std(std_socket)?;

        let sock_ref = socket2::SockRef::from(&tokio_socket);
        debug!("[UDP] Socket created with receive buffer of {} bytes", sock_ref.recv_buffer_size().unwrap_or(0));

        Ok(UdpServer {
            socket: Arc::new(tokio_socket),
            stats,
        })
    }

    pub fn local_addr(&self) -> tokio::io::Result<SocketAddr>
    {
        self.socket.local_addr()
    }

    /// Reads datagrams until shutdown, a socket error, or the workers going away.
    pub async fn start(&self, work_tx: mpsc::Sender<Datagram>, mut rx: watch::Receiver<bool>)
    {
        let mut data = [0u8; MAX_PACKET_SIZE];
        loop {
            tokio::select! {
                _ = rx.changed() => {
                    info!("[UDP] Stopping UDP server listener...");
                    break;
                }
                result = self.socket.recv_from(&mut data) => {
                    match result {
                        Ok((valid_bytes, remote_addr)) => {
                            self.stats.update_stats(StatsEvent::DatagramsReceived, 1);
                            debug!("[UDP] Received {valid_bytes} bytes from {remote_addr}");
                            let datagram = Datagram {
                                data: data[..valid_bytes].to_vec(),
                                remote_addr,
                            };
                            if work_tx.send(datagram).await.is_err() {
                                info!("[UDP] Work queue closed, stopping UDP server listener...");
                                break;
                            }
                        }
                        Err(e) => {
                            error!("[UDP] Socket read error, no longer accepting metrics: {e}");
                            break;
                        }
                    }
                }
            }
        }
    }
}
