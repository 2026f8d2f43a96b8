use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use log::{debug, info, warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use crate::backend::enums::backend_error::BackendError;
use crate::backend::structs::management_probe::ManagementProbe;
use crate::backend::structs::static_probe::StaticProbe;
use crate::backend::structs::statsd_backend::StatsdBackend;
use crate::backend::traits::liveness_probe::LivenessProbe;
use crate::common::common::resolve_socket_address;
use crate::ring::structs::ring_position::RingPosition;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsdBackend {
    /// Creates a backend for `host:port`.
    ///
    /// The ring position is derived from `host:port` and never changes. The
    /// backend starts out dead; `check_liveness` must run before it can be
    /// added to a ring. A `management_port` of 0 disables probing, such a
    /// backend is considered alive after its first check.
    pub fn new(host: &str, port: u16, management_port: u16, check_interval_ms: u64) -> Result<StatsdBackend, BackendError> {
        let address = resolve_socket_address(host, port).map_err(|e| BackendError::Resolve(e.to_string()))?;
        let local: SocketAddr = if address.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };
        let socket = UdpSocket::bind(local).map_err(BackendError::Socket)?;
        socket.set_nonblocking(true).map_err(BackendError::Socket)?;

        let check_interval = Duration::from_millis(check_interval_ms.max(1));
        let probe: Arc<dyn LivenessProbe> = if management_port == 0 {
            Arc::new(StaticProbe)
        } else {
            Arc::new(ManagementProbe::new(host, management_port, check_interval))
        };

        Ok(StatsdBackend {
            host: host.to_string(),
            port,
            management_port,
            ring_position: RingPosition::of(&format!("{host}:{port}")),
            address,
            socket,
            alive: AtomicBool::new(false),
            check_interval,
            probe,
        })
    }

    pub fn with_probe(mut self, probe: Arc<dyn LivenessProbe>) -> StatsdBackend {
        self.probe = probe;
        self
    }

    /// The `host:port` identity used for hashing and duplicate detection.
    pub fn key(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn ring_position(&self) -> RingPosition {
        self.ring_position
    }

    pub fn address(&self) -> SocketAddr {
        self.address
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    pub(crate) fn set_alive(&self, alive: bool) -> bool {
        self.alive.swap(alive, Ordering::AcqRel)
    }

    /// Runs the liveness probe once and records the outcome.
    pub async fn check_liveness(&self) -> bool {
        let alive = match self.probe.probe().await {
            Ok(()) => true,
            Err(error) => {
                debug!("[BACKEND] Liveness probe for {} failed: {error}", self.key());
                false
            }
        };
        let previous = self.set_alive(alive);
        if previous != alive {
            if alive {
                info!("[BACKEND] {} is alive", self.key());
            } else {
                warn!("[BACKEND] {} is not responding, routing around it", self.key());
            }
        }
        alive
    }

    /// Forwards `raw` to the backend data port as a single datagram.
    pub fn send(&self, raw: &[u8]) -> Result<usize, BackendError> {
        self.socket.send_to(raw, self.address).map_err(BackendError::Transport)
    }

    pub fn start_health_check(self: Arc<Self>, stats: Arc<StatsAtomics>, mut shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
        tokio::spawn(async move {
            info!("[BACKEND] Starting health check for {} every {}ms...", self.key(), self.check_interval.as_millis());
            let mut interval = tokio::time::interval(self.check_interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick fires immediately and the startup check already ran.
            interval.tick().await;
            loop {
                tokio::select! {
                    _ = shutdown.changed() => {
                        info!("[BACKEND] Shutting down health check for {}...", self.key());
                        return;
                    }
                    _ = interval.tick() => {
                        let was_alive = self.is_alive();
                        let alive = self.check_liveness().await;
                        if was_alive != alive {
                            stats.update_stats(StatsEvent::BackendsAlive, if alive { 1 } else { -1 });
                        }
                    }
                }
            }
        })
    }
}

impl fmt::Debug for StatsdBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatsdBackend")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("management_port", &self.management_port)
            .field("ring_position", &self.ring_position)
            .field("address", &self.address)
            .field("alive", &self.is_alive())
            .finish()
    }
}
