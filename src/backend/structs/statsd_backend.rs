use std::net::{SocketAddr, UdpSocket};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;
use crate::backend::traits::liveness_probe::LivenessProbe;
use crate::ring::structs::ring_position::RingPosition;

pub struct StatsdBackend {
    pub host: String,
    pub port: u16,
    pub management_port: u16,
    pub(crate) ring_position: RingPosition,
    pub(crate) address: SocketAddr,
    pub(crate) socket: UdpSocket,
    pub(crate) alive: AtomicBool,
    pub(crate) check_interval: Duration,
    pub(crate) probe: Arc<dyn LivenessProbe>,
}
