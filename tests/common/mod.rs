#![allow(dead_code)]
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use async_trait::async_trait;
use tokio::net::UdpSocket;
use tokio::sync::watch;
use statsd_proxy::backend::enums::backend_error::BackendError;
use statsd_proxy::backend::traits::liveness_probe::LivenessProbe;
use statsd_proxy::config::structs::backend_node_config::BackendNodeConfig;
use statsd_proxy::config::structs::configuration::Configuration;
use statsd_proxy::proxy::structs::proxy_server::ProxyServer;

pub type TestConfig = Arc<Configuration>;

/// Loopback configuration with ephemeral listener port, no management
/// console and no stats console.
pub fn create_test_config(nodes: Vec<BackendNodeConfig>, mirror: bool) -> Configuration {
    let mut config = Configuration::init();
    config.host = String::from("127.0.0.1");
    config.port = 0;
    config.management_host = String::from("127.0.0.1");
    config.management_port = 0;
    config.log_console_interval = 0;
    config.mirror = mirror;
    config.nodes = nodes;
    config
}

pub fn create_test_node(port: u16) -> BackendNodeConfig {
    BackendNodeConfig {
        host: String::from("127.0.0.1"),
        port,
        management_port: 0,
    }
}

/// A UDP socket standing in for a backend StatsD daemon.
pub async fn create_backend_socket() -> (UdpSocket, u16) {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let port = socket.local_addr().unwrap().port();
    (socket, port)
}

pub async fn receive_within(socket: &UdpSocket, wait: Duration) -> Option<Vec<u8>> {
    let mut buffer = [0u8; 1024];
    match tokio::time::timeout(wait, socket.recv_from(&mut buffer)).await {
        Ok(Ok((length, _))) => Some(buffer[..length].to_vec()),
        _ => None
    }
}

pub async fn start_test_proxy(config: Configuration) -> (ProxyServer, watch::Sender<bool>) {
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let server = ProxyServer::start(Arc::new(config), shutdown_rx).await.unwrap();
    (server, shutdown_tx)
}

pub async fn send_to_proxy(server: &ProxyServer, payload: &[u8]) {
    let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    client.send_to(payload, server.local_addr()).await.unwrap();
}

/// Polls `condition` until it holds or two seconds have passed.
pub async fn eventually<F: Fn() -> bool>(condition: F) -> bool {
    for _ in 0..200 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}

/// A liveness probe whose answer is flipped by the test.
#[derive(Debug, Default)]
pub struct SwitchProbe {
    pub up: AtomicBool,
}

impl SwitchProbe {
    pub fn new(up: bool) -> Arc<SwitchProbe> {
        Arc::new(SwitchProbe { up: AtomicBool::new(up) })
    }

    pub fn set(&self, up: bool) {
        self.up.store(up, Ordering::SeqCst);
    }
}

#[async_trait]
impl LivenessProbe for SwitchProbe {
    async fn probe(&self) -> Result<(), BackendError> {
        if self.up.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(BackendError::Unhealthy(String::from("health: down")))
        }
    }
}
