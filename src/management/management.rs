use std::net::SocketAddr;
use std::sync::Arc;
use log::info;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use crate::management::structs::management_console::ManagementConsole;

pub const HELP_TEXT: &str = "commands: health, stats, backends, mirror, help, quit";

/// Longest accepted command line, newline included.
pub const MAX_COMMAND_LENGTH: usize = 256;

/// Terminates the `backends` listing.
pub const END_MARKER: &str = "END";

/// Binds the console on `addr` and spawns its accept loop.
pub async fn management_service(addr: SocketAddr, console: Arc<ManagementConsole>, rx: watch::Receiver<bool>) -> std::io::Result<(SocketAddr, JoinHandle<()>)>
{
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    info!("[MANAGEMENT] Starting management console on {local_addr}");
    let handle = tokio::spawn(async move {
        console.start(listener, rx).await;
    });
    Ok((local_addr, handle))
}
