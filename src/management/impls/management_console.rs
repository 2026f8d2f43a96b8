use std::fmt::Write;
use std::sync::Arc;
use log::{debug, info, warn};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::watch;
use crate::backend::backend::HEALTHY_REPLY;
use crate::management::enums::management_command::ManagementCommand;
use crate::management::management::{END_MARKER, HELP_TEXT, MAX_COMMAND_LENGTH};
use crate::management::structs::management_console::ManagementConsole;
use crate::ring::structs::hash_ring::HashRing;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl ManagementConsole {
    pub fn new(ring: Arc<HashRing>, stats: Arc<StatsAtomics>) -> ManagementConsole {
        ManagementConsole { ring, stats }
    }

    /// Builds the reply to `command`, newline terminated. `quit` has none.
    pub fn respond(&self, command: &ManagementCommand) -> Option<String> {
        let reply = match command {
            ManagementCommand::Health => format!("{HEALTHY_REPLY}\n"),
            ManagementCommand::Stats => match serde_json::to_string(&self.stats.get_stats()) {
                Ok(json) => format!("{json}\n"),
                Err(error) => format!("ERROR: {error}\n")
            },
            ManagementCommand::Backends => {
                let mut reply = String::new();
                for backend in self.ring.backends() {
                    let _ = writeln!(reply, "{} position={} alive={}", backend.key(), backend.ring_position(), backend.is_alive());
                }
                reply.push_str(END_MARKER);
                reply.push('\n');
                reply
            }
            ManagementCommand::Mirror => format!("mirror: {}\n", self.ring.is_mirror()),
            ManagementCommand::Help => format!("{HELP_TEXT}\n"),
            ManagementCommand::Quit => return None,
            ManagementCommand::Unknown(command) => format!("ERROR: unknown command '{command}'\n"),
        };
        Some(reply)
    }

    pub async fn start(self: Arc<Self>, listener: TcpListener, mut rx: watch::Receiver<bool>)
    {
        loop {
            tokio::select! {
                _ = rx.changed() => {
                    info!("[MANAGEMENT] Shutting down management console...");
                    return;
                }
                accepted = listener.accept() => {
                    match accepted {
                        Ok((stream, remote_addr)) => {
                            debug!("[MANAGEMENT] Connection from {remote_addr}");
                            let console = self.clone();
                            let rx = rx.clone();
                            tokio::spawn(async move {
                                if let Err(error) = console.handle_connection(stream, rx).await {
                                    debug!("[MANAGEMENT] Connection from {remote_addr} failed: {error}");
                                }
                            });
                        }
                        Err(error) => {
                            warn!("[MANAGEMENT] Failed to accept a connection: {error}");
                        }
                    }
                }
            }
        }
    }

    /// Answers commands on `stream` until `quit`, EOF or shutdown.
    ///
    /// A line longer than `MAX_COMMAND_LENGTH` closes the connection.
    pub async fn handle_connection(&self, stream: TcpStream, mut rx: watch::Receiver<bool>) -> std::io::Result<()>
    {
        let (reader, mut writer) = stream.into_split();
        let mut reader = BufReader::new(reader);
        let mut line = String::new();
        loop {
            line.clear();
            let mut limited = (&mut reader).take(MAX_COMMAND_LENGTH as u64);
            let read = tokio::select! {
                _ = rx.changed() => return Ok(()),
                read = limited.read_line(&mut line) => read?,
            };
            if read == 0 {
                return Ok(());
            }
            if read >= MAX_COMMAND_LENGTH && !line.ends_with('\n') {
                debug!("[MANAGEMENT] Closing connection after a line of more than {MAX_COMMAND_LENGTH} bytes");
                writer.write_all(b"ERROR: command too long\n").await?;
                writer.shutdown().await?;
                return Ok(());
            }
            let Some(command) = ManagementCommand::parse(&line) else {
                continue;
            };
            match self.respond(&command) {
                Some(reply) => writer.write_all(reply.as_bytes()).await?,
                None => {
                    writer.shutdown().await?;
                    return Ok(());
                }
            }
        }
    }
}
