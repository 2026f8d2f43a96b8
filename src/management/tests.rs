#[cfg(test)]
mod management_tests {
    use std::sync::Arc;
    use crate::backend::structs::statsd_backend::StatsdBackend;
    use crate::management::structs::management_console::ManagementConsole;
    use crate::ring::structs::hash_ring::HashRing;
    use crate::stats::structs::stats_atomics::StatsAtomics;

    async fn console(mirror: bool) -> ManagementConsole {
        let mut ring = HashRing::new(mirror);
        for port in [8126, 8127] {
            let backend = StatsdBackend::new("127.0.0.1", port, 0, 1000).unwrap();
            backend.check_liveness().await;
            ring.add(Arc::new(backend)).unwrap();
        }
        ManagementConsole::new(Arc::new(ring), Arc::new(StatsAtomics::new()))
    }

    mod management_command_tests {
        use crate::management::enums::management_command::ManagementCommand;

        #[test]
        fn test_parse_known_commands() {
            assert_eq!(ManagementCommand::parse("health"), Some(ManagementCommand::Health));
            assert_eq!(ManagementCommand::parse("stats\r\n"), Some(ManagementCommand::Stats));
            assert_eq!(ManagementCommand::parse("  backends "), Some(ManagementCommand::Backends));
            assert_eq!(ManagementCommand::parse("mirror"), Some(ManagementCommand::Mirror));
            assert_eq!(ManagementCommand::parse("help"), Some(ManagementCommand::Help));
            assert_eq!(ManagementCommand::parse("quit"), Some(ManagementCommand::Quit));
        }

        #[test]
        fn test_parse_blank_and_unknown() {
            assert_eq!(ManagementCommand::parse(""), None);
            assert_eq!(ManagementCommand::parse("   "), None);
            assert_eq!(ManagementCommand::parse("reload"), Some(ManagementCommand::Unknown(String::from("reload"))));
        }
    }

    mod management_console_tests {
        use std::sync::Arc;
        use std::time::Duration;
        use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
        use tokio::net::TcpStream;
        use tokio::sync::watch;
        use crate::backend::structs::management_probe::ManagementProbe;
        use crate::backend::traits::liveness_probe::LivenessProbe;
        use crate::management::enums::management_command::ManagementCommand;
        use crate::management::management::{management_service, MAX_COMMAND_LENGTH};
        use crate::stats::enums::stats_event::StatsEvent;
        use crate::stats::structs::stats::Stats;
        use super::console;

        #[tokio::test]
        async fn test_respond_health_and_mirror() {
            let console = console(true).await;
            assert_eq!(console.respond(&ManagementCommand::Health).unwrap(), "health: up\n");
            assert_eq!(console.respond(&ManagementCommand::Mirror).unwrap(), "mirror: true\n");
            assert_eq!(console.respond(&ManagementCommand::Quit), None);
        }

        #[tokio::test]
        async fn test_respond_unknown_command() {
            let console = console(false).await;
            let reply = console.respond(&ManagementCommand::Unknown(String::from("reload"))).unwrap();
            assert_eq!(reply, "ERROR: unknown command 'reload'\n");
        }

        #[tokio::test]
        async fn test_respond_backends_listing() {
            let console = console(false).await;
            let reply = console.respond(&ManagementCommand::Backends).unwrap();
            let lines: Vec<&str> = reply.lines().collect();
            assert_eq!(lines.len(), 3);
            assert_eq!(lines[2], "END");
            assert!(lines.iter().any(|line| line.starts_with("127.0.0.1:8126 position=") && line.ends_with("alive=true")));
            assert!(lines.iter().any(|line| line.starts_with("127.0.0.1:8127 position=")));
        }

        #[tokio::test]
        async fn test_respond_stats_is_json() {
            let console = console(false).await;
            console.stats.update_stats(StatsEvent::MetricsRelayed, 4);
            let reply = console.respond(&ManagementCommand::Stats).unwrap();
            assert!(reply.ends_with('\n'));
            let stats: Stats = serde_json::from_str(reply.trim_end()).unwrap();
            assert_eq!(stats.metrics_relayed, 4);
        }

        #[tokio::test]
        async fn test_console_over_tcp() {
            let console = Arc::new(console(false).await);
            let (shutdown_tx, shutdown_rx) = watch::channel(false);
            let (addr, handle) = management_service("127.0.0.1:0".parse().unwrap(), console, shutdown_rx).await.unwrap();

            let stream = TcpStream::connect(addr).await.unwrap();
            let (reader, mut writer) = stream.into_split();
            let mut lines = BufReader::new(reader).lines();

            writer.write_all(b"health\nmirror\nbogus\nquit\n").await.unwrap();
            assert_eq!(lines.next_line().await.unwrap().unwrap(), "health: up");
            assert_eq!(lines.next_line().await.unwrap().unwrap(), "mirror: false");
            assert_eq!(lines.next_line().await.unwrap().unwrap(), "ERROR: unknown command 'bogus'");
            let closed = tokio::time::timeout(Duration::from_secs(2), lines.next_line()).await.unwrap().unwrap();
            assert_eq!(closed, None, "quit closes the connection");

            shutdown_tx.send(true).unwrap();
            handle.await.unwrap();
        }

        #[tokio::test]
        async fn test_console_closes_on_overlong_line() {
            let console = Arc::new(console(false).await);
            let (_shutdown_tx, shutdown_rx) = watch::channel(false);
            let (addr, _handle) = management_service("127.0.0.1:0".parse().unwrap(), console, shutdown_rx).await.unwrap();

            let mut stream = TcpStream::connect(addr).await.unwrap();
            stream.write_all(&vec![b'a'; MAX_COMMAND_LENGTH + 44]).await.unwrap();

            let mut reply = Vec::new();
            tokio::time::timeout(Duration::from_secs(2), stream.read_to_end(&mut reply)).await.unwrap().unwrap();
            assert_eq!(reply, b"ERROR: command too long\n".to_vec());
        }

        #[tokio::test]
        async fn test_console_accepts_line_at_limit() {
            let console = Arc::new(console(false).await);
            let (_shutdown_tx, shutdown_rx) = watch::channel(false);
            let (addr, _handle) = management_service("127.0.0.1:0".parse().unwrap(), console, shutdown_rx).await.unwrap();

            let stream = TcpStream::connect(addr).await.unwrap();
            let (reader, mut writer) = stream.into_split();
            let mut lines = BufReader::new(reader).lines();

            let mut padded = format!("{:<width$}", "health", width = MAX_COMMAND_LENGTH - 1).into_bytes();
            padded.push(b'\n');
            writer.write_all(&padded).await.unwrap();
            writer.write_all(b"mirror\n").await.unwrap();
            assert_eq!(lines.next_line().await.unwrap().unwrap(), "health: up");
            assert_eq!(lines.next_line().await.unwrap().unwrap(), "mirror: false");
        }

        #[tokio::test]
        async fn test_console_answers_management_probe() {
            let console = Arc::new(console(false).await);
            let (_shutdown_tx, shutdown_rx) = watch::channel(false);
            let (addr, _handle) = management_service("127.0.0.1:0".parse().unwrap(), console, shutdown_rx).await.unwrap();

            let probe = ManagementProbe::new("127.0.0.1", addr.port(), Duration::from_secs(2));
            assert!(probe.probe().await.is_ok());
        }
    }
}
