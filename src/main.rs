use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use log::{error, info};
use tokio::runtime::Builder;
use statsd_proxy::common::common::setup_logging;
use statsd_proxy::config::structs::configuration::Configuration;
use statsd_proxy::proxy::proxy::run_proxy;
use statsd_proxy::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("{e}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
            let mut proxy = tokio::spawn(run_proxy(config.clone(), shutdown_rx));

            let finished = tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");
                    let _ = shutdown_tx.send(true);
                    None
                }
                result = &mut proxy => Some(result)
            };
            let result = match finished {
                Some(result) => result,
                None => proxy.await
            };
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    error!("[BOOT] {e}");
                    exit(1);
                }
                Err(e) => {
                    error!("[BOOT] Proxy task failed: {e}");
                    exit(1);
                }
            }
            info!("Server shutting down completed");
            Ok(())
        })
}
