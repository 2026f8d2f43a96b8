use std::net::{SocketAddr, ToSocketAddrs};
use fern::colors::{Color, ColoredLevelConfig};
use log::{info, warn};
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

pub fn parse_log_level(level: &str) -> Option<log::LevelFilter> {
    match level {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), CustomError>
{
    let level = match parse_log_level(config.log_level.as_str()) {
        Some(level) => level,
        None => {
            return Err(CustomError::new(&format!("Unknown log level encountered: '{}'", config.log_level)));
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(error) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
    {
        return Err(CustomError::new(&format!("Failed to initialize logging: {error}")));
    }
    info!("logging initialized.");
    Ok(())
}

/// Returns `host`, or the local hostname when `host` is empty.
pub fn resolve_host(host: &str) -> String {
    if !host.is_empty() {
        return host.to_string();
    }
    match hostname::get() {
        Ok(name) => name.to_string_lossy().to_string(),
        Err(error) => {
            warn!("[BOOT] Unable to read the local hostname ({error}), falling back to localhost");
            String::from("localhost")
        }
    }
}

/// Resolves `host:port` to the first socket address it maps to.
pub fn resolve_socket_address(host: &str, port: u16) -> Result<SocketAddr, CustomError> {
    let mut addresses = match (host, port).to_socket_addrs() {
        Ok(addresses) => addresses,
        Err(error) => {
            return Err(CustomError::new(&format!("unable to resolve {host}:{port}: {error}")));
        }
    };
    match addresses.next() {
        Some(address) => Ok(address),
        None => Err(CustomError::new(&format!("{host}:{port} did not resolve to any address")))
    }
}
