use std::fs::File;
use std::io::Write;
use std::path::Path;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::backend_node_config::BackendNodeConfig;
use crate::config::structs::configuration::Configuration;
use crate::udp::udp::{DEFAULT_QUEUE_SIZE, DEFAULT_WORKER_COUNT};

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}

impl Configuration {
    /// Defaults applied to every key missing from a configuration file.
    ///
    /// Hosts are left empty so they resolve to the local hostname, and no
    /// backends are assumed.
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            host: String::new(),
            port: 8125,
            management_host: String::new(),
            management_port: 8135,
            check_interval: 1000,
            mirror: false,
            worker_threads: DEFAULT_WORKER_COUNT,
            queue_size: DEFAULT_QUEUE_SIZE,
            receive_buffer_size: 0,
            nodes: Vec::new(),
        }
    }

    /// The file written by `--create-config`, with sample backends to edit.
    pub fn template() -> Configuration {
        Configuration {
            host: String::from("0.0.0.0"),
            management_host: String::from("127.0.0.1"),
            nodes: vec!(
                BackendNodeConfig {
                    host: String::from("127.0.0.1"),
                    port: 8126,
                    management_port: 8136,
                },
                BackendNodeConfig {
                    host: String::from("127.0.0.1"),
                    port: 8127,
                    management_port: 8137,
                }
            ),
            ..Configuration::init()
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_json(data: &[u8]) -> Result<Configuration, serde_json::Error> {
        serde_json::from_slice(data)
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path).map_err(ConfigurationError::IOError)?;
        let is_json = Path::new(path)
            .extension()
            .map(|extension| extension.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json {
            Self::load_json(data.as_slice()).map_err(ConfigurationError::JsonError)
        } else {
            Self::load(data.as_slice()).map_err(ConfigurationError::ParseError)
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create {path} automatically")));
                }
                eprintln!("Creating config file..");

                let config_toml = match toml::to_string(&Configuration::template()) {
                    Ok(data) => data,
                    Err(e) => {
                        return Err(CustomError::new(&format!("could not serialize the default configuration: {e}")));
                    }
                };
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and start again, exiting now...");
                        Err(CustomError::new(&format!("created {path}")))
                    }
                    Err(e) => {
                        eprintln!("{path} could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path}")))
                    }
                };
            }
        };

        if let Err(error) = config.validate() {
            eprintln!("[VALIDATE] {error}");
            return Err(CustomError::new(&error.to_string()));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if parse_log_level(&self.log_level).is_none() {
            return Err(ConfigurationError::ValidationError(format!("unknown log_level '{}'", self.log_level)));
        }
        if self.port == 0 {
            return Err(ConfigurationError::ValidationError(String::from("port must not be 0")));
        }
        if self.check_interval == 0 {
            return Err(ConfigurationError::ValidationError(String::from("check_interval must be greater than 0")));
        }
        if self.worker_threads == 0 {
            return Err(ConfigurationError::ValidationError(String::from("worker_threads must be greater than 0")));
        }
        if self.queue_size == 0 {
            return Err(ConfigurationError::ValidationError(String::from("queue_size must be greater than 0")));
        }
        for (index, node) in self.nodes.iter().enumerate() {
            if node.port == 0 {
                return Err(ConfigurationError::ValidationError(format!("nodes[{index}] ({}) has no port", node.host)));
            }
        }
        Ok(())
    }
}
