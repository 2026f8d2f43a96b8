use crate::config::structs::backend_node_config::BackendNodeConfig;

impl Default for BackendNodeConfig {
    fn default() -> Self {
        BackendNodeConfig {
            host: String::new(),
            port: 0,
            management_port: 0,
        }
    }
}
