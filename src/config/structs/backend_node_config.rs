use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BackendNodeConfig {
    pub host: String,
    pub port: u16,
    #[serde(alias = "managementPort", alias = "managementport", alias = "adminport", alias = "adminPort")]
    pub management_port: u16,
}
