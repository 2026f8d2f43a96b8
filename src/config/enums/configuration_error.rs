#[derive(Debug)]
pub enum ConfigurationError {
    IOError(std::io::Error),
    ParseError(toml::de::Error),
    JsonError(serde_json::Error),
    ValidationError(String),
}
