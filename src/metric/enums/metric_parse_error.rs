use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricParseError {
    #[error("Malformed metric, missing ':' separator: {0}")]
    MissingValue(String),

    #[error("Malformed metric, empty name: {0}")]
    EmptyName(String),

    #[error("Malformed metric, missing '|' type separator: {0}")]
    MissingType(String),

    #[error("Malformed metric, value is not a number: {0}")]
    InvalidValue(String),

    #[error("Unknown metrics type: {0}")]
    UnknownType(String),

    #[error("Malformed metric, line is not valid UTF-8")]
    InvalidEncoding,
}
