/// The StatsD metric type token.
pub mod metric_type;

/// Reasons a line is rejected.
pub mod metric_parse_error;
