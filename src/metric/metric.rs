use crate::metric::enums::metric_parse_error::MetricParseError;
use crate::metric::structs::metric_sample::MetricSample;

pub const LINE_SEPARATOR: u8 = b'\n';

pub fn parse_line(line: &str) -> Result<MetricSample, MetricParseError> {
    MetricSample::parse(line)
}

/// Splits a datagram into its metric lines, in order. Empty lines are skipped.
pub fn split_lines(datagram: &[u8]) -> impl Iterator<Item = &[u8]> {
    datagram
        .split(|byte| *byte == LINE_SEPARATOR)
        .filter(|line| !line.is_empty())
}
