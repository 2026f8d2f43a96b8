use crate::metric::enums::metric_type::MetricType;

/// A metric line accepted by the parser.
///
/// `raw` holds the exact bytes of the line as they arrived; the relay forwards
/// those bytes and never the parsed fields.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSample {
    pub name: String,
    pub value: f64,
    pub metric_type: MetricType,
    pub sample_rate: Option<f64>,
    pub raw: Vec<u8>,
}
