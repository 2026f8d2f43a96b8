use crate::metric::enums::metric_parse_error::MetricParseError;
use crate::metric::enums::metric_type::MetricType;
use crate::metric::structs::metric_sample::MetricSample;

impl MetricSample {
    /// Parses one `name:value|type[@rate]` line.
    pub fn parse(line: &str) -> Result<MetricSample, MetricParseError> {
        let (name, remainder) = match line.split_once(':') {
            Some(split) => split,
            None => return Err(MetricParseError::MissingValue(line.to_string()))
        };
        if name.is_empty() {
            return Err(MetricParseError::EmptyName(line.to_string()));
        }

        let mut segments = remainder.split('|');
        let value_field = segments.next().unwrap_or_default();
        let type_field = match segments.next() {
            Some(field) => field,
            None => return Err(MetricParseError::MissingType(line.to_string()))
        };

        let value = match value_field.parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => return Err(MetricParseError::InvalidValue(line.to_string()))
        };

        // The rate may be glued to the type ("c@0.1") or sit in its own segment ("c|@0.1").
        let (type_token, inline_rate) = match type_field.split_once('@') {
            Some((token, rate)) => (token, Some(rate)),
            None => (type_field, None)
        };
        let metric_type = match MetricType::from_token(type_token) {
            Some(metric_type) => metric_type,
            None => return Err(MetricParseError::UnknownType(type_token.to_string()))
        };
        let rate_field = inline_rate.or_else(|| segments.find_map(|segment| segment.strip_prefix('@')));
        let sample_rate = rate_field
            .and_then(|rate| rate.parse::<f64>().ok())
            .filter(|rate| rate.is_finite());

        Ok(MetricSample {
            name: name.to_string(),
            value,
            metric_type,
            sample_rate,
            raw: line.as_bytes().to_vec(),
        })
    }

    /// Parses one line taken straight from a datagram.
    pub fn from_bytes(line: &[u8]) -> Result<MetricSample, MetricParseError> {
        match std::str::from_utf8(line) {
            Ok(line) => Self::parse(line),
            Err(_) => Err(MetricParseError::InvalidEncoding)
        }
    }
}
