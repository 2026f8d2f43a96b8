use std::fmt;
use crate::metric::enums::metric_type::MetricType;

impl MetricType {
    pub fn from_token(token: &str) -> Option<MetricType> {
        match token {
            "c" => Some(MetricType::Counter),
            "ms" => Some(MetricType::Timer),
            "g" => Some(MetricType::Gauge),
            "h" => Some(MetricType::Histogram),
            "s" => Some(MetricType::Set),
            _ => None
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            MetricType::Counter => "c",
            MetricType::Timer => "ms",
            MetricType::Gauge => "g",
            MetricType::Histogram => "h",
            MetricType::Set => "s",
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
