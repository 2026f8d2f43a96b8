/// One parsed metric line.
pub mod metric_sample;
