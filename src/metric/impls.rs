pub mod metric_type;
pub mod metric_sample;
