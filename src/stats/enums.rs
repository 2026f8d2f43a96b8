/// Events that update a counter or gauge.
pub mod stats_event;
