/// Liveness probe trait definition.
pub mod liveness_probe;
