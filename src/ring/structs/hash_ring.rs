use std::sync::Arc;
use crate::backend::structs::statsd_backend::StatsdBackend;

/// Backends ordered by ascending ring position.
#[derive(Debug)]
pub struct HashRing {
    pub(crate) backends: Vec<Arc<StatsdBackend>>,
    pub(crate) mirror: bool,
}
