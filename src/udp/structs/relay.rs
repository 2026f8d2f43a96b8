use std::sync::Arc;
use crate::ring::structs::hash_ring::HashRing;
use crate::stats::structs::stats_atomics::StatsAtomics;

#[derive(Debug)]
pub struct Relay {
    pub(crate) ring: Arc<HashRing>,
    pub(crate) stats: Arc<StatsAtomics>,
}
