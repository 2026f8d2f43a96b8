use std::sync::Arc;
use crate::backend::structs::statsd_backend::StatsdBackend;
use crate::ring::enums::ring_error::RingError;
use crate::ring::ring::MAX_RING_SIZE;
use crate::ring::structs::hash_ring::HashRing;
use crate::ring::structs::ring_position::RingPosition;

impl HashRing {
    pub fn new(mirror: bool) -> HashRing {
        HashRing {
            backends: Vec::with_capacity(MAX_RING_SIZE),
            mirror,
        }
    }

    /// Adds an alive backend, keeping the sequence sorted by ring position.
    pub fn add(&mut self, backend: Arc<StatsdBackend>) -> Result<(), RingError> {
        if !backend.is_alive() {
            return Err(RingError::BackendUnavailable(backend.key()));
        }
        if self.backends.iter().any(|member| member.host == backend.host && member.port == backend.port) {
            return Err(RingError::DuplicateBackend(backend.key()));
        }
        let index = self.backends.partition_point(|member| member.ring_position <= backend.ring_position);
        self.backends.insert(index, backend);
        Ok(())
    }

    pub fn position_of(key: &str) -> RingPosition {
        RingPosition::of(key)
    }

    /// Returns the backends responsible for `name`: every member in mirror
    /// mode, otherwise the nearest alive backend clockwise.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn resolve_metric(&self, name: &str) -> Result<&[Arc<StatsdBackend>], RingError> {
        if self.backends.is_empty() {
            return Err(RingError::EmptyRing);
        }
        if self.mirror {
            return Ok(&self.backends);
        }
        self.resolve_position(RingPosition::of(name))
    }

    pub fn resolve_position(&self, id: RingPosition) -> Result<&[Arc<StatsdBackend>], RingError> {
        let start = self.backends.partition_point(|member| member.ring_position <= id);
        let index = (start..self.backends.len())
            .chain(0..start)
            .find(|&index| self.backends[index].is_alive())
            .ok_or(RingError::EmptyRing)?;
        Ok(std::slice::from_ref(&self.backends[index]))
    }

    pub fn backends(&self) -> &[Arc<StatsdBackend>] {
        &self.backends
    }

    pub fn len(&self) -> usize {
        self.backends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    pub fn is_mirror(&self) -> bool {
        self.mirror
    }

    pub fn alive_count(&self) -> usize {
        self.backends.iter().filter(|member| member.is_alive()).count()
    }
}
