/// A 32-bit position on the ring.
pub mod ring_position;

/// The ordered backend sequence.
pub mod hash_ring;
