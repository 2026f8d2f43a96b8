pub mod ring_position;
pub mod hash_ring;
