/// Expected upper bound of ring members, used to size the backend sequence.
pub const MAX_RING_SIZE: usize = 50;
