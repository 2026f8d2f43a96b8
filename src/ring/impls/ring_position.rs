use std::fmt;
use md5::{Digest, Md5};
use crate::ring::structs::ring_position::RingPosition;

impl RingPosition {
    pub fn of(key: &str) -> RingPosition {
        let digest = Md5::digest(key.as_bytes());
        RingPosition(u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]]))
    }
}

impl From<u32> for RingPosition {
    fn from(position: u32) -> Self {
        RingPosition(position)
    }
}

impl fmt::Display for RingPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
