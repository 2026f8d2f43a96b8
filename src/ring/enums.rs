/// Errors raised by ring membership and lookups.
pub mod ring_error;
