//! Common data structures.

/// Free-form error carrying only a message.
pub mod custom_error;
