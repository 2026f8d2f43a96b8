/// Transport and probe failures.
pub mod backend_error;
