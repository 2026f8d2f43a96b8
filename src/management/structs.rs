/// Shared state the console reports on.
pub mod management_console;
