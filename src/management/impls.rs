/// Command parsing.
pub mod management_command;

/// Connection handling and replies.
pub mod management_console;
