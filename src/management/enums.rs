/// Commands understood by the console.
pub mod management_command;
