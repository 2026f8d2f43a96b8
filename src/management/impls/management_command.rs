use crate::management::enums::management_command::ManagementCommand;

impl ManagementCommand {
    /// Parses one console line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<ManagementCommand> {
        let command = line.trim();
        if command.is_empty() {
            return None;
        }
        Some(match command {
            "health" => ManagementCommand::Health,
            "stats" => ManagementCommand::Stats,
            "backends" => ManagementCommand::Backends,
            "mirror" => ManagementCommand::Mirror,
            "help" => ManagementCommand::Help,
            "quit" => ManagementCommand::Quit,
            other => ManagementCommand::Unknown(other.to_string())
        })
    }
}
