#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManagementCommand {
    Health,
    Stats,
    Backends,
    Mirror,
    Help,
    Quit,
    Unknown(String),
}
