use thiserror::Error;

/// Failures of a lookup against the read-only filesystem tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VfsError {
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("Not a file: {0}")]
    NotAFile(String),
}

/// Everything a command handler can fail with.
///
/// None of these escape the dispatcher: `run_command` turns each one into an
/// error-toned [`Renderable`](crate::render::Renderable).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Command not found: {0}. Type 'help' for available commands.")]
    UnknownVerb(String),

    #[error("Unknown {scope} command: {value}")]
    UnknownSubcommand { scope: &'static str, value: String },

    #[error("{usage}")]
    MissingSubcommand { usage: &'static str },

    #[error("{usage}")]
    MissingArgument { usage: &'static str },

    #[error("{0}")]
    Invalid(String),

    #[error(transparent)]
    Vfs(#[from] VfsError),
}

impl CommandError {
    pub fn unknown(scope: &'static str, value: impl Into<String>) -> Self {
        CommandError::UnknownSubcommand { scope, value: value.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unable to read configuration: {0}")]
    Io(#[from] std::io::Error),
}
