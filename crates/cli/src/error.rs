use scriptboard_core::CoreError;

/// A command line the session could not act on.
///
/// The snapshot is left unchanged whenever one of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// A domain-level parse failure (field path, direction, vocabulary).
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Unknown command '{0}'. Type 'help' for a list of commands")]
    UnknownCommand(String),

    #[error("'{command}' needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("Invalid argument for '{command}': {message}")]
    InvalidArgument {
        command: &'static str,
        message: String,
    },
}

/// Startup and I/O failures of the binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
