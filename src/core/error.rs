use std::fmt;

/// Comprehensive error types for runlog operations
#[derive(Debug)]
pub enum RunlogError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Log line grammar error
    Grammar(String),

    /// Regex compilation error
    Regex(regex::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// File not found error
    FileNotFound(String),

    /// Invalid argument error
    InvalidArgument(String),

    /// File walking/ignore error
    FileWalking(ignore::Error),
}

impl fmt::Display for RunlogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunlogError::Io(err) => write!(f, "IO error: {err}"),
            RunlogError::Config(msg) => write!(f, "Configuration error: {msg}"),
            RunlogError::Grammar(msg) => write!(f, "Grammar error: {msg}"),
            RunlogError::Regex(err) => write!(f, "Regex error: {err}"),
            RunlogError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            RunlogError::FileNotFound(path) => write!(f, "File not found: {path}"),
            RunlogError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            RunlogError::FileWalking(err) => write!(f, "File walking error: {err}"),
        }
    }
}

impl std::error::Error for RunlogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunlogError::Io(err) => Some(err),
            RunlogError::Regex(err) => Some(err),
            RunlogError::TomlParsing(err) => Some(err),
            RunlogError::FileWalking(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RunlogError {
    fn from(err: std::io::Error) -> Self {
        RunlogError::Io(err)
    }
}

impl From<regex::Error> for RunlogError {
    fn from(err: regex::Error) -> Self {
        RunlogError::Regex(err)
    }
}

impl From<toml::de::Error> for RunlogError {
    fn from(err: toml::de::Error) -> Self {
        RunlogError::TomlParsing(err)
    }
}

impl From<ignore::Error> for RunlogError {
    fn from(err: ignore::Error) -> Self {
        RunlogError::FileWalking(err)
    }
}

/// Type alias for Results using RunlogError
pub type Result<T> = std::result::Result<T, RunlogError>;
