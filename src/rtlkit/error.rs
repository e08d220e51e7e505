use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RtlkitError {
    #[error("Text is not valid UTF-8 (valid up to byte {valid_up_to})")]
    Encoding { valid_up_to: usize },

    #[error("Cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8 (valid up to byte {valid_up_to})", path.display())]
    Decoding { path: PathBuf, valid_up_to: usize },

    #[error("Invalid pattern: {0}")]
    Pattern(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<regex::Error> for RtlkitError {
    fn from(err: regex::Error) -> Self {
        RtlkitError::Pattern(err.to_string())
    }
}

impl From<globset::Error> for RtlkitError {
    fn from(err: globset::Error) -> Self {
        RtlkitError::Pattern(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RtlkitError>;
