// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PropcopError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("grammar error: {0}")]
    Grammar(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, PropcopError>;

impl From<toml::de::Error> for PropcopError {
    fn from(e: toml::de::Error) -> Self {
        PropcopError::Config(e.to_string())
    }
}
