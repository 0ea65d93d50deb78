use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid integer {token:?} on line {line}")]
    InvalidInteger { token: String, line: usize },

    #[error("Input ended before a negative sentinel ({count} values read)")]
    UnexpectedEof { count: u64 },

    #[error("Running sum overflowed")]
    Overflow,

    #[error("Failed to parse config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
