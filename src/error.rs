//! Skein errors

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// some size mismatch (e.g. for keys, tweaks or blocks)
    SizeMismatch(String),
    /// error due to wrong user input
    InputError(String),
    /// IoError
    IoError(String),
    /// configuration could not be loaded
    ConfigError(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::SizeMismatch(msg) => write!(f, "Size mismatch: {}", msg),
            Error::InputError(msg) => write!(f, "Input error: {}", msg),
            Error::IoError(msg) => write!(f, "IO error: {}", msg),
            Error::ConfigError(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::convert::From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::IoError(e.to_string())
    }
}

impl std::convert::From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        Error::InputError(e.to_string())
    }
}

impl std::convert::From<config::ConfigError> for Error {
    fn from(e: config::ConfigError) -> Self {
        Error::ConfigError(e.to_string())
    }
}
