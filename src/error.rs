// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Color(ColorError),
}

/// Reasons a color string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input was empty or whitespace only.
    Empty,

    /// Input did not start with `#`.
    MissingHash,

    /// Digit count after `#` was not 3, 4, 6 or 8.
    InvalidLength(usize),

    /// A character after `#` was not a hexadecimal digit.
    InvalidDigit(char),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::Empty => write!(f, "Color is empty"),
            ColorError::MissingHash => write!(f, "Color must start with '#'"),
            ColorError::InvalidLength(len) => {
                write!(f, "Color has {} hex digits, expected 3, 4, 6 or 8", len)
            }
            ColorError::InvalidDigit(c) => write!(f, "Invalid hex digit: {:?}", c),
        }
    }
}

impl std::error::Error for ColorError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Color(e) => write!(f, "Color Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ColorError> for Error {
    fn from(err: ColorError) -> Self {
        Error::Color(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
