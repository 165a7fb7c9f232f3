// SPDX-License-Identifier: MPL-2.0
use resvg::usvg;
use std::fmt;

/// Crate-wide error.
///
/// Payloads are plain strings so the error can travel inside `Message`s,
/// which must be `Clone`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    /// A CSV file could not be read or parsed.
    Csv(String),
    /// The preview document could not be parsed or rasterized.
    Render(String),
    /// A remote asset could not be fetched.
    Network(String),
}

impl Error {
    /// Returns the i18n message key used when this error is shown to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Csv(_) => "error-csv",
            Error::Render(_) => "error-render",
            Error::Network(_) => "error-network",
        }
    }

    /// The underlying message without the category prefix.
    pub fn detail(&self) -> &str {
        match self {
            Error::Io(e)
            | Error::Config(e)
            | Error::Csv(e)
            | Error::Render(e)
            | Error::Network(e) => e,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Csv(e) => write!(f, "CSV Error: {}", e),
            Error::Render(e) => write!(f, "Render Error: {}", e),
            Error::Network(e) => write!(f, "Network Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

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

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        match err.kind() {
            csv::ErrorKind::Io(_) => Error::Io(err.to_string()),
            _ => Error::Csv(err.to_string()),
        }
    }
}

impl From<usvg::Error> for Error {
    fn from(err: usvg::Error) -> Self {
        Error::Render(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Render(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
