// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Image(String),
}

/// Reasons the catalog manifest could not be turned into a list of entries.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The request never produced a response (DNS, connection refused, TLS...).
    Transport(String),

    /// The server answered with a non-success status code.
    HttpStatus(u16),

    /// The local manifest file could not be read.
    Io(String),

    /// The body is not valid JSON, or an entry has the wrong shape.
    Malformed(String),

    /// The body is valid JSON but the top-level value is not an array.
    NotAnArray,
}

impl CatalogError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CatalogError::Transport(_) => "error-catalog-transport",
            CatalogError::HttpStatus(_) => "error-catalog-http-status",
            CatalogError::Io(_) => "error-catalog-io",
            CatalogError::Malformed(_) => "error-catalog-malformed",
            CatalogError::NotAnArray => "error-catalog-not-an-array",
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Transport(msg) => write!(f, "Request failed: {msg}"),
            CatalogError::HttpStatus(code) => write!(f, "HTTP {code}"),
            CatalogError::Io(msg) => write!(f, "I/O error: {msg}"),
            CatalogError::Malformed(msg) => write!(f, "Malformed manifest: {msg}"),
            CatalogError::NotAnArray => write!(f, "Manifest is not a JSON array"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {e}"),
            Error::Config(e) => write!(f, "Config Error: {e}"),
            Error::Image(e) => write!(f, "Image Error: {e}"),
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

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
