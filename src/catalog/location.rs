// SPDX-License-Identifier: MPL-2.0
//! Resource locations for the manifest and the image directory.
//!
//! A location is either a remote `http(s)` URL or a local path. Both the
//! manifest and the slide images go through [`fetch`], so the app works the
//! same against a static web host or a folder on disk.

use crate::error::CatalogError;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

const USER_AGENT: &str = concat!("Swatchbook/", env!("CARGO_PKG_VERSION"));

static HTTP_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    Remote(String),
    Local(PathBuf),
}

impl Location {
    /// Interprets `raw` as a URL when it carries an `http://` or `https://`
    /// scheme, and as a filesystem path otherwise.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Location::Remote(trimmed.to_string())
        } else {
            Location::Local(PathBuf::from(trimmed))
        }
    }

    /// Resolves `file` relative to this location (`<base>/<file>`).
    #[must_use]
    pub fn join(&self, file: &str) -> Self {
        match self {
            Location::Remote(base) => {
                let base = base.trim_end_matches('/');
                let file = file.trim_start_matches('/');
                Location::Remote(format!("{base}/{file}"))
            }
            Location::Local(base) => Location::Local(base.join(file)),
        }
    }

    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Location::Remote(_))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Remote(url) => write!(f, "{url}"),
            Location::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Failure to retrieve the raw bytes behind a [`Location`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    Transport(String),
    HttpStatus(u16),
    Io(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "request failed: {msg}"),
            FetchError::HttpStatus(code) => write!(f, "HTTP {code}"),
            FetchError::Io(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<FetchError> for CatalogError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Transport(msg) => CatalogError::Transport(msg),
            FetchError::HttpStatus(code) => CatalogError::HttpStatus(code),
            FetchError::Io(msg) => CatalogError::Io(msg),
        }
    }
}

fn http_client() -> Result<&'static reqwest::Client, FetchError> {
    if let Some(client) = HTTP_CLIENT.get() {
        return Ok(client);
    }

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    Ok(HTTP_CLIENT.get_or_init(|| client))
}

/// Reads the whole resource at `location`.
///
/// Remote requests bypass intermediate caches so an edited manifest is picked
/// up on the next launch.
pub async fn fetch(location: &Location) -> Result<Vec<u8>, FetchError> {
    match location {
        Location::Remote(url) => {
            let response = http_client()?
                .get(url)
                .header(CACHE_CONTROL, "no-store")
                .header(PRAGMA, "no-cache")
                .send()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::HttpStatus(status.as_u16()));
            }

            let body = response
                .bytes()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            Ok(body.to_vec())
        }
        Location::Local(path) => tokio::fs::read(path)
            .await
            .map_err(|e| FetchError::Io(format!("{}: {e}", path.display()))),
    }
}
