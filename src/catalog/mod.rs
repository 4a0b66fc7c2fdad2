// SPDX-License-Identifier: MPL-2.0
//! Catalog of fabric entries loaded from a JSON manifest.
//!
//! The manifest is a JSON array of `{ "filename", "name", "quantity" }`
//! objects. It is fetched once per session (see [`loader`]) and never mutated
//! afterwards; an entry's identity is its position in the list.

pub mod loader;
pub mod location;

pub use loader::{Loader, Ticket};
pub use location::{FetchError, Location};

use crate::error::CatalogError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// One item of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Image file name, relative to the configured image base.
    pub filename: String,
    /// Display name of the fabric.
    pub name: String,
    /// Units in stock, shown as the manifest states it.
    #[serde(deserialize_with = "deserialize_quantity")]
    pub quantity: i64,
}

/// Accepts any integral JSON number, including `2.0` or `-1`.
fn deserialize_quantity<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(value) = number.as_i64() {
        return Ok(value);
    }
    match number.as_f64() {
        Some(value) if value.fract() == 0.0 && value.abs() < i64::MAX as f64 => {
            Ok(value as i64)
        }
        _ => Err(D::Error::custom(format!(
            "quantity must be an integer, got {number}"
        ))),
    }
}

/// Load state of the catalog for the current session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Catalog {
    #[default]
    Unloaded,
    Loaded(Vec<CatalogEntry>),
    Failed(CatalogError),
}

impl Catalog {
    /// Entries of a loaded catalog, empty otherwise.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        match self {
            Catalog::Loaded(entries) => entries,
            Catalog::Unloaded | Catalog::Failed(_) => &[],
        }
    }

    /// Number of navigable fabric entries (0 until loaded).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self, Catalog::Loaded(_))
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Catalog::Unloaded)
    }

    #[must_use]
    pub fn error(&self) -> Option<&CatalogError> {
        match self {
            Catalog::Failed(err) => Some(err),
            Catalog::Unloaded | Catalog::Loaded(_) => None,
        }
    }
}

impl From<Result<Vec<CatalogEntry>, CatalogError>> for Catalog {
    fn from(result: Result<Vec<CatalogEntry>, CatalogError>) -> Self {
        match result {
            Ok(entries) => Catalog::Loaded(entries),
            Err(err) => Catalog::Failed(err),
        }
    }
}

/// Parses a manifest body into catalog entries.
///
/// # Errors
///
/// Returns [`CatalogError::Malformed`] for invalid JSON or entries with a wrong
/// shape, and [`CatalogError::NotAnArray`] when the top-level value is valid
/// JSON but not an array.
pub fn parse_manifest(bytes: &[u8]) -> Result<Vec<CatalogEntry>, CatalogError> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| CatalogError::Malformed(e.to_string()))?;

    if !value.is_array() {
        return Err(CatalogError::NotAnArray);
    }

    serde_json::from_value(value).map_err(|e| CatalogError::Malformed(e.to_string()))
}

/// Fetches and parses the manifest at `location`.
///
/// Performs exactly one request; there is no retry and no timeout beyond the
/// transport default.
pub async fn load(location: Location) -> Result<Vec<CatalogEntry>, CatalogError> {
    let bytes = location::fetch(&location).await?;
    parse_manifest(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(filename: &str, name: &str, quantity: i64) -> CatalogEntry {
        CatalogEntry {
            filename: filename.to_string(),
            name: name.to_string(),
            quantity,
        }
    }

    #[test]
    fn parse_manifest_reads_entries_in_order() {
        let body = br#"[
            {"filename": "a.jpg", "name": "A", "quantity": 2},
            {"filename": "b.jpg", "name": "B", "quantity": 0}
        ]"#;

        let entries = parse_manifest(body).expect("manifest should parse");
        assert_eq!(entries, vec![entry("a.jpg", "A", 2), entry("b.jpg", "B", 0)]);
    }

    #[test]
    fn parse_manifest_accepts_empty_array() {
        let entries = parse_manifest(b"[]").expect("empty array is valid");
        assert!(entries.is_empty());
    }

    #[test]
    fn parse_manifest_ignores_unknown_fields() {
        let body = br#"[{"filename": "a.jpg", "name": "A", "quantity": 1, "color": "red"}]"#;
        let entries = parse_manifest(body).expect("extra fields are tolerated");
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn parse_manifest_rejects_object_payload() {
        let body = br#"{"filename": "a.jpg", "name": "A", "quantity": 1}"#;
        assert_eq!(parse_manifest(body), Err(CatalogError::NotAnArray));
    }

    #[test]
    fn parse_manifest_rejects_invalid_json() {
        match parse_manifest(b"[{not json") {
            Err(CatalogError::Malformed(message)) => assert!(!message.is_empty()),
            other => panic!("expected Malformed error, got {other:?}"),
        }
    }

    #[test]
    fn parse_manifest_rejects_entry_missing_field() {
        let body = br#"[{"filename": "a.jpg", "quantity": 1}]"#;
        match parse_manifest(body) {
            Err(CatalogError::Malformed(message)) => assert!(message.contains("name")),
            other => panic!("expected Malformed error, got {other:?}"),
        }
    }

    #[test]
    fn parse_manifest_keeps_negative_quantity() {
        let body = br#"[{"filename": "a.jpg", "name": "A", "quantity": -1}]"#;
        let entries = parse_manifest(body).expect("negative quantity is still an integer");
        assert_eq!(entries, vec![entry("a.jpg", "A", -1)]);
    }

    #[test]
    fn parse_manifest_accepts_integral_float_quantity() {
        let body = br#"[{"filename": "a.jpg", "name": "A", "quantity": 2.0}]"#;
        let entries = parse_manifest(body).expect("2.0 is an integral number");
        assert_eq!(entries[0].quantity, 2);
    }

    #[test]
    fn parse_manifest_rejects_fractional_quantity() {
        let body = br#"[{"filename": "a.jpg", "name": "A", "quantity": 2.5}]"#;
        match parse_manifest(body) {
            Err(CatalogError::Malformed(message)) => assert!(message.contains("quantity")),
            other => panic!("expected Malformed error, got {other:?}"),
        }
    }

    #[test]
    fn catalog_from_result_maps_both_outcomes() {
        let loaded = Catalog::from(Ok(vec![entry("a.jpg", "A", 2)]));
        assert!(loaded.is_loaded());
        assert_eq!(loaded.len(), 1);

        let failed = Catalog::from(Err(CatalogError::HttpStatus(500)));
        assert_eq!(failed.error(), Some(&CatalogError::HttpStatus(500)));
        assert!(failed.entries().is_empty());
    }

    #[test]
    fn default_catalog_is_unloaded_and_empty() {
        let catalog = Catalog::default();
        assert!(catalog.is_pending());
        assert!(catalog.is_empty());
        assert!(catalog.error().is_none());
    }
}
