//! Product catalog source.
//!
//! The catalog is read once at startup and held read-only in [`AppState`].
//! Without a configured path the built-in product list is served.
//!
//! [`AppState`]: crate::state::AppState

use std::path::{Path, PathBuf};

use shirt_store_core::{Catalog, CatalogError};
use thiserror::Error;

/// Built-in catalog, compiled into the binary.
const DEFAULT_CATALOG_JSON: &str = include_str!("../data/products.json");

/// Errors loading the product catalog.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid catalog: {0}")]
    Invalid(#[from] CatalogError),
}

/// Load the catalog from `path`, or the built-in catalog when `None`.
///
/// # Errors
///
/// Returns `CatalogLoadError` if the file can't be read or isn't a valid catalog.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogLoadError> {
    let Some(path) = path else {
        return default_catalog();
    };

    let json = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = Catalog::from_json(&json)?;

    tracing::info!(path = %path.display(), products = catalog.len(), "Catalog loaded");
    Ok(catalog)
}

/// The built-in catalog.
///
/// # Errors
///
/// Returns `CatalogLoadError::Invalid` if the embedded JSON is malformed.
pub fn default_catalog() -> Result<Catalog, CatalogLoadError> {
    let catalog = Catalog::from_json(DEFAULT_CATALOG_JSON)?;
    tracing::info!(products = catalog.len(), "Built-in catalog loaded");
    Ok(catalog)
}
