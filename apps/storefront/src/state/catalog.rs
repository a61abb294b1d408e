//! # Catalog State
//!
//! Loads the product catalog once at startup and shares it read-only.
//!
//! Without a configured path the built-in catalog is used. A configured
//! path must point at a JSON array of product records; a missing file or a
//! malformed record stops startup rather than showing an empty storefront.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use storefront_core::{Catalog, CoreError};
use thiserror::Error;
use tracing::info;

use super::ConfigState;

/// Why the catalog could not be loaded.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("Could not read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Shared, read-only catalog.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(catalog),
        }
    }

    /// Loads the catalog named by the config, or the built-in one.
    pub fn load(config: &ConfigState) -> Result<Self, CatalogLoadError> {
        let catalog = match &config.catalog_path {
            Some(path) => Self::read_file(path)?,
            None => Catalog::builtin(),
        };

        info!(
            products = catalog.len(),
            source = ?config.catalog_path,
            "Catalog loaded"
        );
        Ok(Self::new(catalog))
    }

    fn read_file(path: &Path) -> Result<Catalog, CatalogLoadError> {
        let source = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Catalog::from_json(&source)?)
    }

    pub fn inner(&self) -> &Catalog {
        &self.catalog
    }

    /// Another handle to the same catalog.
    pub fn shared(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_builtin_by_default() {
        let state = CatalogState::load(&ConfigState::default()).unwrap();
        assert_eq!(state.inner(), &Catalog::builtin());
    }

    #[test]
    fn test_load_missing_file() {
        let config = ConfigState {
            catalog_path: Some(PathBuf::from("/nonexistent/storefront/catalog.json")),
            ..ConfigState::default()
        };
        let err = CatalogState::load(&config).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Read { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "storefront-catalog-{}.json",
            uuid::Uuid::new_v4()
        ));
        std::fs::write(
            &path,
            r#"[{"id": 5, "name": "Kettle", "priceCents": 2599, "description": "", "image": ""}]"#,
        )
        .unwrap();

        let config = ConfigState {
            catalog_path: Some(path.clone()),
            ..ConfigState::default()
        };
        let state = CatalogState::load(&config).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(state.inner().len(), 1);
        assert_eq!(state.inner().products()[0].name, "Kettle");
    }
}
