//! # Catalog State
//!
//! Wraps the product `Catalog` for use in commands.
//!
//! ## Thread Safety
//! The catalog is read-only once loaded, so commands share it without
//! locking.
//!
//! ## Usage in Commands
//! ```rust
//! # use zelion_storefront::state::CatalogState;
//! # use zelion_core::{Catalog, CategoryFilter};
//! let catalog = CatalogState::new(Catalog::builtin());
//! let bats = catalog.inner().filter_products("bat".parse::<CategoryFilter>()?, "");
//! assert_eq!(bats.len(), 3);
//! # Ok::<(), zelion_core::CoreError>(())
//! ```

use std::path::Path;

use tracing::info;
use zelion_core::Catalog;

use super::{ConfigError, ConfigState};

/// Wrapper around `Catalog` for state management.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Catalog,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        CatalogState { catalog }
    }

    /// Loads the catalog named by `config`, or the built-in one.
    pub fn load(config: &ConfigState) -> Result<Self, ConfigError> {
        match &config.catalog_path {
            Some(path) => Self::from_file(path),
            None => {
                let catalog = Catalog::builtin();
                info!(products = catalog.len(), "using built-in catalog");
                Ok(Self::new(catalog))
            }
        }
    }

    /// Loads a JSON array of products from `path`.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Catalog::from_json(&json).map_err(|source| ConfigError::CatalogInvalid {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), products = catalog.len(), "catalog loaded");
        Ok(Self::new(catalog))
    }

    pub fn inner(&self) -> &Catalog {
        &self.catalog
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("zelion-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_load_builtin_by_default() {
        let state = CatalogState::load(&ConfigState::default()).unwrap();
        assert_eq!(state.inner(), &Catalog::builtin());
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_path("catalog-ok");
        std::fs::write(
            &path,
            r#"[{"id":"bat-9","name":"Practice Bat","description":"Poplar bat",
                "price":999,"image":"/img/bat-9.jpg","category":"bat","inStock":true,
                "rating":3.9,"reviews":12}]"#,
        )
        .unwrap();

        let config = ConfigState {
            catalog_path: Some(path.clone()),
            ..ConfigState::default()
        };
        let state = CatalogState::load(&config).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(state.inner().len(), 1);
        assert_eq!(state.inner().get("bat-9").unwrap().price, 999);
    }

    #[test]
    fn test_missing_file() {
        let err = CatalogState::from_file(&temp_path("does-not-exist")).unwrap_err();
        assert!(matches!(err, ConfigError::CatalogRead { .. }));
    }

    #[test]
    fn test_invalid_file() {
        let path = temp_path("catalog-bad");
        std::fs::write(&path, "{ not json").unwrap();
        let err = CatalogState::from_file(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(err, ConfigError::CatalogInvalid { .. }));
    }
}
