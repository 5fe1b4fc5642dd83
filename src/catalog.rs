// Copyright 2025 Cowboy AI, LLC.

//! Asset catalog collaborator
//!
//! Avatar selections are resolved against an external catalog. The core only
//! knows this interface; the character decider maps its errors onto the
//! stable `INVALID_AVATAR_SET` / `INVALID_AVATAR_ASSET` rejection codes.

use thiserror::Error;

/// A resolved avatar selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarSelection {
    /// The resolved avatar set id
    pub set_id: String,
    /// The resolved asset id within the set
    pub asset_id: String,
}

/// Errors the catalog can answer with
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssetCatalogError {
    /// The avatar set does not exist
    #[error("avatar set not found: {0}")]
    SetNotFound(String),

    /// The asset does not belong to the set or does not exist
    #[error("avatar asset {asset_id} is invalid in set {set_id}")]
    AssetInvalid {
        /// The set the asset was resolved against
        set_id: String,
        /// The offending asset id
        asset_id: String,
    },
}

/// Resolves avatar selections for entities
///
/// `asset_id` may be empty; the catalog then picks the set's default asset.
#[cfg_attr(test, mockall::automock)]
pub trait AssetCatalog: Send + Sync {
    /// Resolve a selection to its canonical `(set, asset)` pair
    fn resolve_selection(
        &self,
        entity_type: &str,
        entity_id: &str,
        set_id: &str,
        asset_id: &str,
    ) -> Result<AvatarSelection, AssetCatalogError>;
}

/// Catalog that trusts every selection and echoes it back
///
/// Useful in tests and in deployments without a catalog service. An empty
/// asset hint resolves to the set's `"default"` asset.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughAssetCatalog;

impl AssetCatalog for PassthroughAssetCatalog {
    fn resolve_selection(
        &self,
        _entity_type: &str,
        _entity_id: &str,
        set_id: &str,
        asset_id: &str,
    ) -> Result<AvatarSelection, AssetCatalogError> {
        Ok(AvatarSelection {
            set_id: set_id.to_string(),
            asset_id: if asset_id.is_empty() {
                "default".to_string()
            } else {
                asset_id.to_string()
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passthrough_echoes_selection() {
        let catalog = PassthroughAssetCatalog;
        let resolved = catalog
            .resolve_selection("character", "char-1", "set-1", "asset-9")
            .unwrap();
        assert_eq!(resolved.set_id, "set-1");
        assert_eq!(resolved.asset_id, "asset-9");
    }

    #[test]
    fn passthrough_defaults_empty_asset_hint() {
        let catalog = PassthroughAssetCatalog;
        let resolved = catalog
            .resolve_selection("character", "char-1", "set-1", "")
            .unwrap();
        assert_eq!(resolved.asset_id, "default");
    }

    #[test]
    fn mock_catalog_answers_with_errors() {
        let mut catalog = MockAssetCatalog::new();
        catalog
            .expect_resolve_selection()
            .returning(|_, _, set_id, _| Err(AssetCatalogError::SetNotFound(set_id.to_string())));

        let err = catalog
            .resolve_selection("character", "char-1", "missing", "")
            .unwrap_err();
        assert_eq!(err, AssetCatalogError::SetNotFound("missing".into()));
    }
}
