//! # Catalog Commands
//!
//! Item picker data for line editors.

use tracing::debug;

use stockdesk_core::CatalogItem;
use stockdesk_store::{Repository, Store};

use crate::error::ApiError;

/// Lists catalog items in catalog order. Inactive items are hidden unless
/// `include_inactive` is set.
pub fn list_catalog(store: &Store, include_inactive: bool) -> Result<Vec<CatalogItem>, ApiError> {
    debug!(include_inactive, "list_catalog command");

    let items = store.catalog().list()?;
    Ok(items
        .into_iter()
        .filter(|item| include_inactive || item.is_active)
        .collect())
}

/// Resolves a catalog item by id or SKU.
pub fn get_catalog_item(store: &Store, key: &str) -> Result<CatalogItem, ApiError> {
    debug!(key = %key, "get_catalog_item command");

    let catalog = store.catalog();
    match catalog.find_by_id(key)? {
        Some(item) => Ok(item),
        None => catalog
            .find_by_key(key)?
            .ok_or_else(|| ApiError::not_found("Catalog item", key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_list_hides_inactive_by_default() {
        let store = Store::seeded().unwrap();
        let active = list_catalog(&store, false).unwrap();
        let all = list_catalog(&store, true).unwrap();
        assert!(active.iter().all(|i| i.is_active));
        assert!(all.len() > active.len());
    }

    #[test]
    fn test_get_by_id_or_sku() {
        let store = Store::seeded().unwrap();
        assert_eq!(get_catalog_item(&store, "itm-005").unwrap().sku, "MOUSE-WL");
        assert_eq!(get_catalog_item(&store, "MOUSE-WL").unwrap().id, "itm-005");
        assert_eq!(
            get_catalog_item(&store, "nope").unwrap_err().code,
            ErrorCode::NotFound
        );
    }
}
