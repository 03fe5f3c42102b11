//! # Product Store
//!
//! Authoritative in-memory holder of all products.
//!
//! Every read and write takes the same mutex for the duration of one
//! operation, so concurrent requests can neither duplicate an id nor lose
//! a merge. Callers only ever receive clones.

use crate::error::{ProductError, ProductResult};
use crate::product::{Product, ProductCatalog, ProductPatch};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

/// Shared handle to the product collection
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    products: Arc<Mutex<Vec<Product>>>,
}

impl ProductStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded from a catalog. Fails on duplicate ids.
    pub fn from_catalog(catalog: ProductCatalog) -> ProductResult<Self> {
        let store = Self::new();
        for product in catalog.products {
            store.insert(product)?;
        }
        Ok(store)
    }

    fn lock(&self) -> ProductResult<MutexGuard<'_, Vec<Product>>> {
        self.products
            .lock()
            .map_err(|e| ProductError::StoreUnavailable(e.to_string()))
    }

    /// Snapshot of all products in insertion order
    pub fn list_all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.lock()?.clone())
    }

    /// Find a product by id
    pub fn find_by_id(&self, id: &str) -> ProductResult<Product> {
        self.lock()?
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ProductError::not_found(id))
    }

    /// Append a product, rejecting an id that is already present
    pub fn insert(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.lock()?;
        if products.iter().any(|p| p.id == product.id) {
            return Err(ProductError::DuplicateId { id: product.id });
        }
        debug!(product_id = %product.id, "inserting product");
        products.push(product.clone());
        Ok(product)
    }

    /// Merge a partial update onto an existing product
    pub fn update(&self, id: &str, patch: ProductPatch) -> ProductResult<Product> {
        self.modify(id, |product| {
            product.apply(patch);
            Ok(())
        })
    }

    /// Run `f` on a draft of an existing product under the lock.
    ///
    /// The id is resolved before `f` runs, so a missing id is always
    /// `NotFound`. The draft is written back only if `f` succeeds, and its
    /// id is restored first.
    pub fn modify<F>(&self, id: &str, f: F) -> ProductResult<Product>
    where
        F: FnOnce(&mut Product) -> ProductResult<()>,
    {
        let mut products = self.lock()?;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ProductError::not_found(id))?;

        let mut draft = product.clone();
        f(&mut draft)?;
        draft.id = product.id.clone();
        *product = draft.clone();
        Ok(draft)
    }

    /// Remove a product, returning it
    pub fn remove(&self, id: &str) -> ProductResult<Product> {
        let mut products = self.lock()?;
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| ProductError::not_found(id))?;
        Ok(products.remove(index))
    }

    /// Number of products held
    pub fn len(&self) -> ProductResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> ProductResult<bool> {
        Ok(self.lock()?.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::NewProduct;
    use serde_json::Number;

    fn seeded() -> ProductStore {
        let mut catalog = ProductCatalog::new();
        catalog.add(Product::with_id("1", NewProduct::new("Laptop", "16GB RAM", 1200).in_stock(true)));
        catalog.add(Product::with_id("2", NewProduct::new("Smartphone", "128GB", 800)));
        ProductStore::from_catalog(catalog).unwrap()
    }

    #[test]
    fn test_insert_and_find() {
        let store = ProductStore::new();
        let created = store
            .insert(Product::create(NewProduct::new("Desk", "Oak desk", 150)))
            .unwrap();

        assert_eq!(store.find_by_id(&created.id).unwrap(), created);
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = seeded();
        store
            .insert(Product::with_id("0", NewProduct::new("Mouse", "Wireless", 25)))
            .unwrap();

        let ids: Vec<_> = store.list_all().unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["1", "2", "0"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let store = seeded();
        let err = store
            .insert(Product::with_id("1", NewProduct::new("Other", "dup", 1)))
            .unwrap_err();

        assert!(matches!(err, ProductError::DuplicateId { .. }));
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_from_catalog_rejects_duplicates() {
        let mut catalog = ProductCatalog::new();
        catalog.add(Product::with_id("1", NewProduct::new("A", "a", 1)));
        catalog.add(Product::with_id("1", NewProduct::new("B", "b", 2)));

        assert!(ProductStore::from_catalog(catalog).is_err());
    }

    #[test]
    fn test_update_merges_fields() {
        let store = seeded();
        let patch = ProductPatch {
            price: Some(Number::from(1100)),
            ..Default::default()
        };

        let updated = store.update("1", patch).unwrap();
        assert_eq!(updated.price, Number::from(1100));
        assert_eq!(updated.name, "Laptop");
        assert!(updated.in_stock);
        assert_eq!(store.find_by_id("1").unwrap(), updated);
    }

    #[test]
    fn test_missing_id_leaves_store_unchanged() {
        let store = seeded();
        let before = store.list_all().unwrap();

        assert!(matches!(store.find_by_id("nope"), Err(ProductError::NotFound { .. })));
        assert!(matches!(
            store.update("nope", ProductPatch::default()),
            Err(ProductError::NotFound { .. })
        ));
        assert!(matches!(store.remove("nope"), Err(ProductError::NotFound { .. })));
        assert_eq!(store.list_all().unwrap(), before);
    }

    #[test]
    fn test_modify_checks_id_before_running() {
        let store = seeded();
        let err = store
            .modify("nope", |_| Err(ProductError::Validation("bad body".into())))
            .unwrap_err();

        assert!(matches!(err, ProductError::NotFound { .. }));
    }

    #[test]
    fn test_failed_modify_leaves_record_intact() {
        let store = seeded();
        let before = store.find_by_id("1").unwrap();

        let result = store.modify("1", |product| {
            product.name = "half-written".into();
            product.id = "stolen".into();
            Err(ProductError::Validation("bad body".into()))
        });

        assert!(result.is_err());
        assert_eq!(store.find_by_id("1").unwrap(), before);
    }

    #[test]
    fn test_modify_cannot_change_id() {
        let store = seeded();
        let updated = store
            .modify("2", |product| {
                product.id = "99".into();
                product.in_stock = true;
                Ok(())
            })
            .unwrap();

        assert_eq!(updated.id, "2");
        assert!(store.find_by_id("2").unwrap().in_stock);
        assert!(store.find_by_id("99").is_err());
    }

    #[test]
    fn test_poisoned_lock_is_unavailable() {
        let store = seeded();
        let writer = store.clone();
        let _ = std::thread::spawn(move || writer.modify("1", |_| panic!("writer died"))).join();

        assert!(matches!(store.list_all(), Err(ProductError::StoreUnavailable(_))));
        assert!(matches!(store.find_by_id("1"), Err(ProductError::StoreUnavailable(_))));
    }

    #[test]
    fn test_remove() {
        let store = seeded();
        let removed = store.remove("1").unwrap();

        assert_eq!(removed.name, "Laptop");
        assert_eq!(store.len().unwrap(), 1);
        assert!(store.find_by_id("1").is_err());
    }

    #[test]
    fn test_clones_share_state() {
        let store = ProductStore::new();
        let handle = store.clone();
        handle
            .insert(Product::create(NewProduct::new("Desk", "Oak", 1)))
            .unwrap();

        assert!(!store.is_empty().unwrap());
    }

    #[test]
    fn test_concurrent_inserts_keep_ids_unique() {
        let store = ProductStore::new();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for j in 0..25 {
                        store
                            .insert(Product::create(NewProduct::new(format!("p{i}-{j}"), "bulk", j)))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut ids: Vec<_> = store.list_all().unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 200);
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 200);
    }
}
