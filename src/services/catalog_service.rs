//! Catalog service - product creation and lookup.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use std::sync::Arc;

use crate::config::PREFIX_SEARCH_MAX_CHAR;
use crate::domain::{NewProduct, Product};
use crate::errors::AppResult;
use crate::infra::Store;

/// Catalog service trait for dependency injection
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Insert a product
    async fn add(&self, product: NewProduct) -> AppResult<()>;

    /// List every product
    async fn list(&self) -> AppResult<Vec<Product>>;

    /// List products in a category
    async fn by_category(&self, category: &str) -> AppResult<Vec<Product>>;

    /// Prefix search on product name
    async fn search(&self, key: &str) -> AppResult<Vec<Product>>;
}

/// Concrete implementation of CatalogService backed by the document store
pub struct CatalogManager {
    store: Arc<Store>,
}

impl CatalogManager {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CatalogService for CatalogManager {
    async fn add(&self, product: NewProduct) -> AppResult<()> {
        self.store
            .products()
            .insert_one(product.into_product())
            .await?;
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Product>> {
        let products = self
            .store
            .products()
            .find(doc! {})
            .await?
            .try_collect()
            .await?;
        Ok(products)
    }

    async fn by_category(&self, category: &str) -> AppResult<Vec<Product>> {
        let products = self
            .store
            .products()
            .find(doc! { "category": category })
            .await?
            .try_collect()
            .await?;
        Ok(products)
    }

    async fn search(&self, key: &str) -> AppResult<Vec<Product>> {
        // Lexicographic range covering every name that starts with `key`
        let upper = format!("{key}{PREFIX_SEARCH_MAX_CHAR}");
        let products = self
            .store
            .products()
            .find(doc! { "name": { "$gte": key, "$lte": upper } })
            .await?
            .try_collect()
            .await?;
        Ok(products)
    }
}
