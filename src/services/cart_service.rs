//! Cart service - cart item management.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use std::sync::Arc;

use crate::domain::{CartItem, NewCartItem};
use crate::errors::{AppError, AppResult};
use crate::infra::Store;

/// Cart service trait for dependency injection
#[async_trait]
pub trait CartService: Send + Sync {
    /// Insert a cart item
    async fn add(&self, item: NewCartItem) -> AppResult<()>;

    /// List cart items for a user
    async fn for_user(&self, user_id: Option<String>) -> AppResult<Vec<CartItem>>;

    /// Delete a cart item by document id; succeeds whether or not the
    /// item exists
    async fn remove(&self, cart_id: &str) -> AppResult<()>;
}

/// Concrete implementation of CartService backed by the document store
pub struct CartManager {
    store: Arc<Store>,
}

impl CartManager {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CartService for CartManager {
    async fn add(&self, item: NewCartItem) -> AppResult<()> {
        self.store.cart().insert_one(item.into_cart_item()).await?;
        Ok(())
    }

    async fn for_user(&self, user_id: Option<String>) -> AppResult<Vec<CartItem>> {
        let items = self
            .store
            .cart()
            .find(doc! { "user_id": user_id })
            .await?
            .try_collect()
            .await?;
        Ok(items)
    }

    async fn remove(&self, cart_id: &str) -> AppResult<()> {
        let id = ObjectId::parse_str(cart_id)
            .map_err(|_| AppError::bad_request("Invalid cart id"))?;
        self.store.cart().delete_one(doc! { "_id": id }).await?;
        Ok(())
    }
}
