//! Order service - order placement, listing and status updates.

use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use std::sync::Arc;

use crate::domain::{NewOrder, Order};
use crate::errors::{AppError, AppResult};
use crate::infra::Store;

/// Order service trait for dependency injection
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Insert a placed order, returning its generated document id
    async fn place(&self, order: NewOrder) -> AppResult<String>;

    /// List orders for a user
    async fn for_user(&self, user_id: Option<String>) -> AppResult<Vec<Order>>;

    /// List every order
    async fn list(&self) -> AppResult<Vec<Order>>;

    /// List orders with the given status
    async fn by_status(&self, status: &str) -> AppResult<Vec<Order>>;

    /// Set the status and update time on an order; succeeds whether or
    /// not the order exists
    async fn update_status(&self, order_id: &str, status: &str) -> AppResult<()>;
}

/// Concrete implementation of OrderService backed by the document store
pub struct OrderManager {
    store: Arc<Store>,
}

impl OrderManager {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OrderService for OrderManager {
    async fn place(&self, order: NewOrder) -> AppResult<String> {
        let result = self.store.orders().insert_one(order.into_order()).await?;
        result
            .inserted_id
            .as_object_id()
            .map(|id| id.to_hex())
            .ok_or_else(|| AppError::internal("Inserted order id was not an ObjectId"))
    }

    async fn for_user(&self, user_id: Option<String>) -> AppResult<Vec<Order>> {
        let orders = self
            .store
            .orders()
            .find(doc! { "user_id": user_id })
            .await?
            .try_collect()
            .await?;
        Ok(orders)
    }

    async fn list(&self) -> AppResult<Vec<Order>> {
        let orders = self
            .store
            .orders()
            .find(doc! {})
            .await?
            .try_collect()
            .await?;
        Ok(orders)
    }

    async fn by_status(&self, status: &str) -> AppResult<Vec<Order>> {
        let orders = self
            .store
            .orders()
            .find(doc! { "status": status })
            .await?
            .try_collect()
            .await?;
        Ok(orders)
    }

    async fn update_status(&self, order_id: &str, status: &str) -> AppResult<()> {
        let id = ObjectId::parse_str(order_id)
            .map_err(|_| AppError::bad_request("Invalid order id"))?;
        // Dates are stored as ISO-8601 strings, matching the serde
        // representation of the typed documents.
        self.store
            .orders()
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "status": status, "updated_at": Utc::now().to_rfc3339() } },
            )
            .await?;
        Ok(())
    }
}
