//! Order domain entity and related types.

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::ORDER_STATUS_PLACED;

fn default_quantity() -> i64 {
    1
}

/// One line of an order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderLine {
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    #[serde(default = "default_quantity")]
    #[schema(example = 1)]
    pub quantity: i64,
    pub price: Option<f64>,
}

/// Order document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub payment_mode: Option<String>,
    /// Starts as `placed`; later updates accept free-text statuses
    pub status: String,
    pub ordered_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Order creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewOrder {
    pub user_id: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    pub total: Option<f64>,
    pub address: Option<String>,
    pub payment_mode: Option<String>,
}

impl NewOrder {
    /// Build the stored document with status `placed` and the order time
    pub fn into_order(self) -> Order {
        Order {
            id: None,
            user_id: self.user_id,
            items: self.items,
            total: self.total,
            address: self.address,
            payment_mode: self.payment_mode,
            status: ORDER_STATUS_PLACED.to_string(),
            ordered_at: Utc::now(),
            updated_at: None,
        }
    }
}

/// Status update for an order; unknown keys are rejected.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateOrderStatus {
    /// New free-text status
    #[validate(length(min = 1, message = "Status is required"))]
    #[schema(example = "shipped")]
    pub status: String,
}

/// Order response with the document id rendered as a hex string
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: String,
    pub user_id: Option<String>,
    pub items: Vec<OrderLine>,
    pub total: Option<f64>,
    pub address: Option<String>,
    pub payment_mode: Option<String>,
    pub status: String,
    pub ordered_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id: order.user_id,
            items: order.items,
            total: order.total,
            address: order.address,
            payment_mode: order.payment_mode,
            status: order.status,
            ordered_at: order.ordered_at,
            updated_at: order.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn placed_order_starts_in_placed_state() {
        let new: NewOrder = serde_json::from_value(json!({
            "user_id": "u1",
            "items": [{"product_id": "p1", "product_name": "Masala Tea", "price": 45.0}],
            "total": 45.0,
            "address": "12 Market Road",
            "payment_mode": "cod"
        }))
        .unwrap();

        let order = new.into_order();
        assert_eq!(order.status, ORDER_STATUS_PLACED);
        assert!(order.updated_at.is_none());
        assert_eq!(order.items[0].quantity, 1);
    }

    #[test]
    fn status_update_rejects_extra_keys() {
        let result: Result<UpdateOrderStatus, _> =
            serde_json::from_value(json!({"status": "shipped", "total": 0}));
        assert!(result.is_err());
    }
}
