//! Cart item domain entity.
//!
//! Cart items reference products by id without referential checks
//! against the product collection.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn default_quantity() -> i64 {
    1
}

/// Cart item document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default)]
    pub price: Option<f64>,
}

/// Cart item creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewCartItem {
    pub user_id: Option<String>,
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    /// Defaults to 1 when absent
    #[serde(default = "default_quantity")]
    #[schema(example = 1)]
    pub quantity: i64,
    pub price: Option<f64>,
}

impl NewCartItem {
    pub fn into_cart_item(self) -> CartItem {
        CartItem {
            id: None,
            user_id: self.user_id,
            product_id: self.product_id,
            product_name: self.product_name,
            quantity: self.quantity,
            price: self.price,
        }
    }
}

/// Cart item response with the document id rendered as a hex string
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CartItemResponse {
    pub id: String,
    pub user_id: Option<String>,
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub quantity: i64,
    pub price: Option<f64>,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id: item.user_id,
            product_id: item.product_id,
            product_name: item.product_name,
            quantity: item.quantity,
            price: item.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn quantity_defaults_to_one() {
        let new: NewCartItem = serde_json::from_value(json!({
            "user_id": "u1",
            "product_id": "p1",
            "product_name": "Masala Tea",
            "price": 45.0
        }))
        .unwrap();

        assert_eq!(new.into_cart_item().quantity, 1);
    }
}
