//! Product domain entity.
//!
//! Products carry a typed core (name, category, price) plus free-form
//! fields, which are kept in a flattened document.

use chrono::{DateTime, Utc};
use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Product document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Free-form fields supplied at creation time
    #[serde(flatten)]
    pub extra: Document,
    pub created_at: DateTime<Utc>,
}

/// Product creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewProduct {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    pub price: Option<f64>,
    #[serde(flatten)]
    pub extra: Document,
}

impl NewProduct {
    /// Build the stored document, stamping the creation time
    pub fn into_product(self) -> Product {
        Product {
            id: None,
            name: self.name,
            category: self.category,
            price: self.price,
            extra: self.extra,
            created_at: Utc::now(),
        }
    }
}

/// Product response with the document id rendered as a hex string
#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(flatten)]
    pub extra: Document,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: product.name,
            category: product.category,
            price: product.price,
            extra: product.extra,
            created_at: product.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn free_form_fields_survive_the_round_trip() {
        let new: NewProduct = serde_json::from_value(json!({
            "name": "Masala Tea",
            "category": "beverages",
            "price": 45.0,
            "brand": "Shri",
            "in_stock": true
        }))
        .unwrap();

        let product = new.into_product();
        assert_eq!(product.extra.get_str("brand").unwrap(), "Shri");
        assert!(product.extra.get_bool("in_stock").unwrap());

        let value = serde_json::to_value(ProductResponse::from(product)).unwrap();
        assert_eq!(value["brand"], "Shri");
        assert_eq!(value["price"], 45.0);
    }
}
