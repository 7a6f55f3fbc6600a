//! Admin domain entity.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Admin document, looked up by email
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Admin response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AdminResponse {
    /// Admin email address
    #[schema(example = "admin@example.com")]
    pub email: String,
}

impl From<Admin> for AdminResponse {
    fn from(admin: Admin) -> Self {
        Self { email: admin.email }
    }
}
