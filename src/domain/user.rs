//! User domain entity and related types.
//!
//! The mobile number is the de-facto unique identifier for users; the
//! underlying primary key stays an opaque document id.

use chrono::{DateTime, Utc};
use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::ROLE_USER;

/// User document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub mobile: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Stored as provided; absent when a self-registration omitted it
    #[serde(default)]
    pub password: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewUser {
    /// User display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Shri Kumar")]
    pub name: String,
    /// Mobile number, unique per user
    #[validate(length(min = 1, message = "Mobile is required"))]
    #[schema(example = "9876543210")]
    pub mobile: String,
    /// Optional email address
    pub email: Option<String>,
    /// Optional location
    pub location: Option<String>,
    /// Optional password
    pub password: Option<String>,
}

impl NewUser {
    /// Build the stored document, stamping role and creation time
    pub fn into_user(self) -> User {
        User {
            id: None,
            name: self.name,
            mobile: self.mobile,
            email: self.email,
            location: self.location,
            password: self.password,
            role: ROLE_USER.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Partial update for a user; unknown keys are rejected to keep the
/// stored schema from drifting.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateUser {
    /// New display name
    pub name: Option<String>,
    /// New email address
    pub email: Option<String>,
    /// New location
    pub location: Option<String>,
    /// New password
    pub password: Option<String>,
}

impl UpdateUser {
    /// True when no field was provided
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.location.is_none()
            && self.password.is_none()
    }

    /// `$set` document containing only the provided fields
    pub fn to_set_document(&self) -> Document {
        let mut set = doc! {};
        if let Some(ref name) = self.name {
            set.insert("name", name);
        }
        if let Some(ref email) = self.email {
            set.insert("email", email);
        }
        if let Some(ref location) = self.location {
            set.insert("location", location);
        }
        if let Some(ref password) = self.password {
            set.insert("password", password);
        }
        set
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Document id
    #[schema(example = "65f1c0ffee0ddba11ad0beef")]
    pub id: String,
    pub name: String,
    pub mobile: String,
    pub email: Option<String>,
    pub location: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: user.name,
            mobile: user.mobile,
            email: user.email,
            location: user.location,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_user_stamps_role_and_creation_time() {
        let user = NewUser {
            name: "Shri".into(),
            mobile: "9876543210".into(),
            email: None,
            location: None,
            password: None,
        }
        .into_user();

        assert_eq!(user.role, ROLE_USER);
        assert!(user.password.is_none());
        assert!(user.id.is_none());
    }

    #[test]
    fn update_rejects_unknown_keys() {
        let result: Result<UpdateUser, _> =
            serde_json::from_value(json!({"name": "New", "mobile": "123"}));
        assert!(result.is_err());
    }

    #[test]
    fn update_set_document_keeps_only_provided_fields() {
        let update: UpdateUser =
            serde_json::from_value(json!({"name": "New", "location": "Chennai"})).unwrap();
        let set = update.to_set_document();
        assert_eq!(set.get_str("name").unwrap(), "New");
        assert_eq!(set.get_str("location").unwrap(), "Chennai");
        assert!(!set.contains_key("email"));
        assert!(!set.contains_key("password"));
    }

    #[test]
    fn response_never_carries_a_password() {
        let user = NewUser {
            name: "Shri".into(),
            mobile: "9876543210".into(),
            email: Some("shri@example.com".into()),
            location: None,
            password: Some("secret".into()),
        }
        .into_user();

        let value = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["mobile"], "9876543210");
    }
}
