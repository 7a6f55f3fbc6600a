//! Authentication service - admin and user logins.
//!
//! Credentials are compared against the stored documents as-is; there
//! is no token issuance, a successful login simply returns the account.

use async_trait::async_trait;
use mongodb::bson::doc;
use std::sync::Arc;

use crate::domain::{Admin, User};
use crate::errors::{AppError, AppResult};
use crate::infra::Store;

/// Authentication service trait for dependency injection
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Find the admin by email and check the password
    async fn admin_login(&self, email: &str, password: &str) -> AppResult<Admin>;

    /// Find the user by mobile and check the password
    async fn user_login(&self, mobile: &str, password: &str) -> AppResult<User>;
}

/// Concrete implementation of AuthService backed by the document store
pub struct Authenticator {
    store: Arc<Store>,
}

impl Authenticator {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn admin_login(&self, email: &str, password: &str) -> AppResult<Admin> {
        let admin = self.store.admins().find_one(doc! { "email": email }).await?;

        match admin {
            Some(admin) if admin.password == password => Ok(admin),
            _ => Err(AppError::InvalidCredentials),
        }
    }

    async fn user_login(&self, mobile: &str, password: &str) -> AppResult<User> {
        let user = self.store.users().find_one(doc! { "mobile": mobile }).await?;

        // A user registered without a password can never log in.
        match user {
            Some(user) if user.password.as_deref() == Some(password) => Ok(user),
            _ => Err(AppError::InvalidCredentials),
        }
    }
}
