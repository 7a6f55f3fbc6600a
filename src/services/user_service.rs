//! User service - registration and admin-side user management.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use std::sync::Arc;

use crate::domain::{NewUser, UpdateUser, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{is_duplicate_key, Store};

/// User service trait for dependency injection
#[async_trait]
pub trait UserService: Send + Sync {
    /// Insert a new user; fails with a conflict when the mobile exists
    async fn create(&self, user: NewUser) -> AppResult<()>;

    /// List every user
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Apply a partial update to the user with the given mobile
    async fn update_by_mobile(&self, mobile: &str, update: UpdateUser) -> AppResult<()>;

    /// Delete the user with the given mobile
    async fn delete_by_mobile(&self, mobile: &str) -> AppResult<()>;
}

/// Concrete implementation of UserService backed by the document store
pub struct UserManager {
    store: Arc<Store>,
}

impl UserManager {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create(&self, user: NewUser) -> AppResult<()> {
        // Uniqueness rides on the unique mobile index; a concurrent
        // duplicate registration loses with a duplicate-key error
        // instead of racing a separate existence query.
        self.store
            .users()
            .insert_one(user.into_user())
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::conflict("Mobile")
                } else {
                    e.into()
                }
            })?;
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let users = self.store.users().find(doc! {}).await?.try_collect().await?;
        Ok(users)
    }

    async fn update_by_mobile(&self, mobile: &str, update: UpdateUser) -> AppResult<()> {
        if update.is_empty() {
            // Nothing to write; still report whether the user exists.
            self.store
                .users()
                .find_one(doc! { "mobile": mobile })
                .await?
                .ok_or_not_found("User")?;
            return Ok(());
        }

        self.store
            .users()
            .find_one_and_update(
                doc! { "mobile": mobile },
                doc! { "$set": update.to_set_document() },
            )
            .await?
            .ok_or_not_found("User")?;
        Ok(())
    }

    async fn delete_by_mobile(&self, mobile: &str) -> AppResult<()> {
        self.store
            .users()
            .find_one_and_delete(doc! { "mobile": mobile })
            .await?
            .ok_or_not_found("User")?;
        Ok(())
    }
}
