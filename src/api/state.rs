//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services. The store
//! client is constructed once at startup and injected here; handlers
//! never reach for a global.

use std::sync::Arc;

use crate::infra::Store;
use crate::services::{AuthService, CartService, CatalogService, OrderService, Services, UserService};

/// Application state containing all services (DI container)
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Catalog service
    pub catalog_service: Arc<dyn CatalogService>,
    /// Cart service
    pub cart_service: Arc<dyn CartService>,
    /// Order service
    pub order_service: Arc<dyn OrderService>,
    /// Document store, used by the health probe; absent when the state
    /// is assembled from injected services in tests
    pub store: Option<Arc<Store>>,
}

impl AppState {
    /// Create application state wired to the shared store.
    ///
    /// This is the recommended way to create AppState in production.
    pub fn from_store(store: Arc<Store>) -> Self {
        let services = Services::from_store(store.clone());

        Self {
            auth_service: services.auth(),
            user_service: services.users(),
            catalog_service: services.catalog(),
            cart_service: services.cart(),
            order_service: services.orders(),
            store: Some(store),
        }
    }

    /// Create application state with manually injected services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        catalog_service: Arc<dyn CatalogService>,
        cart_service: Arc<dyn CartService>,
        order_service: Arc<dyn OrderService>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            catalog_service,
            cart_service,
            order_service,
            store: None,
        }
    }
}
