//! Service container - centralized service construction and access.

use std::sync::Arc;

use super::{
    AuthService, Authenticator, CartManager, CartService, CatalogManager, CatalogService,
    OrderManager, OrderService, UserManager, UserService,
};
use crate::infra::Store;

/// Holds one instance of every application service
pub struct Services {
    auth: Arc<dyn AuthService>,
    users: Arc<dyn UserService>,
    catalog: Arc<dyn CatalogService>,
    cart: Arc<dyn CartService>,
    orders: Arc<dyn OrderService>,
}

impl Services {
    /// Wire every service to the shared store
    pub fn from_store(store: Arc<Store>) -> Self {
        Self {
            auth: Arc::new(Authenticator::new(store.clone())),
            users: Arc::new(UserManager::new(store.clone())),
            catalog: Arc::new(CatalogManager::new(store.clone())),
            cart: Arc::new(CartManager::new(store.clone())),
            orders: Arc::new(OrderManager::new(store)),
        }
    }

    pub fn auth(&self) -> Arc<dyn AuthService> {
        self.auth.clone()
    }

    pub fn users(&self) -> Arc<dyn UserService> {
        self.users.clone()
    }

    pub fn catalog(&self) -> Arc<dyn CatalogService> {
        self.catalog.clone()
    }

    pub fn cart(&self) -> Arc<dyn CartService> {
        self.cart.clone()
    }

    pub fn orders(&self) -> Arc<dyn OrderService> {
        self.orders.clone()
    }
}
