//! Document store access.
//!
//! Wraps the MongoDB client and exposes typed collection handles for
//! the five API collections. Constructed once at startup and shared
//! through `AppState`; no lazy global.

use mongodb::{
    bson::doc,
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Client, Collection, Database, IndexModel,
};

use crate::config::{
    Config, COLLECTION_ADMINS, COLLECTION_CART, COLLECTION_ORDERS, COLLECTION_PRODUCTS,
    COLLECTION_USERS,
};
use crate::domain::{Admin, CartItem, Order, Product, User};
use crate::errors::AppResult;

/// MongoDB-backed document store
pub struct Store {
    _client: Client,
    db: Database,
}

impl Store {
    /// Connect to the store and verify the connection with a ping.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let client = Client::with_uri_str(&config.mongodb_uri).await?;
        let db = client.database(&config.database_name);
        db.run_command(doc! { "ping": 1 }).await?;

        Ok(Self {
            _client: client,
            db,
        })
    }

    /// Liveness probe used by the health endpoint
    pub async fn ping(&self) -> AppResult<()> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub fn admins(&self) -> Collection<Admin> {
        self.db.collection(COLLECTION_ADMINS)
    }

    pub fn users(&self) -> Collection<User> {
        self.db.collection(COLLECTION_USERS)
    }

    pub fn products(&self) -> Collection<Product> {
        self.db.collection(COLLECTION_PRODUCTS)
    }

    pub fn cart(&self) -> Collection<CartItem> {
        self.db.collection(COLLECTION_CART)
    }

    pub fn orders(&self) -> Collection<Order> {
        self.db.collection(COLLECTION_ORDERS)
    }

    /// Create the indexes the API relies on. Idempotent.
    ///
    /// The unique index on `mobile` makes user registration atomic:
    /// a concurrent duplicate insert surfaces as a duplicate-key write
    /// error instead of racing a separate existence query.
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let options = IndexOptions::builder().unique(true).build();
        let index = IndexModel::builder()
            .keys(doc! { "mobile": 1 })
            .options(options)
            .build();
        self.users().create_index(index).await?;
        tracing::debug!("unique mobile index ensured");
        Ok(())
    }
}

/// True when the error is a unique-index violation (code 11000)
pub fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == 11000,
        _ => false,
    }
}
