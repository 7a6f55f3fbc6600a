//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Pagination
// =============================================================================

/// Default number of products per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default starting page number (1-indexed)
pub const DEFAULT_PAGE_NUMBER: usize = 1;

// =============================================================================
// Accounts
// =============================================================================

/// Password assigned when an admin creates a user without one
pub const DEFAULT_USER_PASSWORD: &str = "default123";

/// Role stored on every registered user document
pub const ROLE_USER: &str = "user";

// =============================================================================
// Orders
// =============================================================================

/// Status stamped on every freshly placed order
pub const ORDER_STATUS_PLACED: &str = "placed";

// =============================================================================
// Catalog
// =============================================================================

/// Upper-bound sentinel for lexicographic prefix search on product names.
/// U+F8FF sorts after every code point that can appear in a product name,
/// so `[key, key + U+F8FF]` covers exactly the names starting with `key`.
pub const PREFIX_SEARCH_MAX_CHAR: char = '\u{f8ff}';

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

/// Default MongoDB connection URL (for development)
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";

/// Default database name
pub const DEFAULT_DATABASE_NAME: &str = "shri_backend";

/// Admin collection name
pub const COLLECTION_ADMINS: &str = "shri_admins";

/// User collection name
pub const COLLECTION_USERS: &str = "shri_users";

/// Product collection name
pub const COLLECTION_PRODUCTS: &str = "shri_products";

/// Cart collection name
pub const COLLECTION_CART: &str = "shri_cart";

/// Order collection name
pub const COLLECTION_ORDERS: &str = "shri_orders";
