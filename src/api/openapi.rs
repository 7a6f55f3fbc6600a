//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{
    auth_handler, cart_handler, order_handler, product_handler, user_handler,
};
use crate::domain::{
    AdminResponse, CartItemResponse, NewCartItem, NewOrder, NewUser, OrderLine, OrderResponse,
    UpdateOrderStatus, UpdateUser, UserResponse,
};

/// OpenAPI documentation for the Shri backend API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shri Backend API",
        version = "0.1.0",
        description = "CRUD API over the shri_* document collections",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Auth endpoints
        auth_handler::admin_login,
        auth_handler::user_login,
        auth_handler::register,
        // User endpoints
        user_handler::add_user,
        user_handler::view_all_users,
        user_handler::update_user,
        user_handler::delete_user,
        // Product endpoints
        product_handler::add_product,
        product_handler::view_products,
        product_handler::view_products_by_category,
        product_handler::search_products,
        product_handler::view_products_paginated,
        // Cart endpoints
        cart_handler::add_to_cart,
        cart_handler::view_cart,
        cart_handler::remove_from_cart,
        // Order endpoints
        order_handler::place_order,
        order_handler::view_orders,
        order_handler::view_all_orders,
        order_handler::view_orders_by_status,
        order_handler::update_order_status,
    ),
    components(
        schemas(
            // Domain types
            AdminResponse,
            UserResponse,
            NewUser,
            UpdateUser,
            NewCartItem,
            CartItemResponse,
            NewOrder,
            OrderLine,
            OrderResponse,
            UpdateOrderStatus,
            // Handler types
            auth_handler::AdminLoginRequest,
            auth_handler::UserLoginRequest,
            auth_handler::AdminLoginPayload,
            auth_handler::UserLoginPayload,
            user_handler::UsersPayload,
            cart_handler::CartPayload,
            order_handler::OrdersPayload,
            order_handler::OrderPlacedPayload,
        )
    ),
    tags(
        (name = "Auth", description = "Admin and user logins, user registration"),
        (name = "Users", description = "Admin-side user management"),
        (name = "Products", description = "Catalog operations"),
        (name = "Cart", description = "Cart operations"),
        (name = "Orders", description = "Order placement and management")
    )
)]
pub struct ApiDoc;
