//! Application route configuration.
//!
//! The route table is declarative and registered in a fixed priority
//! order: root, admin routes, user routes, product routes, cart
//! routes, order routes. Trailing path segments carry identifiers
//! (mobile numbers or document ids).

use axum::{
    extract::State,
    http::{Method, StatusCode},
    middleware,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{auth_handler, cart_handler, order_handler, product_handler, user_handler};
use super::middleware::preflight;
use super::openapi::ApiDoc;
use super::AppState;
use crate::errors::AppError;
use crate::types::Envelope;

/// Create the application router with all routes configured.
///
/// Every method router carries `endpoint_not_found` as its fallback,
/// so a wrong method on a known path gets the same 404 envelope as an
/// unknown path instead of axum's bare 405.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Root and health
        .route("/", get(root).fallback(endpoint_not_found))
        .route("/health", get(health).fallback(endpoint_not_found))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Admin routes
        .route(
            "/shri_admin_login",
            post(auth_handler::admin_login).fallback(endpoint_not_found),
        )
        .route(
            "/shri_admin_add_user",
            post(user_handler::add_user).fallback(endpoint_not_found),
        )
        .route(
            "/shri_admin_view_all_users",
            get(user_handler::view_all_users).fallback(endpoint_not_found),
        )
        .route(
            "/shri_admin_update_user/:mobile",
            put(user_handler::update_user).fallback(endpoint_not_found),
        )
        .route(
            "/shri_admin_delete_user/:mobile",
            delete(user_handler::delete_user).fallback(endpoint_not_found),
        )
        .route(
            "/shri_admin_view_all_orders",
            get(order_handler::view_all_orders).fallback(endpoint_not_found),
        )
        .route(
            "/shri_admin_view_orders_by_status/:status",
            get(order_handler::view_orders_by_status).fallback(endpoint_not_found),
        )
        // User routes
        .route(
            "/shri_user_register",
            post(auth_handler::register).fallback(endpoint_not_found),
        )
        .route(
            "/shri_user_login",
            post(auth_handler::user_login).fallback(endpoint_not_found),
        )
        // Product routes
        .route(
            "/shri_add_product",
            post(product_handler::add_product).fallback(endpoint_not_found),
        )
        .route(
            "/shri_view_products",
            get(product_handler::view_products).fallback(endpoint_not_found),
        )
        .route(
            "/shri_view_products_by_category/:category",
            get(product_handler::view_products_by_category).fallback(endpoint_not_found),
        )
        .route(
            "/shri_search_products/:key",
            get(product_handler::search_products).fallback(endpoint_not_found),
        )
        .route(
            "/shri_view_products_paginated",
            get(product_handler::view_products_paginated).fallback(endpoint_not_found),
        )
        // Cart routes
        .route(
            "/shri_add_to_cart",
            post(cart_handler::add_to_cart).fallback(endpoint_not_found),
        )
        .route(
            "/shri_view_cart",
            get(cart_handler::view_cart).fallback(endpoint_not_found),
        )
        .route(
            "/shri_remove_from_cart/:cart_id",
            delete(cart_handler::remove_from_cart).fallback(endpoint_not_found),
        )
        // Order routes
        .route(
            "/shri_place_order",
            post(order_handler::place_order).fallback(endpoint_not_found),
        )
        .route(
            "/shri_view_orders",
            get(order_handler::view_orders).fallback(endpoint_not_found),
        )
        .route(
            "/shri_update_order_status/:order_id",
            put(order_handler::update_order_status).fallback(endpoint_not_found),
        )
        // Anything else
        .fallback(endpoint_not_found)
        // Global middleware; the preflight middleware sits outermost so
        // every OPTIONS request, browser preflight headers or not, gets
        // the empty 204 before the CORS layer can answer it. Responses
        // from the routes still pick up their CORS headers from the
        // inner layer.
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .layer(middleware::from_fn(preflight))
        .with_state(state)
}

/// All origins, the five API methods
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

/// Root endpoint
async fn root() -> Envelope {
    Envelope::success("Shri Backend API running")
}

/// Unmatched path/method combination
async fn endpoint_not_found() -> AppError {
    AppError::NotFound("Endpoint".to_string())
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    services: ServiceHealth,
}

/// Individual service health status
#[derive(Serialize)]
struct ServiceHealth {
    store: ServiceStatus,
}

/// Service status
#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint with store connectivity check
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let store_status = match &state.store {
        Some(store) => match store.ping().await {
            Ok(_) => ServiceStatus {
                status: "healthy",
                error: None,
            },
            Err(e) => ServiceStatus {
                status: "unhealthy",
                error: Some(e.to_string()),
            },
        },
        None => ServiceStatus {
            status: "unconfigured",
            error: None,
        },
    };

    let all_healthy = store_status.status == "healthy";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" },
        services: ServiceHealth {
            store: store_status,
        },
    };

    let status_code = if all_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
