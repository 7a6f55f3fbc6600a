//! Integration tests for API endpoints.
//!
//! These tests drive the real router through mock services, so route
//! matching, envelopes, and status codes are exercised without a
//! running document store.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use mongodb::bson::oid::ObjectId;
use serde_json::{json, Value};
use tower::ServiceExt;

use shri_backend::domain::{
    Admin, CartItem, NewCartItem, NewOrder, NewProduct, NewUser, Order, Product, UpdateUser, User,
};
use shri_backend::errors::{AppError, AppResult};
use shri_backend::services::{AuthService, CartService, CatalogService, OrderService, UserService};
use shri_backend::{api::create_router, AppState};

const KNOWN_MOBILE: &str = "9876543210";
const KNOWN_PASSWORD: &str = "pw123";
const ADMIN_EMAIL: &str = "admin@example.com";
const ADMIN_PASSWORD: &str = "letmein";

// =============================================================================
// Mock Services
// =============================================================================

fn known_user() -> User {
    let mut user = NewUser {
        name: "Shri".to_string(),
        mobile: KNOWN_MOBILE.to_string(),
        email: Some("shri@example.com".to_string()),
        location: Some("Chennai".to_string()),
        password: Some(KNOWN_PASSWORD.to_string()),
    }
    .into_user();
    user.id = Some(ObjectId::new());
    user
}

struct MockAuthService;

#[async_trait]
impl AuthService for MockAuthService {
    async fn admin_login(&self, email: &str, password: &str) -> AppResult<Admin> {
        if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
            Ok(Admin {
                id: Some(ObjectId::new()),
                email: email.to_string(),
                password: password.to_string(),
                role: "admin".to_string(),
            })
        } else {
            Err(AppError::InvalidCredentials)
        }
    }

    async fn user_login(&self, mobile: &str, password: &str) -> AppResult<User> {
        if mobile == KNOWN_MOBILE && password == KNOWN_PASSWORD {
            Ok(known_user())
        } else {
            Err(AppError::InvalidCredentials)
        }
    }
}

/// Records created users; treats KNOWN_MOBILE as already registered
#[derive(Default)]
struct MockUserService {
    created: Mutex<Vec<NewUser>>,
}

#[async_trait]
impl UserService for MockUserService {
    async fn create(&self, user: NewUser) -> AppResult<()> {
        if user.mobile == KNOWN_MOBILE {
            return Err(AppError::conflict("Mobile"));
        }
        self.created.lock().unwrap().push(user);
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let mut users = vec![known_user()];
        users.extend(
            self.created
                .lock()
                .unwrap()
                .iter()
                .cloned()
                .map(|new| {
                    let mut user = new.into_user();
                    user.id = Some(ObjectId::new());
                    user
                }),
        );
        Ok(users)
    }

    async fn update_by_mobile(&self, mobile: &str, _update: UpdateUser) -> AppResult<()> {
        if mobile == KNOWN_MOBILE {
            Ok(())
        } else {
            Err(AppError::NotFound("User".to_string()))
        }
    }

    async fn delete_by_mobile(&self, mobile: &str) -> AppResult<()> {
        if mobile == KNOWN_MOBILE {
            Ok(())
        } else {
            Err(AppError::NotFound("User".to_string()))
        }
    }
}

/// Serves a fixed catalog of sequentially named products
struct MockCatalogService {
    count: usize,
}

fn test_product(i: usize) -> Product {
    let mut product = NewProduct {
        name: format!("Product {i:02}"),
        category: "misc".to_string(),
        price: Some(i as f64),
        extra: Default::default(),
    }
    .into_product();
    product.id = Some(ObjectId::new());
    product
}

#[async_trait]
impl CatalogService for MockCatalogService {
    async fn add(&self, _product: NewProduct) -> AppResult<()> {
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<Product>> {
        Ok((0..self.count).map(test_product).collect())
    }

    async fn by_category(&self, category: &str) -> AppResult<Vec<Product>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|p| p.category == category)
            .collect())
    }

    async fn search(&self, key: &str) -> AppResult<Vec<Product>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|p| p.name.starts_with(key))
            .collect())
    }
}

struct MockCartService;

#[async_trait]
impl CartService for MockCartService {
    async fn add(&self, _item: NewCartItem) -> AppResult<()> {
        Ok(())
    }

    async fn for_user(&self, user_id: Option<String>) -> AppResult<Vec<CartItem>> {
        Ok(vec![CartItem {
            id: Some(ObjectId::new()),
            user_id,
            product_id: Some("p1".to_string()),
            product_name: Some("Masala Tea".to_string()),
            quantity: 2,
            price: Some(45.0),
        }])
    }

    async fn remove(&self, cart_id: &str) -> AppResult<()> {
        // Mirrors the real service: malformed ids are rejected, unknown
        // but well-formed ids are deleted blindly.
        ObjectId::parse_str(cart_id)
            .map_err(|_| AppError::bad_request("Invalid cart id"))?;
        Ok(())
    }
}

/// Stores placed orders in memory so placement and listing agree
#[derive(Default)]
struct MockOrderService {
    orders: Mutex<Vec<Order>>,
}

#[async_trait]
impl OrderService for MockOrderService {
    async fn place(&self, order: NewOrder) -> AppResult<String> {
        let mut order = order.into_order();
        let id = ObjectId::new();
        order.id = Some(id);
        self.orders.lock().unwrap().push(order);
        Ok(id.to_hex())
    }

    async fn for_user(&self, user_id: Option<String>) -> AppResult<Vec<Order>> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list(&self) -> AppResult<Vec<Order>> {
        Ok(self.orders.lock().unwrap().clone())
    }

    async fn by_status(&self, status: &str) -> AppResult<Vec<Order>> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.status == status)
            .cloned()
            .collect())
    }

    async fn update_status(&self, order_id: &str, _status: &str) -> AppResult<()> {
        ObjectId::parse_str(order_id)
            .map_err(|_| AppError::bad_request("Invalid order id"))?;
        Ok(())
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

fn test_router() -> Router {
    test_router_with_catalog(0)
}

fn test_router_with_catalog(product_count: usize) -> Router {
    let state = AppState::new(
        Arc::new(MockAuthService),
        Arc::new(MockUserService::default()),
        Arc::new(MockCatalogService {
            count: product_count,
        }),
        Arc::new(MockCartService),
        Arc::new(MockOrderService::default()),
    );
    create_router(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn with_json_body(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Routing and preflight
// =============================================================================

#[tokio::test]
async fn root_returns_running_banner() {
    let response = test_router().oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Shri Backend API running");
}

#[tokio::test]
async fn options_short_circuits_to_204_on_any_path() {
    for uri in ["/", "/shri_view_products", "/definitely/not/a/route"] {
        let request = Request::builder()
            .method("OPTIONS")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = test_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT, "uri: {uri}");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"{}");
    }
}

#[tokio::test]
async fn browser_preflight_with_cors_headers_still_gets_204() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/shri_place_order")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .unwrap();
    let response = test_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"{}");
}

#[tokio::test]
async fn unmatched_route_returns_404_fail_envelope() {
    let response = test_router().oneshot(get("/no_such_route")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Endpoint not found");
}

#[tokio::test]
async fn wrong_method_on_known_path_gets_the_404_envelope() {
    let response = test_router().oneshot(get("/shri_admin_login")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Endpoint not found");
}

// =============================================================================
// Auth
// =============================================================================

#[tokio::test]
async fn admin_login_succeeds_with_matching_credentials() {
    let request = with_json_body(
        "POST",
        "/shri_admin_login",
        json!({"email": ADMIN_EMAIL, "password": ADMIN_PASSWORD}),
    );
    let response = test_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["admin"]["email"], ADMIN_EMAIL);
}

#[tokio::test]
async fn admin_login_rejects_wrong_password() {
    let request = with_json_body(
        "POST",
        "/shri_admin_login",
        json!({"email": ADMIN_EMAIL, "password": "nope"}),
    );
    let response = test_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn user_login_returns_user_without_password() {
    let request = with_json_body(
        "POST",
        "/shri_user_login",
        json!({"mobile": KNOWN_MOBILE, "password": KNOWN_PASSWORD}),
    );
    let response = test_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["user"]["mobile"], KNOWN_MOBILE);
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn register_with_existing_mobile_fails_with_400() {
    let request = with_json_body(
        "POST",
        "/shri_user_register",
        json!({"name": "Copy", "mobile": KNOWN_MOBILE, "password": "other"}),
    );
    let response = test_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Mobile exists");
}

#[tokio::test]
async fn register_with_fresh_mobile_succeeds() {
    let request = with_json_body(
        "POST",
        "/shri_user_register",
        json!({"name": "Fresh", "mobile": "1112223334"}),
    );
    let response = test_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Registered");
}

#[tokio::test]
async fn register_without_mobile_is_a_validation_failure() {
    let request = with_json_body("POST", "/shri_user_register", json!({"name": "NoMobile"}));
    let response = test_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["status"], "fail");
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn admin_add_user_defaults_the_password() {
    let user_service = Arc::new(MockUserService::default());
    let state = AppState::new(
        Arc::new(MockAuthService),
        user_service.clone(),
        Arc::new(MockCatalogService { count: 0 }),
        Arc::new(MockCartService),
        Arc::new(MockOrderService::default()),
    );
    let router = create_router(state);

    let request = with_json_body(
        "POST",
        "/shri_admin_add_user",
        json!({"name": "Added", "mobile": "5556667778"}),
    );
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let created = user_service.created.lock().unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].password.as_deref(), Some("default123"));
}

#[tokio::test]
async fn distinct_mobiles_both_show_up_in_the_listing() {
    let router = test_router();

    let first = with_json_body(
        "POST",
        "/shri_user_register",
        json!({"name": "A", "mobile": "1000000001"}),
    );
    let second = with_json_body(
        "POST",
        "/shri_user_register",
        json!({"name": "B", "mobile": "1000000002"}),
    );
    assert_eq!(
        router.clone().oneshot(first).await.unwrap().status(),
        StatusCode::OK
    );
    assert_eq!(
        router.clone().oneshot(second).await.unwrap().status(),
        StatusCode::OK
    );

    let response = router
        .oneshot(get("/shri_admin_view_all_users"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let mobiles: Vec<&str> = body["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["mobile"].as_str().unwrap())
        .collect();
    assert!(mobiles.contains(&"1000000001"));
    assert!(mobiles.contains(&"1000000002"));
}

#[tokio::test]
async fn updating_an_unknown_mobile_is_404() {
    let request = with_json_body(
        "PUT",
        "/shri_admin_update_user/0000000000",
        json!({"name": "Ghost"}),
    );
    let response = test_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn update_with_unknown_keys_is_rejected() {
    let request = with_json_body(
        "PUT",
        format!("/shri_admin_update_user/{KNOWN_MOBILE}").as_str(),
        json!({"name": "New", "mobile": "cannot-change"}),
    );
    let response = test_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["status"], "fail");
}

#[tokio::test]
async fn deleting_a_known_mobile_succeeds() {
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/shri_admin_delete_user/{KNOWN_MOBILE}"))
        .body(Body::empty())
        .unwrap();
    let response = test_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "User deleted");
}

// =============================================================================
// Products
// =============================================================================

#[tokio::test]
async fn pagination_slices_the_second_page_and_reports_the_full_total() {
    let router = test_router_with_catalog(25);

    let response = router
        .oneshot(get("/shri_view_products_paginated?page=2&limit=10"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["total"], 25);

    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 10);
    assert_eq!(products[0]["name"], "Product 10");
    assert_eq!(products[9]["name"], "Product 19");
}

#[tokio::test]
async fn pagination_defaults_to_first_page_of_ten() {
    let router = test_router_with_catalog(25);

    let response = router
        .oneshot(get("/shri_view_products_paginated"))
        .await
        .unwrap();
    let body = body_json(response).await;

    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 10);
    assert_eq!(products[0]["name"], "Product 00");
}

#[tokio::test]
async fn huge_page_numbers_yield_an_empty_page() {
    let router = test_router_with_catalog(25);

    let response = router
        .oneshot(get(
            "/shri_view_products_paginated?page=18446744073709551615&limit=10",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["total"], 25);
    assert!(body["products"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn search_matches_products_by_name_prefix() {
    let router = test_router_with_catalog(25);

    let response = router
        .oneshot(get("/shri_search_products/Product%202"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 5);
    assert!(products
        .iter()
        .all(|p| p["name"].as_str().unwrap().starts_with("Product 2")));
}

#[tokio::test]
async fn category_filter_splits_the_catalog() {
    let router = test_router_with_catalog(3);

    let response = router
        .clone()
        .oneshot(get("/shri_view_products_by_category/misc"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["products"].as_array().unwrap().len(), 3);

    let response = router
        .oneshot(get("/shri_view_products_by_category/beverages"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert!(body["products"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn product_listing_carries_free_form_fields_and_ids() {
    let router = test_router_with_catalog(1);

    let response = router.oneshot(get("/shri_view_products")).await.unwrap();
    let body = body_json(response).await;

    let product = &body["products"][0];
    assert_eq!(product["category"], "misc");
    assert!(product["id"].as_str().unwrap().len() == 24);
}

#[tokio::test]
async fn adding_a_product_without_a_name_fails_validation() {
    let request = with_json_body("POST", "/shri_add_product", json!({"category": "misc"}));
    let response = test_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Cart
// =============================================================================

#[tokio::test]
async fn cart_view_lists_items_under_the_cart_key() {
    let response = test_router()
        .oneshot(get("/shri_view_cart?user_id=u1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["cart"][0]["product_name"], "Masala Tea");
}

#[tokio::test]
async fn removing_a_nonexistent_cart_item_still_succeeds() {
    // Deletion is fire-and-forget: a well-formed id that matches no
    // document is not an error.
    let unknown = ObjectId::new().to_hex();
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/shri_remove_from_cart/{unknown}"))
        .body(Body::empty())
        .unwrap();
    let response = test_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Removed from cart");
}

#[tokio::test]
async fn removing_a_malformed_cart_id_is_a_400() {
    let request = Request::builder()
        .method("DELETE")
        .uri("/shri_remove_from_cart/not-hex")
        .body(Body::empty())
        .unwrap();
    let response = test_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["status"], "fail");
}

// =============================================================================
// Orders
// =============================================================================

#[tokio::test]
async fn placed_order_shows_up_in_the_users_order_list() {
    let router = test_router();

    let request = with_json_body(
        "POST",
        "/shri_place_order",
        json!({
            "user_id": "u1",
            "items": [{"product_id": "p1", "product_name": "Masala Tea", "price": 45.0}],
            "total": 45.0,
            "address": "12 Market Road",
            "payment_mode": "cod"
        }),
    );
    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
    let order_id = body["order_id"].as_str().unwrap().to_string();

    let response = router
        .oneshot(get("/shri_view_orders?user_id=u1"))
        .await
        .unwrap();
    let body = body_json(response).await;

    let orders = body["orders"].as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["id"], order_id.as_str());
    assert_eq!(orders[0]["status"], "placed");
}

#[tokio::test]
async fn status_filter_only_returns_matching_orders() {
    let router = test_router();

    let request = with_json_body(
        "POST",
        "/shri_place_order",
        json!({"user_id": "u1", "items": [], "total": 0.0}),
    );
    assert_eq!(
        router.clone().oneshot(request).await.unwrap().status(),
        StatusCode::OK
    );

    let response = router
        .clone()
        .oneshot(get("/shri_admin_view_orders_by_status/placed"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["orders"].as_array().unwrap().len(), 1);

    let response = router
        .oneshot(get("/shri_admin_view_orders_by_status/shipped"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert!(body["orders"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn updating_a_nonexistent_order_still_succeeds() {
    let unknown = ObjectId::new().to_hex();
    let request = with_json_body(
        "PUT",
        format!("/shri_update_order_status/{unknown}").as_str(),
        json!({"status": "shipped"}),
    );
    let response = test_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Order updated");
}

#[tokio::test]
async fn order_status_update_rejects_extra_fields() {
    let unknown = ObjectId::new().to_hex();
    let request = with_json_body(
        "PUT",
        format!("/shri_update_order_status/{unknown}").as_str(),
        json!({"status": "shipped", "total": 0}),
    );
    let response = test_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
