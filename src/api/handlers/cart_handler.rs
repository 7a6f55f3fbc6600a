//! Cart handlers.

use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{CartItemResponse, NewCartItem};
use crate::errors::AppResult;
use crate::types::Envelope;

/// Query parameters for the cart view
#[derive(Debug, Deserialize)]
pub struct CartQuery {
    pub user_id: Option<String>,
}

/// Payload of the cart listing
#[derive(Debug, Serialize, ToSchema)]
pub struct CartPayload {
    pub cart: Vec<CartItemResponse>,
}

/// Add an item to the cart
#[utoipa::path(
    post,
    path = "/shri_add_to_cart",
    tag = "Cart",
    request_body = NewCartItem,
    responses(
        (status = 200, description = "Added to cart")
    )
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewCartItem>,
) -> AppResult<Envelope> {
    state.cart_service.add(payload).await?;
    Ok(Envelope::success("Added to cart"))
}

/// List cart items for a user
#[utoipa::path(
    get,
    path = "/shri_view_cart",
    tag = "Cart",
    params(("user_id" = Option<String>, Query, description = "Owner of the cart")),
    responses(
        (status = 200, description = "Cart items for the user", body = CartPayload)
    )
)]
pub async fn view_cart(
    State(state): State<AppState>,
    Query(query): Query<CartQuery>,
) -> AppResult<Envelope<CartPayload>> {
    let items = state.cart_service.for_user(query.user_id).await?;

    Ok(Envelope::with_payload(CartPayload {
        cart: items.into_iter().map(Into::into).collect(),
    }))
}

/// Remove a cart item by id; no existence check is performed
#[utoipa::path(
    delete,
    path = "/shri_remove_from_cart/{cart_id}",
    tag = "Cart",
    params(("cart_id" = String, Path, description = "Cart item document id")),
    responses(
        (status = 200, description = "Removed from cart")
    )
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path(cart_id): Path<String>,
) -> AppResult<Envelope> {
    state.cart_service.remove(&cart_id).await?;
    Ok(Envelope::success("Removed from cart"))
}
