//! Order handlers: placement, listings and status updates.

use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{NewOrder, OrderResponse, UpdateOrderStatus};
use crate::errors::AppResult;
use crate::types::Envelope;

/// Query parameters for the per-user order view
#[derive(Debug, Deserialize)]
pub struct OrdersQuery {
    pub user_id: Option<String>,
}

/// Payload of the order listings
#[derive(Debug, Serialize, ToSchema)]
pub struct OrdersPayload {
    pub orders: Vec<OrderResponse>,
}

/// Payload of a successful order placement
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderPlacedPayload {
    /// Generated document id of the new order
    #[schema(example = "65f1c0ffee0ddba11ad0beef")]
    pub order_id: String,
}

fn to_responses(orders: Vec<crate::domain::Order>) -> Vec<OrderResponse> {
    orders.into_iter().map(Into::into).collect()
}

/// Place an order; it starts in the `placed` status
#[utoipa::path(
    post,
    path = "/shri_place_order",
    tag = "Orders",
    request_body = NewOrder,
    responses(
        (status = 200, description = "Order placed", body = OrderPlacedPayload)
    )
)]
pub async fn place_order(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewOrder>,
) -> AppResult<Envelope<OrderPlacedPayload>> {
    let order_id = state.order_service.place(payload).await?;
    Ok(Envelope::with_payload(OrderPlacedPayload { order_id }))
}

/// List orders for a user
#[utoipa::path(
    get,
    path = "/shri_view_orders",
    tag = "Orders",
    params(("user_id" = Option<String>, Query, description = "Owner of the orders")),
    responses(
        (status = 200, description = "Orders for the user", body = OrdersPayload)
    )
)]
pub async fn view_orders(
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> AppResult<Envelope<OrdersPayload>> {
    let orders = state.order_service.for_user(query.user_id).await?;
    Ok(Envelope::with_payload(OrdersPayload {
        orders: to_responses(orders),
    }))
}

/// List every order
#[utoipa::path(
    get,
    path = "/shri_admin_view_all_orders",
    tag = "Orders",
    responses(
        (status = 200, description = "All orders", body = OrdersPayload)
    )
)]
pub async fn view_all_orders(
    State(state): State<AppState>,
) -> AppResult<Envelope<OrdersPayload>> {
    let orders = state.order_service.list().await?;
    Ok(Envelope::with_payload(OrdersPayload {
        orders: to_responses(orders),
    }))
}

/// List orders with the given status
#[utoipa::path(
    get,
    path = "/shri_admin_view_orders_by_status/{status}",
    tag = "Orders",
    params(("status" = String, Path, description = "Order status to filter by")),
    responses(
        (status = 200, description = "Orders in the status", body = OrdersPayload)
    )
)]
pub async fn view_orders_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> AppResult<Envelope<OrdersPayload>> {
    let orders = state.order_service.by_status(&status).await?;
    Ok(Envelope::with_payload(OrdersPayload {
        orders: to_responses(orders),
    }))
}

/// Set the status of an order; no existence check is performed
#[utoipa::path(
    put,
    path = "/shri_update_order_status/{order_id}",
    tag = "Orders",
    params(("order_id" = String, Path, description = "Order document id")),
    request_body = UpdateOrderStatus,
    responses(
        (status = 200, description = "Order updated")
    )
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateOrderStatus>,
) -> AppResult<Envelope> {
    state
        .order_service
        .update_status(&order_id, &payload.status)
        .await?;
    Ok(Envelope::success("Order updated"))
}
