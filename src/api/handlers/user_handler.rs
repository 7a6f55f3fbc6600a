//! Admin-side user management handlers.

use axum::extract::{Path, State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::DEFAULT_USER_PASSWORD;
use crate::domain::{NewUser, UpdateUser, UserResponse};
use crate::errors::AppResult;
use crate::types::Envelope;

/// Payload of the user listing
#[derive(Debug, Serialize, ToSchema)]
pub struct UsersPayload {
    pub users: Vec<UserResponse>,
}

/// Add a user on behalf of an admin
#[utoipa::path(
    post,
    path = "/shri_admin_add_user",
    tag = "Users",
    request_body = NewUser,
    responses(
        (status = 200, description = "User added"),
        (status = 400, description = "Mobile exists")
    )
)]
pub async fn add_user(
    State(state): State<AppState>,
    ValidatedJson(mut payload): ValidatedJson<NewUser>,
) -> AppResult<Envelope> {
    // Admin-created accounts get a known starter password when none
    // is supplied; self-registration does not.
    payload
        .password
        .get_or_insert_with(|| DEFAULT_USER_PASSWORD.to_string());

    state.user_service.create(payload).await?;
    Ok(Envelope::success("User added"))
}

/// List every user
#[utoipa::path(
    get,
    path = "/shri_admin_view_all_users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = UsersPayload)
    )
)]
pub async fn view_all_users(
    State(state): State<AppState>,
) -> AppResult<Envelope<UsersPayload>> {
    let users = state.user_service.list().await?;

    Ok(Envelope::with_payload(UsersPayload {
        users: users.into_iter().map(Into::into).collect(),
    }))
}

/// Update the user with the given mobile
#[utoipa::path(
    put,
    path = "/shri_admin_update_user/{mobile}",
    tag = "Users",
    params(("mobile" = String, Path, description = "Mobile number of the user")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(mobile): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateUser>,
) -> AppResult<Envelope> {
    state.user_service.update_by_mobile(&mobile, payload).await?;
    Ok(Envelope::success("User updated"))
}

/// Delete the user with the given mobile
#[utoipa::path(
    delete,
    path = "/shri_admin_delete_user/{mobile}",
    tag = "Users",
    params(("mobile" = String, Path, description = "Mobile number of the user")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(mobile): Path<String>,
) -> AppResult<Envelope> {
    state.user_service.delete_by_mobile(&mobile).await?;
    Ok(Envelope::success("User deleted"))
}
