//! Authentication handlers: admin login, user login, user registration.

use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{AdminResponse, NewUser, UserResponse};
use crate::errors::AppResult;
use crate::types::Envelope;

/// Admin login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AdminLoginRequest {
    /// Admin email address
    #[validate(length(min = 1, message = "Email is required"))]
    #[schema(example = "admin@example.com")]
    pub email: String,
    /// Admin password
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UserLoginRequest {
    /// Mobile number the account was registered with
    #[validate(length(min = 1, message = "Mobile is required"))]
    #[schema(example = "9876543210")]
    pub mobile: String,
    /// Account password
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Payload of a successful admin login
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminLoginPayload {
    pub admin: AdminResponse,
}

/// Payload of a successful user login
#[derive(Debug, Serialize, ToSchema)]
pub struct UserLoginPayload {
    pub user: UserResponse,
}

/// Admin login
#[utoipa::path(
    post,
    path = "/shri_admin_login",
    tag = "Auth",
    request_body = AdminLoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AdminLoginPayload),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn admin_login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AdminLoginRequest>,
) -> AppResult<Envelope<AdminLoginPayload>> {
    let admin = state
        .auth_service
        .admin_login(&payload.email, &payload.password)
        .await?;

    Ok(Envelope::with_payload(AdminLoginPayload {
        admin: admin.into(),
    }))
}

/// User login
#[utoipa::path(
    post,
    path = "/shri_user_login",
    tag = "Auth",
    request_body = UserLoginRequest,
    responses(
        (status = 200, description = "Login successful", body = UserLoginPayload),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn user_login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserLoginRequest>,
) -> AppResult<Envelope<UserLoginPayload>> {
    let user = state
        .auth_service
        .user_login(&payload.mobile, &payload.password)
        .await?;

    Ok(Envelope::with_payload(UserLoginPayload {
        user: user.into(),
    }))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/shri_user_register",
    tag = "Auth",
    request_body = NewUser,
    responses(
        (status = 200, description = "Registered"),
        (status = 400, description = "Mobile exists")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewUser>,
) -> AppResult<Envelope> {
    state.user_service.create(payload).await?;
    Ok(Envelope::success("Registered"))
}
