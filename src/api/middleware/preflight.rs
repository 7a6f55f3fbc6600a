//! Cross-origin preflight handling.

use axum::{
    extract::Request,
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Short-circuit `OPTIONS` on any path, known or not, to an empty 204
/// before route matching happens. This runs outside the CORS layer so
/// that browser preflights, which the layer would otherwise answer
/// itself, get the same 204; the allow headers are stamped here.
pub async fn preflight(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        let mut response = (StatusCode::NO_CONTENT, Json(json!({}))).into_response();
        let headers = response.headers_mut();
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("*"),
        );
        return response;
    }

    next.run(req).await
}
