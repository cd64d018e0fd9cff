use axum::{body::Body, extract::State, http::Request, http::StatusCode, middleware::Next, response::Response};
use std::sync::Arc;

use crate::util::jwt::{JwtTokenUtils, JwtTokenUtilsImpl};

pub struct AuthState {
    pub jwt_utils: Arc<JwtTokenUtilsImpl>,
}

/// Validates the bearer token and attaches its claims to the request.
pub async fn require_auth(
    State(state): State<Arc<AuthState>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = state
        .jwt_utils
        .extract_token_from_header(auth_header)
        .map_err(|_| StatusCode::UNAUTHORIZED)?;
    let claims = state
        .jwt_utils
        .validate_access_token(&token)
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Like [`require_auth`] but only admits the admin role.
pub async fn require_admin(
    State(state): State<Arc<AuthState>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = state
        .jwt_utils
        .extract_token_from_header(auth_header)
        .map_err(|_| StatusCode::UNAUTHORIZED)?;
    let claims = state
        .jwt_utils
        .validate_access_token(&token)
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    if claims.role != "admin" {
        return Err(StatusCode::FORBIDDEN);
    }

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
