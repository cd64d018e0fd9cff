use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use validator::Validate;

use crate::dto::user_dto::{CreateUserRequest, LoginRequest, RefreshTokenRequest, UpdateUserRequest};
use crate::dto::ApiResponse;
use crate::handler::{parse_object_id, validation_error};
use crate::service::user_service::{UserService, UserServiceImpl};
use crate::util::error::HandlerError;

pub async fn login_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let response = service.login(payload.email, payload.password).await?;
    Ok(Json(ApiResponse::new("Logged in successfully", response)))
}

pub async fn refresh_token_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Json(payload): Json<RefreshTokenRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let tokens = service.refresh_token(payload.refresh_token).await?;
    Ok(Json(ApiResponse::new("Token refreshed successfully", tokens)))
}

pub async fn create_user_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let user = service.create_user(payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new("User created successfully", user))))
}

pub async fn list_users_handler(
    State(service): State<Arc<UserServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let users = service.list_users().await?;
    Ok(Json(ApiResponse::new("Users fetched successfully", users)))
}

pub async fn get_user_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "user")?;
    let user = service.get_user(id).await?;
    Ok(Json(ApiResponse::new("User fetched successfully", user)))
}

pub async fn update_user_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let id = parse_object_id(&id, "user")?;
    let user = service.update_user(id, payload).await?;
    Ok(Json(ApiResponse::new("User updated successfully", user)))
}

pub async fn delete_user_handler(
    State(service): State<Arc<UserServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "user")?;
    service.delete_user(id).await?;
    Ok(Json(ApiResponse::new("User deleted successfully", ())))
}
