use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Extension, Json};
use std::sync::Arc;
use validator::Validate;

use crate::dto::subscription_dto::{AddSubscriptionNoteRequest, CreateSubscriptionRequest, UpdateSubscriptionRequest};
use crate::dto::ApiResponse;
use crate::handler::{actor, parse_object_id, validation_error};
use crate::service::subscription_service::{SubscriptionService, SubscriptionServiceImpl};
use crate::util::error::HandlerError;
use crate::util::jwt::Claims;

pub async fn create_subscription_handler(
    State(service): State<Arc<SubscriptionServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateSubscriptionRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let subscription = service.create_subscription(payload, actor(&claims)).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new("Subscription created successfully", subscription))))
}

pub async fn list_subscriptions_handler(
    State(service): State<Arc<SubscriptionServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let subscriptions = service.list_subscriptions().await?;
    Ok(Json(ApiResponse::new("Subscriptions fetched successfully", subscriptions)))
}

pub async fn list_subscriptions_by_client_handler(
    State(service): State<Arc<SubscriptionServiceImpl>>,
    Path(client_id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let client_id = parse_object_id(&client_id, "client")?;
    let subscriptions = service.list_by_client(client_id).await?;
    Ok(Json(ApiResponse::new("Subscriptions fetched successfully", subscriptions)))
}

pub async fn get_subscription_handler(
    State(service): State<Arc<SubscriptionServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "subscription")?;
    let subscription = service.get_subscription(id).await?;
    Ok(Json(ApiResponse::new("Subscription fetched successfully", subscription)))
}

pub async fn update_subscription_handler(
    State(service): State<Arc<SubscriptionServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateSubscriptionRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let id = parse_object_id(&id, "subscription")?;
    let subscription = service.update_subscription(id, payload, actor(&claims)).await?;
    Ok(Json(ApiResponse::new("Subscription updated successfully", subscription)))
}

pub async fn delete_subscription_handler(
    State(service): State<Arc<SubscriptionServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "subscription")?;
    service.delete_subscription(id, actor(&claims)).await?;
    Ok(Json(ApiResponse::new("Subscription deleted successfully", ())))
}

pub async fn add_subscription_note_handler(
    State(service): State<Arc<SubscriptionServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(payload): Json<AddSubscriptionNoteRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let id = parse_object_id(&id, "subscription")?;
    let subscription = service.add_note(id, payload, actor(&claims)).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new("Note added successfully", subscription))))
}
