use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Extension, Json};
use std::sync::Arc;
use validator::Validate;

use crate::dto::misc_dto::{CreateEventRequest, UpdateEventRequest};
use crate::dto::ApiResponse;
use crate::handler::{parse_object_id, require_actor, validation_error};
use crate::service::event_service::{EventService, EventServiceImpl};
use crate::util::error::HandlerError;
use crate::util::jwt::Claims;

pub async fn create_event_handler(
    State(service): State<Arc<EventServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let owner = require_actor(&claims)?;
    let event = service.create(payload, owner).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new("Event created successfully", event))))
}

pub async fn list_my_events_handler(
    State(service): State<Arc<EventServiceImpl>>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, HandlerError> {
    let owner = require_actor(&claims)?;
    let events = service.list_for_user(owner).await?;
    Ok(Json(ApiResponse::new("Events fetched successfully", events)))
}

pub async fn get_event_handler(
    State(service): State<Arc<EventServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "event")?;
    let event = service.get(id).await?;
    Ok(Json(ApiResponse::new("Event fetched successfully", event)))
}

pub async fn update_event_handler(
    State(service): State<Arc<EventServiceImpl>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateEventRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let id = parse_object_id(&id, "event")?;
    let event = service.update(id, payload).await?;
    Ok(Json(ApiResponse::new("Event updated successfully", event)))
}

pub async fn delete_event_handler(
    State(service): State<Arc<EventServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "event")?;
    service.delete(id).await?;
    Ok(Json(ApiResponse::new("Event deleted successfully", ())))
}
