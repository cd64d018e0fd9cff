use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Extension, Json};
use std::sync::Arc;
use validator::Validate;

use crate::dto::misc_dto::{AddTicketCommentRequest, CreateTicketRequest, UpdateTicketRequest};
use crate::dto::ApiResponse;
use crate::handler::{actor, parse_object_id, require_actor, validation_error};
use crate::service::ticket_service::{TicketService, TicketServiceImpl};
use crate::util::error::HandlerError;
use crate::util::jwt::Claims;

pub async fn create_ticket_handler(
    State(service): State<Arc<TicketServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateTicketRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let ticket = service.create(payload, actor(&claims)).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new("Ticket created successfully", ticket))))
}

pub async fn list_tickets_handler(
    State(service): State<Arc<TicketServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let tickets = service.list().await?;
    Ok(Json(ApiResponse::new("Tickets fetched successfully", tickets)))
}

pub async fn list_tickets_by_client_handler(
    State(service): State<Arc<TicketServiceImpl>>,
    Path(client_id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let client_id = parse_object_id(&client_id, "client")?;
    let tickets = service.list_by_client(client_id).await?;
    Ok(Json(ApiResponse::new("Tickets fetched successfully", tickets)))
}

pub async fn get_ticket_handler(
    State(service): State<Arc<TicketServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "ticket")?;
    let ticket = service.get(id).await?;
    Ok(Json(ApiResponse::new("Ticket fetched successfully", ticket)))
}

pub async fn update_ticket_handler(
    State(service): State<Arc<TicketServiceImpl>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTicketRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let id = parse_object_id(&id, "ticket")?;
    let ticket = service.update(id, payload).await?;
    Ok(Json(ApiResponse::new("Ticket updated successfully", ticket)))
}

pub async fn delete_ticket_handler(
    State(service): State<Arc<TicketServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "ticket")?;
    service.delete(id).await?;
    Ok(Json(ApiResponse::new("Ticket deleted successfully", ())))
}

pub async fn add_ticket_comment_handler(
    State(service): State<Arc<TicketServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(payload): Json<AddTicketCommentRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let user = require_actor(&claims)?;
    let id = parse_object_id(&id, "ticket")?;
    let ticket = service.add_comment(id, payload, user).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new("Comment added successfully", ticket))))
}
