use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Extension, Json};
use std::sync::Arc;
use validator::Validate;

use crate::dto::client_dto::{AddClientNoteRequest, AddClientReminderRequest, CreateClientRequest, UpdateClientRequest};
use crate::dto::ApiResponse;
use crate::handler::{actor, parse_object_id, validation_error};
use crate::service::client_service::{ClientService, ClientServiceImpl};
use crate::util::error::HandlerError;
use crate::util::jwt::Claims;

pub async fn create_client_handler(
    State(service): State<Arc<ClientServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateClientRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let client = service.create_client(payload, actor(&claims)).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new("Client created", client))))
}

pub async fn list_clients_handler(
    State(service): State<Arc<ClientServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let clients = service.list_clients().await?;
    Ok(Json(ApiResponse::new("Clients fetched successfully", clients)))
}

pub async fn get_client_handler(
    State(service): State<Arc<ClientServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "client")?;
    let client = service.get_client(id).await?;
    Ok(Json(ApiResponse::new("Client fetched successfully", client)))
}

pub async fn update_client_handler(
    State(service): State<Arc<ClientServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateClientRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let id = parse_object_id(&id, "client")?;
    let client = service.update_client(id, payload, actor(&claims)).await?;
    Ok(Json(ApiResponse::new("Client updated successfully", client)))
}

pub async fn delete_client_handler(
    State(service): State<Arc<ClientServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "client")?;
    service.delete_client(id, actor(&claims)).await?;
    Ok(Json(ApiResponse::new("Client deleted successfully", ())))
}

pub async fn add_client_note_handler(
    State(service): State<Arc<ClientServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(payload): Json<AddClientNoteRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let id = parse_object_id(&id, "client")?;
    let client = service.add_note(id, payload, actor(&claims)).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new("Note added successfully", client))))
}

pub async fn add_client_reminder_handler(
    State(service): State<Arc<ClientServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(payload): Json<AddClientReminderRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let id = parse_object_id(&id, "client")?;
    let client = service.add_reminder(id, payload, actor(&claims)).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new("Reminder added successfully", client))))
}
