use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Extension, Json};
use std::sync::Arc;
use validator::Validate;

use crate::dto::misc_dto::{CreateContactPersonRequest, UpdateContactPersonRequest};
use crate::dto::ApiResponse;
use crate::handler::{actor, parse_object_id, validation_error};
use crate::service::contact_person_service::{ContactPersonService, ContactPersonServiceImpl};
use crate::util::error::HandlerError;
use crate::util::jwt::Claims;

pub async fn create_contact_person_handler(
    State(service): State<Arc<ContactPersonServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateContactPersonRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let contact = service.create(payload, actor(&claims)).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new("Contact person created successfully", contact))))
}

pub async fn list_contact_persons_handler(
    State(service): State<Arc<ContactPersonServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let contacts = service.list().await?;
    Ok(Json(ApiResponse::new("Contact persons fetched successfully", contacts)))
}

pub async fn list_contact_persons_by_client_handler(
    State(service): State<Arc<ContactPersonServiceImpl>>,
    Path(client_id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let client_id = parse_object_id(&client_id, "client")?;
    let contacts = service.list_by_client(client_id).await?;
    Ok(Json(ApiResponse::new("Contact persons fetched successfully", contacts)))
}

pub async fn get_contact_person_handler(
    State(service): State<Arc<ContactPersonServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "contact person")?;
    let contact = service.get(id).await?;
    Ok(Json(ApiResponse::new("Contact person fetched successfully", contact)))
}

pub async fn update_contact_person_handler(
    State(service): State<Arc<ContactPersonServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateContactPersonRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let id = parse_object_id(&id, "contact person")?;
    let contact = service.update(id, payload, actor(&claims)).await?;
    Ok(Json(ApiResponse::new("Contact person updated successfully", contact)))
}

pub async fn delete_contact_person_handler(
    State(service): State<Arc<ContactPersonServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "contact person")?;
    service.delete(id, actor(&claims)).await?;
    Ok(Json(ApiResponse::new("Contact person deleted successfully", ())))
}
