use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Extension, Json};
use std::sync::Arc;
use validator::Validate;

use crate::dto::lead_dto::{
    AddCallRequest, AddFollowUpRequest, AddLeadNoteRequest, AddReminderRequest, CreateLeadRequest,
    UpdateLeadRequest, UpdateReminderRequest,
};
use crate::dto::ApiResponse;
use crate::handler::{actor, parse_object_id, validation_error};
use crate::service::lead_service::{LeadService, LeadServiceImpl};
use crate::util::error::HandlerError;
use crate::util::jwt::Claims;

pub async fn create_lead_handler(
    State(service): State<Arc<LeadServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateLeadRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let lead = service.create_lead(payload, actor(&claims)).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new("Lead created successfully", lead))))
}

pub async fn list_leads_handler(
    State(service): State<Arc<LeadServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let leads = service.list_leads().await?;
    Ok(Json(ApiResponse::new("Leads fetched successfully", leads)))
}

pub async fn get_lead_handler(
    State(service): State<Arc<LeadServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "lead")?;
    let lead = service.get_lead(id).await?;
    Ok(Json(ApiResponse::new("Lead fetched successfully", lead)))
}

pub async fn update_lead_handler(
    State(service): State<Arc<LeadServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateLeadRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let id = parse_object_id(&id, "lead")?;
    let lead = service.update_lead(id, payload, actor(&claims)).await?;
    Ok(Json(ApiResponse::new("Lead updated successfully", lead)))
}

pub async fn delete_lead_handler(
    State(service): State<Arc<LeadServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "lead")?;
    service.delete_lead(id, actor(&claims)).await?;
    Ok(Json(ApiResponse::new("Lead deleted successfully", ())))
}

pub async fn add_follow_up_handler(
    State(service): State<Arc<LeadServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(payload): Json<AddFollowUpRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let id = parse_object_id(&id, "lead")?;
    let lead = service.add_follow_up(id, payload, actor(&claims)).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new("Follow-up added successfully", lead))))
}

pub async fn add_note_handler(
    State(service): State<Arc<LeadServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(payload): Json<AddLeadNoteRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let id = parse_object_id(&id, "lead")?;
    let lead = service.add_note(id, payload, actor(&claims)).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new("Note added successfully", lead))))
}

pub async fn add_call_handler(
    State(service): State<Arc<LeadServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(payload): Json<AddCallRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let id = parse_object_id(&id, "lead")?;
    let lead = service.add_call(id, payload, actor(&claims)).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new("Call logged successfully", lead))))
}

pub async fn add_reminder_handler(
    State(service): State<Arc<LeadServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(payload): Json<AddReminderRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let id = parse_object_id(&id, "lead")?;
    let lead = service.add_reminder(id, payload, actor(&claims)).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new("Reminder added successfully", lead))))
}

pub async fn update_reminder_handler(
    State(service): State<Arc<LeadServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path((id, reminder_id)): Path<(String, String)>,
    Json(payload): Json<UpdateReminderRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let id = parse_object_id(&id, "lead")?;
    let reminder_id = parse_object_id(&reminder_id, "reminder")?;
    let lead = service.update_reminder(id, reminder_id, payload, actor(&claims)).await?;
    Ok(Json(ApiResponse::new("Reminder updated successfully", lead)))
}

pub async fn delete_reminder_handler(
    State(service): State<Arc<LeadServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path((id, reminder_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "lead")?;
    let reminder_id = parse_object_id(&reminder_id, "reminder")?;
    let lead = service.delete_reminder(id, reminder_id, actor(&claims)).await?;
    Ok(Json(ApiResponse::new("Reminder deleted successfully", lead)))
}
