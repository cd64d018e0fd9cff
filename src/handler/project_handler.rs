use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Extension, Json};
use std::sync::Arc;
use validator::Validate;

use crate::dto::project_dto::{AddProjectNoteRequest, CreateProjectRequest, UpdateProjectRequest};
use crate::dto::ApiResponse;
use crate::handler::{actor, parse_object_id, validation_error};
use crate::service::project_service::{ProjectService, ProjectServiceImpl};
use crate::util::error::HandlerError;
use crate::util::jwt::Claims;

pub async fn create_project_handler(
    State(service): State<Arc<ProjectServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateProjectRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let project = service.create_project(payload, actor(&claims)).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new("Project created successfully", project))))
}

pub async fn list_projects_handler(
    State(service): State<Arc<ProjectServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let projects = service.list_projects().await?;
    Ok(Json(ApiResponse::new("Projects fetched successfully", projects)))
}

pub async fn list_projects_by_client_handler(
    State(service): State<Arc<ProjectServiceImpl>>,
    Path(client_id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let client_id = parse_object_id(&client_id, "client")?;
    let projects = service.list_by_client(client_id).await?;
    Ok(Json(ApiResponse::new("Projects fetched successfully", projects)))
}

pub async fn get_project_handler(
    State(service): State<Arc<ProjectServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "project")?;
    let project = service.get_project(id).await?;
    Ok(Json(ApiResponse::new("Project fetched successfully", project)))
}

pub async fn update_project_handler(
    State(service): State<Arc<ProjectServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateProjectRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let id = parse_object_id(&id, "project")?;
    let project = service.update_project(id, payload, actor(&claims)).await?;
    Ok(Json(ApiResponse::new("Project updated successfully", project)))
}

pub async fn delete_project_handler(
    State(service): State<Arc<ProjectServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "project")?;
    service.delete_project(id, actor(&claims)).await?;
    Ok(Json(ApiResponse::new("Project deleted successfully", ())))
}

pub async fn add_project_note_handler(
    State(service): State<Arc<ProjectServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(payload): Json<AddProjectNoteRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let id = parse_object_id(&id, "project")?;
    let project = service.add_note(id, payload, actor(&claims)).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new("Note added successfully", project))))
}
