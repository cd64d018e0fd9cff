use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Extension, Json};
use std::sync::Arc;
use validator::Validate;

use crate::dto::task_dto::{CreateTaskRequest, UpdateTaskRequest};
use crate::dto::ApiResponse;
use crate::handler::{actor, parse_object_id, validation_error};
use crate::service::task_service::{TaskService, TaskServiceImpl};
use crate::util::error::HandlerError;
use crate::util::jwt::Claims;

pub async fn create_task_handler(
    State(service): State<Arc<TaskServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let task = service.create_task(payload, actor(&claims)).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new("Task created successfully", task))))
}

pub async fn list_tasks_handler(
    State(service): State<Arc<TaskServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let tasks = service.list_tasks().await?;
    Ok(Json(ApiResponse::new("Tasks fetched successfully", tasks)))
}

pub async fn list_tasks_by_project_handler(
    State(service): State<Arc<TaskServiceImpl>>,
    Path(project_id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let project_id = parse_object_id(&project_id, "project")?;
    let tasks = service.list_by_project(project_id).await?;
    Ok(Json(ApiResponse::new("Tasks fetched successfully", tasks)))
}

pub async fn get_task_handler(
    State(service): State<Arc<TaskServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "task")?;
    let task = service.get_task(id).await?;
    Ok(Json(ApiResponse::new("Task fetched successfully", task)))
}

pub async fn update_task_handler(
    State(service): State<Arc<TaskServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTaskRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let id = parse_object_id(&id, "task")?;
    let task = service.update_task(id, payload, actor(&claims)).await?;
    Ok(Json(ApiResponse::new("Task updated successfully", task)))
}

pub async fn delete_task_handler(
    State(service): State<Arc<TaskServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "task")?;
    service.delete_task(id, actor(&claims)).await?;
    Ok(Json(ApiResponse::new("Task deleted successfully", ())))
}
