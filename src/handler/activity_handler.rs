use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use std::collections::HashMap;
use std::sync::Arc;

use crate::dto::ApiResponse;
use crate::handler::parse_object_id;
use crate::service::activity_log::ActivityLog;
use crate::util::error::HandlerError;

const DEFAULT_LIMIT: i64 = 100;

pub async fn list_activities_handler(
    State(log): State<Arc<ActivityLog>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, HandlerError> {
    let limit = params.get("limit").and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_LIMIT);
    let activities = log.list(limit).await?;
    Ok(Json(ApiResponse::new("Activities fetched successfully", activities)))
}

pub async fn list_activities_for_lead_handler(
    State(log): State<Arc<ActivityLog>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "lead")?;
    let activities = log.list_for_lead(id).await?;
    Ok(Json(ApiResponse::new("Activities fetched successfully", activities)))
}

pub async fn list_activities_for_client_handler(
    State(log): State<Arc<ActivityLog>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "client")?;
    let activities = log.list_for_client(id).await?;
    Ok(Json(ApiResponse::new("Activities fetched successfully", activities)))
}

pub async fn list_activities_for_project_handler(
    State(log): State<Arc<ActivityLog>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "project")?;
    let activities = log.list_for_project(id).await?;
    Ok(Json(ApiResponse::new("Activities fetched successfully", activities)))
}

pub async fn list_activities_for_task_handler(
    State(log): State<Arc<ActivityLog>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "task")?;
    let activities = log.list_for_task(id).await?;
    Ok(Json(ApiResponse::new("Activities fetched successfully", activities)))
}
