use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use validator::Validate;

use crate::dto::misc_dto::UpdateSettingRequest;
use crate::dto::ApiResponse;
use crate::handler::validation_error;
use crate::service::setting_service::{SettingService, SettingServiceImpl};
use crate::util::error::HandlerError;

pub async fn get_settings_handler(
    State(service): State<Arc<SettingServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let settings = service.get_settings().await?;
    Ok(Json(ApiResponse::new("Settings fetched successfully", settings)))
}

pub async fn update_settings_handler(
    State(service): State<Arc<SettingServiceImpl>>,
    Json(payload): Json<UpdateSettingRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let settings = service.update_settings(payload).await?;
    Ok(Json(ApiResponse::new("Settings updated successfully", settings)))
}
