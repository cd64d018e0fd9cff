use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Extension, Json};
use std::sync::Arc;
use validator::Validate;

use crate::dto::quotation_dto::{
    CreateQuotationRequest, CreateQuotationTemplateRequest, UpdateQuotationRequest,
    UpdateQuotationStatusRequest, UpdateQuotationTemplateRequest,
};
use crate::dto::ApiResponse;
use crate::handler::{actor, parse_object_id, validation_error};
use crate::service::quotation_service::{QuotationService, QuotationServiceImpl};
use crate::util::error::HandlerError;
use crate::util::jwt::Claims;

pub async fn create_quotation_handler(
    State(service): State<Arc<QuotationServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateQuotationRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let quotation = service.create_quotation(payload, actor(&claims)).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new("Quotation created successfully", quotation))))
}

pub async fn list_quotations_handler(
    State(service): State<Arc<QuotationServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let quotations = service.list_quotations().await?;
    Ok(Json(ApiResponse::new("Quotations fetched successfully", quotations)))
}

pub async fn get_quotation_handler(
    State(service): State<Arc<QuotationServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "quotation")?;
    let quotation = service.get_quotation(id).await?;
    Ok(Json(ApiResponse::new("Quotation fetched successfully", quotation)))
}

pub async fn update_quotation_handler(
    State(service): State<Arc<QuotationServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateQuotationRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let id = parse_object_id(&id, "quotation")?;
    let quotation = service.update_quotation(id, payload, actor(&claims)).await?;
    Ok(Json(ApiResponse::new("Quotation updated successfully", quotation)))
}

pub async fn update_quotation_status_handler(
    State(service): State<Arc<QuotationServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateQuotationStatusRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "quotation")?;
    let quotation = service.update_status(id, payload, actor(&claims)).await?;
    Ok(Json(ApiResponse::new("Quotation status updated successfully", quotation)))
}

pub async fn delete_quotation_handler(
    State(service): State<Arc<QuotationServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "quotation")?;
    service.delete_quotation(id).await?;
    Ok(Json(ApiResponse::new("Quotation deleted successfully", ())))
}

pub async fn create_template_handler(
    State(service): State<Arc<QuotationServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateQuotationTemplateRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let template = service.create_template(payload, actor(&claims)).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new("Quotation template created successfully", template))))
}

pub async fn list_templates_handler(
    State(service): State<Arc<QuotationServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let templates = service.list_templates().await?;
    Ok(Json(ApiResponse::new("Quotation templates fetched successfully", templates)))
}

pub async fn get_template_handler(
    State(service): State<Arc<QuotationServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "template")?;
    let template = service.get_template(id).await?;
    Ok(Json(ApiResponse::new("Quotation template fetched successfully", template)))
}

pub async fn update_template_handler(
    State(service): State<Arc<QuotationServiceImpl>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateQuotationTemplateRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let id = parse_object_id(&id, "template")?;
    let template = service.update_template(id, payload).await?;
    Ok(Json(ApiResponse::new("Quotation template updated successfully", template)))
}

pub async fn delete_template_handler(
    State(service): State<Arc<QuotationServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "template")?;
    service.delete_template(id).await?;
    Ok(Json(ApiResponse::new("Quotation template deleted successfully", ())))
}
