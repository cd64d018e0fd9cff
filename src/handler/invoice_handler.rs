use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Extension, Json};
use std::sync::Arc;
use validator::Validate;

use crate::dto::invoice_dto::{CreateInvoiceRequest, UpdateInvoiceRequest};
use crate::dto::ApiResponse;
use crate::handler::{parse_object_id, require_actor, validation_error};
use crate::service::invoice_service::{InvoiceService, InvoiceServiceImpl};
use crate::util::error::HandlerError;
use crate::util::jwt::Claims;

pub async fn create_invoice_handler(
    State(service): State<Arc<InvoiceServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateInvoiceRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let actor = require_actor(&claims)?;
    let invoice = service.create_invoice(payload, actor).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new("Invoice created successfully!", invoice))))
}

pub async fn list_invoices_handler(
    State(service): State<Arc<InvoiceServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let invoices = service.list_invoices().await?;
    Ok(Json(ApiResponse::new("Invoices fetched successfully", invoices)))
}

pub async fn get_invoice_handler(
    State(service): State<Arc<InvoiceServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "invoice")?;
    let invoice = service.get_invoice(id).await?;
    Ok(Json(ApiResponse::new("Invoice fetched successfully", invoice)))
}

pub async fn update_invoice_handler(
    State(service): State<Arc<InvoiceServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateInvoiceRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let actor = require_actor(&claims)?;
    let id = parse_object_id(&id, "invoice")?;
    let invoice = service.update_invoice(id, payload, actor).await?;
    Ok(Json(ApiResponse::new("Invoice updated successfully!", invoice)))
}

pub async fn delete_invoice_handler(
    State(service): State<Arc<InvoiceServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let actor = require_actor(&claims)?;
    let id = parse_object_id(&id, "invoice")?;
    service.delete_invoice(id, actor).await?;
    Ok(Json(ApiResponse::new("Invoice deleted successfully!", ())))
}
