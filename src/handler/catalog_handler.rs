use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Extension, Json};
use std::sync::Arc;
use validator::Validate;

use crate::dto::misc_dto::{CreateCategoryRequest, CreateServiceRequest, UpdateServiceRequest};
use crate::dto::ApiResponse;
use crate::handler::{actor, parse_object_id, validation_error};
use crate::service::catalog_service::{CatalogService, CatalogServiceImpl};
use crate::util::error::HandlerError;
use crate::util::jwt::Claims;

pub async fn create_service_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateServiceRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let offering = service.create_service(payload, actor(&claims)).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new("Service created successfully", offering))))
}

pub async fn list_services_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let services = service.list_services().await?;
    Ok(Json(ApiResponse::new("Services fetched successfully", services)))
}

pub async fn get_service_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "service")?;
    let offering = service.get_service(id).await?;
    Ok(Json(ApiResponse::new("Service fetched successfully", offering)))
}

pub async fn update_service_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateServiceRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let id = parse_object_id(&id, "service")?;
    let offering = service.update_service(id, payload).await?;
    Ok(Json(ApiResponse::new("Service updated successfully", offering)))
}

pub async fn delete_service_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "service")?;
    service.delete_service(id).await?;
    Ok(Json(ApiResponse::new("Service deleted successfully", ())))
}

pub async fn create_category_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let category = service.create_category(payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new("Category created successfully", category))))
}

pub async fn list_categories_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let categories = service.list_categories().await?;
    Ok(Json(ApiResponse::new("Categories fetched successfully", categories)))
}

pub async fn delete_category_handler(
    State(service): State<Arc<CatalogServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "category")?;
    service.delete_category(id).await?;
    Ok(Json(ApiResponse::new("Category deleted successfully", ())))
}
