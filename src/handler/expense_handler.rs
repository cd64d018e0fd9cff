use axum::{extract::{Path, State}, http::StatusCode, response::IntoResponse, Extension, Json};
use std::sync::Arc;
use validator::Validate;

use crate::dto::misc_dto::{CreateExpenseRequest, UpdateExpenseRequest};
use crate::dto::ApiResponse;
use crate::handler::{actor, parse_object_id, validation_error};
use crate::service::expense_service::{ExpenseService, ExpenseServiceImpl};
use crate::util::error::HandlerError;
use crate::util::jwt::Claims;

pub async fn create_expense_handler(
    State(service): State<Arc<ExpenseServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateExpenseRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let expense = service.create(payload, actor(&claims)).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new("Expense created successfully", expense))))
}

pub async fn list_expenses_handler(
    State(service): State<Arc<ExpenseServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let expenses = service.list().await?;
    Ok(Json(ApiResponse::new("Expenses fetched successfully", expenses)))
}

pub async fn get_expense_handler(
    State(service): State<Arc<ExpenseServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "expense")?;
    let expense = service.get(id).await?;
    Ok(Json(ApiResponse::new("Expense fetched successfully", expense)))
}

pub async fn update_expense_handler(
    State(service): State<Arc<ExpenseServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateExpenseRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    payload.validate().map_err(validation_error)?;
    let id = parse_object_id(&id, "expense")?;
    let expense = service.update(id, payload, actor(&claims)).await?;
    Ok(Json(ApiResponse::new("Expense updated successfully", expense)))
}

pub async fn delete_expense_handler(
    State(service): State<Arc<ExpenseServiceImpl>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_object_id(&id, "expense")?;
    service.delete(id, actor(&claims)).await?;
    Ok(Json(ApiResponse::new("Expense deleted successfully", ())))
}
