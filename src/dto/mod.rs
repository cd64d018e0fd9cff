pub mod client_dto;
pub mod invoice_dto;
pub mod lead_dto;
pub mod misc_dto;
pub mod project_dto;
pub mod quotation_dto;
pub mod subscription_dto;
pub mod task_dto;
pub mod user_dto;

use serde::Serialize;

/// Success envelope: `{message, data}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        ApiResponse { message: message.into(), data }
    }
}
