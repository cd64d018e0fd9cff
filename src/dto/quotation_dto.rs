use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::quotation::{ContentBlock, QuotationStatus};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateQuotationRequest {
    #[validate(length(min = 1))]
    pub quotation_date: String,

    #[validate(length(min = 1, max = 200))]
    pub client_name: String,

    #[validate(length(min = 5, max = 20))]
    pub phone: String,

    #[validate(email)]
    pub email: String,

    pub address: Option<String>,

    pub company: Option<String>,

    pub website: Option<String>,

    #[validate(length(min = 1, max = 300))]
    pub subject: String,

    pub inquiry_date: Option<String>,

    /// Ordered body; semantic checks run in the service before the write
    pub content_blocks: Vec<ContentBlock>,

    #[validate(range(min = 0.0))]
    pub discount: Option<f64>,

    #[validate(range(min = 0.0))]
    pub final_cost: Option<f64>,

    #[validate(range(min = 0.0))]
    pub grand_total: Option<f64>,

    #[validate(length(equal = 24))]
    pub lead: Option<String>,
}

/// Whole-document update; `content_blocks`, when present, replaces the
/// stored sequence entirely (no per-block patch).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateQuotationRequest {
    #[validate(length(min = 1))]
    pub quotation_date: Option<String>,

    #[validate(length(min = 1, max = 200))]
    pub client_name: Option<String>,

    #[validate(length(min = 5, max = 20))]
    pub phone: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    pub address: Option<String>,

    pub company: Option<String>,

    pub website: Option<String>,

    #[validate(length(min = 1, max = 300))]
    pub subject: Option<String>,

    pub inquiry_date: Option<String>,

    pub content_blocks: Option<Vec<ContentBlock>>,

    #[validate(range(min = 0.0))]
    pub discount: Option<f64>,

    #[validate(range(min = 0.0))]
    pub final_cost: Option<f64>,

    #[validate(range(min = 0.0))]
    pub grand_total: Option<f64>,

    pub status: Option<QuotationStatus>,

    #[validate(length(equal = 24))]
    pub lead: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateQuotationStatusRequest {
    pub status: QuotationStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateQuotationTemplateRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    pub description: Option<String>,

    pub content_blocks: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateQuotationTemplateRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    pub description: Option<String>,

    pub content_blocks: Option<Vec<ContentBlock>>,
}
