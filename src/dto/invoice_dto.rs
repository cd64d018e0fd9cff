use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::invoice::InvoiceStatus;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InvoiceItemRequest {
    #[validate(length(equal = 24))]
    pub service: Option<String>,

    #[validate(length(min = 1, max = 500))]
    pub description: String,

    #[validate(range(min = 1))]
    pub quantity: u32,

    #[validate(range(min = 0.0))]
    pub unit_price: f64,

    /// Flat deduction per item, not a percentage
    #[validate(range(min = 0.0))]
    pub discount: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateInvoiceRequest {
    #[validate(length(min = 1, max = 50))]
    pub invoice_number: String,

    #[validate(length(equal = 24))]
    pub client: String,

    #[validate(length(equal = 24))]
    pub project: Option<String>,

    #[validate(length(min = 1))]
    pub issue_date: String,

    #[validate(length(min = 1))]
    pub due_date: String,

    /// Optional; when absent, items are derived from the client's services
    #[validate(nested)]
    pub items: Option<Vec<InvoiceItemRequest>>,

    #[validate(range(min = 0.0, max = 100.0))]
    pub tax: Option<f64>,

    #[validate(range(min = 0.0, max = 100.0))]
    pub second_tax: Option<f64>,

    pub notes: Option<String>,

    pub status: Option<InvoiceStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateInvoiceRequest {
    #[validate(length(min = 1, max = 50))]
    pub invoice_number: Option<String>,

    #[validate(length(equal = 24))]
    pub client: Option<String>,

    #[validate(length(equal = 24))]
    pub project: Option<String>,

    #[validate(length(min = 1))]
    pub issue_date: Option<String>,

    #[validate(length(min = 1))]
    pub due_date: Option<String>,

    #[validate(nested)]
    pub items: Option<Vec<InvoiceItemRequest>>,

    #[validate(range(min = 0.0, max = 100.0))]
    pub tax: Option<f64>,

    #[validate(range(min = 0.0, max = 100.0))]
    pub second_tax: Option<f64>,

    pub notes: Option<String>,

    pub status: Option<InvoiceStatus>,
}
