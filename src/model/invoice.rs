use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Unpaid,
    Paid,
    Overdue,
    Cancelled,
}

impl Default for InvoiceStatus {
    fn default() -> Self {
        InvoiceStatus::Unpaid
    }
}

/// One invoice line. `total` is derived (`quantity * unitPrice - discount`)
/// and stored; it is recomputed and re-persisted whenever quantity, unit
/// price or discount change, never lazily.
#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    #[serde(default)]
    pub service: Option<ObjectId>,
    pub description: String,
    pub quantity: u32,
    pub unitPrice: f64,
    #[serde(default)]
    pub discount: f64,
    pub total: f64,
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    /// Unique, e.g. INV-001
    pub invoiceNumber: String,
    pub client: ObjectId,
    #[serde(default)]
    pub project: Option<ObjectId>,
    pub issueDate: String,
    pub dueDate: String,
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
    pub subtotal: f64,
    /// In percentage
    #[serde(default)]
    pub tax: f64,
    /// Optional second tax, in percentage, applied to the same base
    #[serde(default)]
    pub secondTax: f64,
    pub totalAmount: f64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: InvoiceStatus,
    pub createdBy: ObjectId,
    pub createdAt: Option<String>,
    pub updatedAt: Option<String>,
}
