use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::client::{ClientLevel, ClientStatus, ClientType};

/// One requested service line; references are hex ObjectId strings resolved
/// by the handler/service layer.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServiceLineRequest {
    #[validate(length(equal = 24))]
    pub service: String,

    #[validate(range(min = 1))]
    pub quantity: Option<u32>,

    #[validate(range(min = 0.0))]
    pub unit_price: f64,

    #[validate(range(min = 0.0))]
    pub discount: Option<f64>,

    #[validate(range(min = 0.0))]
    pub paid: Option<f64>,

    #[validate(range(min = 0.0))]
    pub pending: Option<f64>,

    pub start_date: Option<String>,

    pub expiry_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateClientRequest {
    pub client_type: ClientType,

    #[validate(length(min = 1, max = 200))]
    pub company_name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 5, max = 20))]
    pub phone: Option<String>,

    pub address: Option<String>,

    pub client_level: Option<ClientLevel>,

    pub website: Option<String>,

    pub gst_number: Option<String>,

    #[validate(length(equal = 24))]
    pub account_manager: Option<String>,

    pub status: Option<ClientStatus>,

    #[validate(nested)]
    pub services: Option<Vec<ServiceLineRequest>>,

    pub notes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateClientRequest {
    pub client_type: Option<ClientType>,

    #[validate(length(min = 1, max = 200))]
    pub company_name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 5, max = 20))]
    pub phone: Option<String>,

    pub address: Option<String>,

    pub client_level: Option<ClientLevel>,

    pub website: Option<String>,

    pub gst_number: Option<String>,

    #[validate(length(equal = 24))]
    pub account_manager: Option<String>,

    pub status: Option<ClientStatus>,

    /// Replaces the whole services array when present
    #[validate(nested)]
    pub services: Option<Vec<ServiceLineRequest>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddClientNoteRequest {
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddClientReminderRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1))]
    pub reminder_date: String,

    pub notes: Option<String>,
}
