//! Request DTOs for the smaller aggregates: contact persons, expenses,
//! tickets, events, the service catalog and settings.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::expense::ExpenseCategory;
use crate::model::setting::{BankAccount, Letterhead};
use crate::model::ticket::{TicketCategory, TicketPriority, TicketStatus};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateContactPersonRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 5, max = 20))]
    pub phone: Option<String>,

    pub designation: Option<String>,

    #[validate(length(equal = 24))]
    pub linked_client: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateContactPersonRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 5, max = 20))]
    pub phone: Option<String>,

    pub designation: Option<String>,

    #[validate(length(equal = 24))]
    pub linked_client: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateExpenseRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(range(min = 0.0))]
    pub amount: f64,

    pub category: Option<ExpenseCategory>,

    pub description: Option<String>,

    #[validate(length(min = 1))]
    pub date: String,

    #[validate(length(equal = 24))]
    pub client: Option<String>,

    #[validate(length(equal = 24))]
    pub project: Option<String>,

    #[validate(length(equal = 24))]
    pub team_member: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateExpenseRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(range(min = 0.0))]
    pub amount: Option<f64>,

    pub category: Option<ExpenseCategory>,

    pub description: Option<String>,

    #[validate(length(min = 1))]
    pub date: Option<String>,

    #[validate(length(equal = 24))]
    pub client: Option<String>,

    #[validate(length(equal = 24))]
    pub project: Option<String>,

    #[validate(length(equal = 24))]
    pub team_member: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTicketRequest {
    #[validate(length(min = 1, max = 300))]
    pub subject: String,

    #[validate(length(min = 1))]
    pub description: String,

    pub category: Option<TicketCategory>,

    pub priority: Option<TicketPriority>,

    #[validate(length(equal = 24))]
    pub client: String,

    #[validate(length(equal = 24))]
    pub assigned_to: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateTicketRequest {
    #[validate(length(min = 1, max = 300))]
    pub subject: Option<String>,

    #[validate(length(min = 1))]
    pub description: Option<String>,

    pub category: Option<TicketCategory>,

    pub priority: Option<TicketPriority>,

    pub status: Option<TicketStatus>,

    #[validate(length(equal = 24))]
    pub assigned_to: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddTicketCommentRequest {
    #[validate(length(min = 1, max = 2000))]
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    pub description: Option<String>,

    pub meeting_link: Option<String>,

    #[validate(length(min = 1))]
    pub start: String,

    #[validate(length(min = 1))]
    pub end: String,

    pub color: Option<String>,

    pub all_day: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    pub description: Option<String>,

    pub meeting_link: Option<String>,

    #[validate(length(min = 1))]
    pub start: Option<String>,

    #[validate(length(min = 1))]
    pub end: Option<String>,

    pub color: Option<String>,

    pub all_day: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateServiceRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    pub image: Option<String>,

    pub description: Option<String>,

    #[validate(range(min = 0.0))]
    pub price: Option<f64>,

    #[validate(length(equal = 24))]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateServiceRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,

    pub image: Option<String>,

    pub description: Option<String>,

    #[validate(range(min = 0.0))]
    pub price: Option<f64>,

    #[validate(length(equal = 24))]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateSettingRequest {
    pub logo_light: Option<String>,
    pub logo_dark: Option<String>,
    pub quotation_logo: Option<String>,
    pub agency_name: Option<String>,
    pub tagline: Option<String>,
    pub emails: Option<Vec<String>>,
    pub phone_numbers: Option<Vec<String>>,
    pub ceo_name: Option<String>,
    pub ceo_title: Option<String>,
    pub company_legal_name: Option<String>,
    pub letterhead: Option<Letterhead>,
    pub bank_accounts: Option<Vec<BankAccount>>,
}
