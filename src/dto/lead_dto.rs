use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::common::CallType;
use crate::model::lead::LeadStatus;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLeadRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 5, max = 20))]
    pub phone: String,

    pub address: Option<String>,

    pub company: Option<String>,

    pub source: Option<String>,

    pub status: Option<LeadStatus>,

    #[validate(length(equal = 24))]
    pub assigned_to: Option<String>,

    pub labels: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateLeadRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 5, max = 20))]
    pub phone: Option<String>,

    pub address: Option<String>,

    pub company: Option<String>,

    pub source: Option<String>,

    pub status: Option<LeadStatus>,

    #[validate(length(equal = 24))]
    pub assigned_to: Option<String>,

    pub labels: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddFollowUpRequest {
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddLeadNoteRequest {
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddCallRequest {
    #[validate(length(min = 1, max = 200))]
    pub subject: String,

    pub call_type: Option<CallType>,

    /// Format h:m:s, e.g. 00:35:20
    pub duration: Option<String>,

    #[validate(length(equal = 24))]
    pub assignee: Option<String>,

    pub description: Option<String>,

    pub result: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddReminderRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1))]
    pub reminder_date: String,

    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateReminderRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1))]
    pub reminder_date: String,

    pub notes: Option<String>,

    pub is_completed: Option<bool>,
}
