pub mod activity_handler;
pub mod catalog_handler;
pub mod client_handler;
pub mod contact_person_handler;
pub mod event_handler;
pub mod expense_handler;
pub mod invoice_handler;
pub mod lead_handler;
pub mod project_handler;
pub mod quotation_handler;
pub mod setting_handler;
pub mod subscription_handler;
pub mod task_handler;
pub mod ticket_handler;
pub mod user_handler;

use bson::oid::ObjectId;

use crate::util::error::HandlerError;
use crate::util::jwt::Claims;

/// Parse a path/document reference or reject with 400.
pub(crate) fn parse_object_id(value: &str, what: &str) -> Result<ObjectId, HandlerError> {
    ObjectId::parse_str(value).map_err(|_| HandlerError::bad_request(format!("Invalid {} id", what)))
}

/// The acting user, taken from the authenticated token's subject.
pub(crate) fn actor(claims: &Claims) -> Option<ObjectId> {
    ObjectId::parse_str(&claims.sub).ok()
}

pub(crate) fn require_actor(claims: &Claims) -> Result<ObjectId, HandlerError> {
    actor(claims).ok_or_else(|| HandlerError::bad_request("Token subject is not a valid user id"))
}

pub(crate) fn validation_error(e: validator::ValidationErrors) -> HandlerError {
    HandlerError::validation(format!("Validation error: {}", e))
}
