use axum::{middleware, routing::{get, post, put}, Router};
use std::sync::Arc;

use crate::handler::lead_handler::{
    add_call_handler, add_follow_up_handler, add_note_handler, add_reminder_handler,
    create_lead_handler, delete_lead_handler, delete_reminder_handler, get_lead_handler,
    list_leads_handler, update_lead_handler, update_reminder_handler,
};
use crate::middlewares::auth_middleware::{require_auth, AuthState};
use crate::service::lead_service::LeadServiceImpl;

pub fn lead_router(service: Arc<LeadServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    Router::new()
        .route("/leads", post(create_lead_handler).get(list_leads_handler))
        .route(
            "/leads/{id}",
            get(get_lead_handler).put(update_lead_handler).delete(delete_lead_handler),
        )
        .route("/leads/{id}/followups", post(add_follow_up_handler))
        .route("/leads/{id}/notes", post(add_note_handler))
        .route("/leads/{id}/calls", post(add_call_handler))
        .route("/leads/{id}/reminders", post(add_reminder_handler))
        .route(
            "/leads/{id}/reminders/{reminder_id}",
            put(update_reminder_handler).delete(delete_reminder_handler),
        )
        .route_layer(middleware::from_fn_with_state(auth_state, require_auth))
        .with_state(service)
}
