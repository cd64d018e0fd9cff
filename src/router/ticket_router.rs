use axum::{middleware, routing::{get, post}, Router};
use std::sync::Arc;

use crate::handler::ticket_handler::{
    add_ticket_comment_handler, create_ticket_handler, delete_ticket_handler, get_ticket_handler,
    list_tickets_by_client_handler, list_tickets_handler, update_ticket_handler,
};
use crate::middlewares::auth_middleware::{require_auth, AuthState};
use crate::service::ticket_service::TicketServiceImpl;

pub fn ticket_router(service: Arc<TicketServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    Router::new()
        .route("/tickets", post(create_ticket_handler).get(list_tickets_handler))
        .route(
            "/tickets/{id}",
            get(get_ticket_handler).put(update_ticket_handler).delete(delete_ticket_handler),
        )
        .route("/tickets/{id}/comments", post(add_ticket_comment_handler))
        .route("/tickets/client/{client_id}", get(list_tickets_by_client_handler))
        .route_layer(middleware::from_fn_with_state(auth_state, require_auth))
        .with_state(service)
}
