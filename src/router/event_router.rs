use axum::{middleware, routing::{get, post}, Router};
use std::sync::Arc;

use crate::handler::event_handler::{
    create_event_handler, delete_event_handler, get_event_handler, list_my_events_handler,
    update_event_handler,
};
use crate::middlewares::auth_middleware::{require_auth, AuthState};
use crate::service::event_service::EventServiceImpl;

pub fn event_router(service: Arc<EventServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    Router::new()
        .route("/events", post(create_event_handler).get(list_my_events_handler))
        .route(
            "/events/{id}",
            get(get_event_handler).put(update_event_handler).delete(delete_event_handler),
        )
        .route_layer(middleware::from_fn_with_state(auth_state, require_auth))
        .with_state(service)
}
