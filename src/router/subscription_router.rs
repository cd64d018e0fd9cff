use axum::{middleware, routing::{get, post}, Router};
use std::sync::Arc;

use crate::handler::subscription_handler::{
    add_subscription_note_handler, create_subscription_handler, delete_subscription_handler,
    get_subscription_handler, list_subscriptions_by_client_handler, list_subscriptions_handler,
    update_subscription_handler,
};
use crate::middlewares::auth_middleware::{require_auth, AuthState};
use crate::service::subscription_service::SubscriptionServiceImpl;

pub fn subscription_router(service: Arc<SubscriptionServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    Router::new()
        .route("/subscriptions", post(create_subscription_handler).get(list_subscriptions_handler))
        .route(
            "/subscriptions/{id}",
            get(get_subscription_handler)
                .put(update_subscription_handler)
                .delete(delete_subscription_handler),
        )
        .route("/subscriptions/{id}/notes", post(add_subscription_note_handler))
        .route("/subscriptions/client/{client_id}", get(list_subscriptions_by_client_handler))
        .route_layer(middleware::from_fn_with_state(auth_state, require_auth))
        .with_state(service)
}
