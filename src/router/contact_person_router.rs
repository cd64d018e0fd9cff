use axum::{middleware, routing::{get, post}, Router};
use std::sync::Arc;

use crate::handler::contact_person_handler::{
    create_contact_person_handler, delete_contact_person_handler, get_contact_person_handler,
    list_contact_persons_by_client_handler, list_contact_persons_handler,
    update_contact_person_handler,
};
use crate::middlewares::auth_middleware::{require_auth, AuthState};
use crate::service::contact_person_service::ContactPersonServiceImpl;

pub fn contact_person_router(service: Arc<ContactPersonServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    Router::new()
        .route(
            "/contact-persons",
            post(create_contact_person_handler).get(list_contact_persons_handler),
        )
        .route(
            "/contact-persons/{id}",
            get(get_contact_person_handler)
                .put(update_contact_person_handler)
                .delete(delete_contact_person_handler),
        )
        .route("/contact-persons/client/{client_id}", get(list_contact_persons_by_client_handler))
        .route_layer(middleware::from_fn_with_state(auth_state, require_auth))
        .with_state(service)
}
