use axum::{middleware, routing::{get, post}, Router};
use std::sync::Arc;

use crate::handler::catalog_handler::{
    create_category_handler, create_service_handler, delete_category_handler,
    delete_service_handler, get_service_handler, list_categories_handler, list_services_handler,
    update_service_handler,
};
use crate::middlewares::auth_middleware::{require_auth, AuthState};
use crate::service::catalog_service::CatalogServiceImpl;

pub fn catalog_router(service: Arc<CatalogServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    Router::new()
        .route("/services", post(create_service_handler).get(list_services_handler))
        .route(
            "/services/{id}",
            get(get_service_handler).put(update_service_handler).delete(delete_service_handler),
        )
        .route("/categories", post(create_category_handler).get(list_categories_handler))
        .route("/categories/{id}", axum::routing::delete(delete_category_handler))
        .route_layer(middleware::from_fn_with_state(auth_state, require_auth))
        .with_state(service)
}
