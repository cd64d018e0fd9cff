use axum::{middleware, routing::{get, post}, Router};
use std::sync::Arc;

use crate::handler::project_handler::{
    add_project_note_handler, create_project_handler, delete_project_handler, get_project_handler,
    list_projects_by_client_handler, list_projects_handler, update_project_handler,
};
use crate::middlewares::auth_middleware::{require_auth, AuthState};
use crate::service::project_service::ProjectServiceImpl;

pub fn project_router(service: Arc<ProjectServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    Router::new()
        .route("/projects", post(create_project_handler).get(list_projects_handler))
        .route(
            "/projects/{id}",
            get(get_project_handler).put(update_project_handler).delete(delete_project_handler),
        )
        .route("/projects/{id}/notes", post(add_project_note_handler))
        .route("/projects/client/{client_id}", get(list_projects_by_client_handler))
        .route_layer(middleware::from_fn_with_state(auth_state, require_auth))
        .with_state(service)
}
