use axum::{middleware, routing::get, Router};
use std::sync::Arc;

use crate::handler::activity_handler::{
    list_activities_for_client_handler, list_activities_for_lead_handler,
    list_activities_for_project_handler, list_activities_for_task_handler, list_activities_handler,
};
use crate::middlewares::auth_middleware::{require_auth, AuthState};
use crate::service::activity_log::ActivityLog;

pub fn activity_router(log: Arc<ActivityLog>, auth_state: Arc<AuthState>) -> Router {
    Router::new()
        .route("/activities", get(list_activities_handler))
        .route("/activities/lead/{id}", get(list_activities_for_lead_handler))
        .route("/activities/client/{id}", get(list_activities_for_client_handler))
        .route("/activities/project/{id}", get(list_activities_for_project_handler))
        .route("/activities/task/{id}", get(list_activities_for_task_handler))
        .route_layer(middleware::from_fn_with_state(auth_state, require_auth))
        .with_state(log)
}
