use axum::{middleware, routing::get, Router};
use std::sync::Arc;

use crate::handler::setting_handler::{get_settings_handler, update_settings_handler};
use crate::middlewares::auth_middleware::{require_auth, AuthState};
use crate::service::setting_service::SettingServiceImpl;

pub fn setting_router(service: Arc<SettingServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    Router::new()
        .route("/settings", get(get_settings_handler).put(update_settings_handler))
        .route_layer(middleware::from_fn_with_state(auth_state, require_auth))
        .with_state(service)
}
