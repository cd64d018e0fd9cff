use axum::{middleware, routing::{get, post}, Router};
use std::sync::Arc;

use crate::handler::user_handler::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler, login_handler,
    refresh_token_handler, update_user_handler,
};
use crate::middlewares::auth_middleware::{require_admin, AuthState};
use crate::service::user_service::UserServiceImpl;

pub fn user_router(service: Arc<UserServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    // Public auth routes
    let public = Router::new()
        .route("/auth/login", post(login_handler))
        .route("/auth/refresh", post(refresh_token_handler));

    // User management is admin only
    let admin = Router::new()
        .route("/users", post(create_user_handler).get(list_users_handler))
        .route(
            "/users/{id}",
            get(get_user_handler).put(update_user_handler).delete(delete_user_handler),
        )
        .route_layer(middleware::from_fn_with_state(auth_state, require_admin));

    public.merge(admin).with_state(service)
}
