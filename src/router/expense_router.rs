use axum::{middleware, routing::{get, post}, Router};
use std::sync::Arc;

use crate::handler::expense_handler::{
    create_expense_handler, delete_expense_handler, get_expense_handler, list_expenses_handler,
    update_expense_handler,
};
use crate::middlewares::auth_middleware::{require_auth, AuthState};
use crate::service::expense_service::ExpenseServiceImpl;

pub fn expense_router(service: Arc<ExpenseServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    Router::new()
        .route("/expenses", post(create_expense_handler).get(list_expenses_handler))
        .route(
            "/expenses/{id}",
            get(get_expense_handler).put(update_expense_handler).delete(delete_expense_handler),
        )
        .route_layer(middleware::from_fn_with_state(auth_state, require_auth))
        .with_state(service)
}
