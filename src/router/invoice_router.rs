use axum::{middleware, routing::{get, post}, Router};
use std::sync::Arc;

use crate::handler::invoice_handler::{
    create_invoice_handler, delete_invoice_handler, get_invoice_handler, list_invoices_handler,
    update_invoice_handler,
};
use crate::middlewares::auth_middleware::{require_auth, AuthState};
use crate::service::invoice_service::InvoiceServiceImpl;

pub fn invoice_router(service: Arc<InvoiceServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    Router::new()
        .route("/invoices", post(create_invoice_handler).get(list_invoices_handler))
        .route(
            "/invoices/{id}",
            get(get_invoice_handler).put(update_invoice_handler).delete(delete_invoice_handler),
        )
        .route_layer(middleware::from_fn_with_state(auth_state, require_auth))
        .with_state(service)
}
