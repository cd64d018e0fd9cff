use axum::{middleware, routing::{get, post, put}, Router};
use std::sync::Arc;

use crate::handler::quotation_handler::{
    create_quotation_handler, create_template_handler, delete_quotation_handler,
    delete_template_handler, get_quotation_handler, get_template_handler, list_quotations_handler,
    list_templates_handler, update_quotation_handler, update_quotation_status_handler,
    update_template_handler,
};
use crate::middlewares::auth_middleware::{require_auth, AuthState};
use crate::service::quotation_service::QuotationServiceImpl;

pub fn quotation_router(service: Arc<QuotationServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    Router::new()
        .route("/quotations", post(create_quotation_handler).get(list_quotations_handler))
        .route(
            "/quotations/{id}",
            get(get_quotation_handler).put(update_quotation_handler).delete(delete_quotation_handler),
        )
        .route("/quotations/{id}/status", put(update_quotation_status_handler))
        .route(
            "/quotation-templates",
            post(create_template_handler).get(list_templates_handler),
        )
        .route(
            "/quotation-templates/{id}",
            get(get_template_handler).put(update_template_handler).delete(delete_template_handler),
        )
        .route_layer(middleware::from_fn_with_state(auth_state, require_auth))
        .with_state(service)
}
