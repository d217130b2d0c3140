//! API Routes
//!
//! Configures the Axum router with all employee endpoints.

use std::any::Any as PanicPayload;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::error;

use super::handlers::{
    create_employee_handler, delete_employee_handler, get_employee_handler, health_handler,
    list_employees_handler, not_found_handler, update_employee_handler, AppState,
};
use crate::models::ErrorResponse;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/health` - Health check
/// - `GET /api/employees` - List all employees
/// - `POST /api/employees` - Create an employee
/// - `GET /api/employees/:id` - Fetch one employee
/// - `PUT /api/employees/:id` - Replace an employee's fields
/// - `DELETE /api/employees/:id` - Delete an employee
///
/// # Middleware
/// - Panic catching: a panicking handler becomes a 500 envelope
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health_handler))
        .route(
            "/api/employees",
            get(list_employees_handler).post(create_employee_handler),
        )
        .route(
            "/api/employees/:id",
            get(get_employee_handler)
                .put(update_employee_handler)
                .delete(delete_employee_handler),
        )
        .fallback(not_found_handler)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Converts a handler panic into the generic 500 envelope.
///
/// The panic payload is logged and never sent to the client.
pub fn handle_panic(payload: Box<dyn PanicPayload + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    error!("Unhandled error: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Internal server error")),
    )
        .into_response()
}
