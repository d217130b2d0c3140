//! API Handlers
//!
//! HTTP request handlers for each employee endpoint. Each handler makes a
//! single store call and maps its outcome onto the response envelope.

use std::sync::Arc;
use tokio::sync::Mutex;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::{ApiResponse, Employee, EmployeeFields, EmployeeRequest, HealthResponse};
use crate::store::{self, EmployeeStore};

/// Application state shared across all handlers.
///
/// The store holds one SQLite connection, so access is serialized through a
/// mutex.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<EmployeeStore>>,
}

impl AppState {
    /// Creates a new AppState around an opened store.
    pub fn new(store: EmployeeStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Opens the database file named by the configuration.
    pub fn from_config(config: &crate::config::Config) -> store::Result<Self> {
        let store = EmployeeStore::open(&config.database_path)?;
        Ok(Self::new(store))
    }
}

/// Turns the raw body into validated business fields.
fn parse_body(
    body: std::result::Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<EmployeeFields> {
    let Json(req) = body.map_err(|rejection| {
        warn!("Rejected request body: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    })?;

    req.validate().map_err(ApiError::BadRequest)
}

/// Handler for GET /api/health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Handler for POST /api/employees
///
/// Generates a fresh UUID for the employee before storing it. Store failures,
/// conflicts included, are reported as 400 with the store's message.
pub async fn create_employee_handler(
    State(state): State<AppState>,
    body: std::result::Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Employee>>)> {
    let fields = parse_body(body)?;
    let id = Uuid::new_v4().to_string();

    let store = state.store.lock().await;
    let employee = store.create(&id, &fields).map_err(|err| {
        error!("Error creating employee: {}", err);
        ApiError::BadRequest(err.to_string())
    })?;

    info!(id = %employee.id, "Employee created");
    Ok((StatusCode::CREATED, Json(ApiResponse::data(employee))))
}

/// Handler for GET /api/employees
pub async fn list_employees_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Employee>>>> {
    let store = state.store.lock().await;
    let employees = store.read_all().map_err(|err| {
        error!("Error fetching employees: {}", err);
        ApiError::Internal("Failed to fetch employees".to_string())
    })?;

    Ok(Json(ApiResponse::data(employees)))
}

/// Handler for GET /api/employees/:id
pub async fn get_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Employee>>> {
    let store = state.store.lock().await;
    let employee = store.read_one(&id).map_err(|err| {
        error!("Error fetching employee {}: {}", id, err);
        ApiError::Internal("Failed to fetch employee".to_string())
    })?;

    match employee {
        Some(employee) => Ok(Json(ApiResponse::data(employee))),
        None => Err(ApiError::NotFound("Employee not found".to_string())),
    }
}

/// Handler for PUT /api/employees/:id
///
/// Full replacement only. An id with no stored employee yields 404.
pub async fn update_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: std::result::Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Employee>>> {
    let fields = parse_body(body)?;

    let store = state.store.lock().await;
    let updated = store.update(&id, &fields).map_err(|err| {
        error!("Error updating employee {}: {}", id, err);
        ApiError::BadRequest(err.to_string())
    })?;

    match updated {
        Some(employee) => {
            info!(id = %employee.id, "Employee updated");
            Ok(Json(ApiResponse::data(employee)))
        }
        None => Err(ApiError::NotFound("Employee not found".to_string())),
    }
}

/// Handler for DELETE /api/employees/:id
///
/// Succeeds whether or not the employee existed.
pub async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    let store = state.store.lock().await;
    let existed = store.delete(&id).map_err(|err| {
        error!("Error deleting employee {}: {}", id, err);
        ApiError::Internal("Failed to delete employee".to_string())
    })?;

    if existed {
        info!(id = %id, "Employee deleted");
    } else {
        debug!(id = %id, "Delete requested for unknown employee");
    }
    Ok(Json(ApiResponse::message("Employee deleted successfully")))
}

/// Fallback for paths outside the API.
pub async fn not_found_handler() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}
