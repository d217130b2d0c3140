//! API Module
//!
//! HTTP handlers and routing for the employee REST API.
//!
//! # Endpoints
//! - `GET /api/health` - Health check
//! - `GET /api/employees` - List all employees, newest first
//! - `POST /api/employees` - Create an employee
//! - `GET /api/employees/:id` - Fetch one employee
//! - `PUT /api/employees/:id` - Replace an employee's fields
//! - `DELETE /api/employees/:id` - Delete an employee

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
