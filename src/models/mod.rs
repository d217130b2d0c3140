//! Data types for the employee API
//!
//! The stored record plus the DTOs used for serializing/deserializing HTTP
//! request and response bodies.

pub mod employee;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use employee::{Employee, EmployeeFields};
pub use requests::{EmployeeRequest, MISSING_FIELDS};
pub use responses::{ApiResponse, ErrorResponse, HealthResponse};
