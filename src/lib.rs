//! Employee API - a small employee management REST service
//!
//! CRUD over employee records stored in a single SQLite table, exposed as
//! JSON over HTTP with a uniform `{isOk, data|error}` envelope.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use store::EmployeeStore;
