//! Store Module
//!
//! Durable persistence of employee records in a local SQLite file.

mod employee_store;


pub use employee_store::{EmployeeStore, Result};
