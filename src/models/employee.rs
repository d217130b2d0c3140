//! Employee record types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The seven business fields of an employee.
///
/// Every create and every update carries all of them; there are no partial
/// updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeFields {
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub salary: f64,
    /// Date-like string, stored as given
    pub hire_date: String,
    pub status: String,
}

/// A stored employee row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// UUID assigned by the API layer at creation
    pub id: String,
    #[serde(flatten)]
    pub fields: EmployeeFields,
    pub created_at: DateTime<Utc>,
    /// Equal to `created_at` until the first update
    pub updated_at: DateTime<Utc>,
}
