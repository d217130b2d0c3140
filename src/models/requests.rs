//! Request DTOs for the employee API
//!
//! Bodies are taken loosely as JSON values and checked field by field, so a
//! client sending `"salary": "50000"` or `"salary": 0` gets a validation
//! error in the envelope rather than a deserializer rejection.

use serde::Deserialize;
use serde_json::Value;

use crate::models::EmployeeFields;

/// Message returned when any business field is absent or falsy.
pub const MISSING_FIELDS: &str = "Missing required fields";

/// Request body for create (POST /api/employees) and update
/// (PUT /api/employees/:id).
///
/// Unknown keys (including `id` and timestamps) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub department: Option<Value>,
    #[serde(default)]
    pub position: Option<Value>,
    #[serde(default)]
    pub salary: Option<Value>,
    #[serde(default)]
    pub hire_date: Option<Value>,
    #[serde(default)]
    pub status: Option<Value>,
}

impl EmployeeRequest {
    /// Validates the request and converts it into business fields.
    ///
    /// Every field must be present and truthy: `null`, `false`, `0` and `""`
    /// are treated as missing. Text fields also accept non-zero numbers.
    /// `salary` is coerced to a number; a string that does not parse is
    /// rejected.
    pub fn validate(&self) -> Result<EmployeeFields, String> {
        let name = truthy_text(&self.name);
        let email = truthy_text(&self.email);
        let department = truthy_text(&self.department);
        let position = truthy_text(&self.position);
        let hire_date = truthy_text(&self.hire_date);
        let status = truthy_text(&self.status);

        let (
            Some(name),
            Some(email),
            Some(department),
            Some(position),
            Some(hire_date),
            Some(status),
        ) = (name, email, department, position, hire_date, status)
        else {
            return Err(MISSING_FIELDS.to_string());
        };

        let salary = coerce_salary(&self.salary)?;

        Ok(EmployeeFields {
            name,
            email,
            department,
            position,
            salary,
            hire_date,
            status,
        })
    }
}

fn truthy_text(value: &Option<Value>) -> Option<String> {
    match value.as_ref()? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        _ => None,
    }
}

fn coerce_salary(value: &Option<Value>) -> Result<f64, String> {
    let amount = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) if !s.is_empty() => match s.trim().parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => Some(parsed),
            _ => return Err("Salary must be a number".to_string()),
        },
        _ => None,
    };

    match amount {
        Some(amount) if amount != 0.0 => Ok(amount),
        _ => Err(MISSING_FIELDS.to_string()),
    }
}
