//! Employee Store Module
//!
//! SQLite-backed persistence for employee records. Each call commits
//! immediately; there is no batching or caching in front of the connection.

use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::StoreError;
use crate::models::{Employee, EmployeeFields};

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

const SELECT_ALL: &str = "SELECT * FROM employees ORDER BY created_at DESC, rowid DESC";

// == Employee Store ==
/// Owns the single SQLite connection holding the `employees` table.
#[derive(Debug)]
pub struct EmployeeStore {
    conn: Connection,
}

impl EmployeeStore {
    // == Constructors ==
    /// Opens (or creates) the database file and ensures the schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// Opens a private in-memory database with the same schema.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Creates the employees table if absent. Safe to run on every start.
    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS employees (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                department TEXT NOT NULL,
                position TEXT NOT NULL,
                salary REAL NOT NULL,
                hire_date TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'Active',
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )?;
        Ok(())
    }

    // == Create ==
    /// Inserts a new employee under a caller-supplied id.
    ///
    /// Fails with `StoreError::Conflict` when the id or email is taken.
    pub fn create(&self, id: &str, fields: &EmployeeFields) -> Result<Employee> {
        let now = Utc::now();

        self.conn
            .execute(
                "INSERT INTO employees
                 (id, name, email, department, position, salary, hire_date, status, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                params![
                    id,
                    fields.name,
                    fields.email,
                    fields.department,
                    fields.position,
                    fields.salary,
                    fields.hire_date,
                    fields.status,
                    now,
                    now,
                ],
            )
            .map_err(StoreError::from_write)?;

        Ok(Employee {
            id: id.to_string(),
            fields: fields.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    // == Read All ==
    /// Returns every employee, most recently created first.
    pub fn read_all(&self) -> Result<Vec<Employee>> {
        let mut stmt = self.conn.prepare(SELECT_ALL)?;
        let employees = stmt
            .query_map([], employee_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(employees)
    }

    // == Read One ==
    /// Looks up a single employee. `Ok(None)` means no row has that id.
    pub fn read_one(&self, id: &str) -> Result<Option<Employee>> {
        let employee = self
            .conn
            .query_row(
                "SELECT * FROM employees WHERE id = ?1",
                [id],
                employee_from_row,
            )
            .optional()?;
        Ok(employee)
    }

    // == Update ==
    /// Replaces all business fields and refreshes `updated_at`, which never
    /// drops below `created_at` even if the clock stepped back.
    ///
    /// Returns `Ok(None)` if no employee has that id; nothing is written in
    /// that case.
    pub fn update(&self, id: &str, fields: &EmployeeFields) -> Result<Option<Employee>> {
        let now = Utc::now();

        self.conn
            .query_row(
                "UPDATE employees
                 SET name = ?1, email = ?2, department = ?3, position = ?4,
                     salary = ?5, hire_date = ?6, status = ?7,
                     updated_at = MAX(created_at, ?8)
                 WHERE id = ?9
                 RETURNING *",
                params![
                    fields.name,
                    fields.email,
                    fields.department,
                    fields.position,
                    fields.salary,
                    fields.hire_date,
                    fields.status,
                    now,
                    id,
                ],
                employee_from_row,
            )
            .optional()
            .map_err(StoreError::from_write)
    }

    // == Delete ==
    /// Removes an employee. Returns whether a row existed; a missing id is
    /// not an error.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM employees WHERE id = ?1", [id])?;
        Ok(removed > 0)
    }

    // == Close ==
    /// Closes the connection, reporting any error SQLite raises on close.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, err)| StoreError::Storage(err))
    }
}

fn employee_from_row(row: &Row<'_>) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get("id")?,
        fields: EmployeeFields {
            name: row.get("name")?,
            email: row.get("email")?,
            department: row.get("department")?,
            position: row.get("position")?,
            salary: row.get("salary")?,
            hire_date: row.get("hire_date")?,
            status: row.get("status")?,
        },
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}
