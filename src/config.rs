//! Configuration Module
//!
//! Handles loading server configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// File name of the SQLite database, resolved against the working directory.
pub const DATABASE_FILE: &str = "employees.db";

/// Default HTTP port when `PORT` is unset or unparsable.
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Location of the database file (always [`DATABASE_FILE`])
    pub database_path: PathBuf,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 3000)
    ///
    /// The database path is not configurable.
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            database_path: PathBuf::from(DATABASE_FILE),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_PORT,
            database_path: PathBuf::from(DATABASE_FILE),
        }
    }
}
