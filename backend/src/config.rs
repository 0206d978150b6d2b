//! Startup configuration for the employees server.
//!
//! Every setting can come from a command-line flag or an environment
//! variable, and is read once when the process starts.

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "employees-backend", about = "Employee records REST API")]
pub struct Config {
    /// Interface the HTTP server binds to.
    #[arg(long, env = "BIND_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port the HTTP server listens on.
    #[arg(long, env = "PORT", default_value_t = 3001)]
    pub port: u16,

    /// SQLite database file holding the `employees` table.
    #[arg(long = "database", env = "DATABASE_PATH", default_value = "employees.sqlite")]
    pub database_path: PathBuf,

    /// Open the form in the default browser once the server is up.
    #[arg(long, env = "OPEN_BROWSER", default_value_t = false)]
    pub open_browser: bool,
}

impl Config {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
