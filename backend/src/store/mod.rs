//! # Record Store
//!
//! Persistence for employee rows. The HTTP layer only ever talks to the
//! [`EmployeeStore`] trait; the process wires in a [`SqliteEmployeeStore`]
//! at startup and tests are free to substitute their own implementation.
//!
//! Write operations report how many rows they touched. Zero is not an error
//! here: the caller decides that it means "no such id".

mod sqlite;

pub use sqlite::SqliteEmployeeStore;

use common::model::employee::Employee;
use thiserror::Error;

/// The five business fields of an employee, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub age: u32,
    pub country: String,
    pub role: String,
    pub years_experience: u32,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The database could not be reached or the connection is unusable.
    #[error("database unavailable: {0}")]
    Connectivity(String),
    /// A row violated a NOT NULL or CHECK constraint.
    #[error("constraint violated: {0}")]
    Constraint(String),
    /// Any other statement failure.
    #[error("query failed: {0}")]
    Query(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        use rusqlite::ErrorCode;

        match &err {
            rusqlite::Error::SqliteFailure(failure, _) => match failure.code {
                ErrorCode::ConstraintViolation => StoreError::Constraint(err.to_string()),
                ErrorCode::CannotOpen
                | ErrorCode::NotADatabase
                | ErrorCode::DatabaseBusy
                | ErrorCode::DatabaseLocked
                | ErrorCode::PermissionDenied
                | ErrorCode::SystemIoFailure => StoreError::Connectivity(err.to_string()),
                _ => StoreError::Query(err.to_string()),
            },
            _ => StoreError::Query(err.to_string()),
        }
    }
}

/// The four statements the API is allowed to run against the employees table.
pub trait EmployeeStore: Send + Sync {
    /// Inserts a row and returns the id the store assigned to it.
    fn insert(&self, employee: &NewEmployee) -> Result<i64, StoreError>;

    /// Returns every row, highest id first. An empty table yields an empty list.
    fn list_all(&self) -> Result<Vec<Employee>, StoreError>;

    /// Overwrites all five fields of row `id`; returns the affected row count.
    fn update(&self, id: i64, employee: &NewEmployee) -> Result<usize, StoreError>;

    /// Removes row `id`; returns the affected row count.
    fn delete(&self, id: i64) -> Result<usize, StoreError>;
}
