use super::{EmployeeStore, NewEmployee, StoreError};
use common::model::employee::Employee;
use log::info;
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// `AUTOINCREMENT` keeps SQLite from handing out the id of a deleted row again.
const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS employees (
        id               INTEGER PRIMARY KEY AUTOINCREMENT,
        name             TEXT    NOT NULL CHECK (name <> ''),
        age              INTEGER NOT NULL CHECK (age >= 0),
        country          TEXT    NOT NULL CHECK (country <> ''),
        role             TEXT    NOT NULL CHECK (role <> ''),
        years_experience INTEGER NOT NULL CHECK (years_experience >= 0)
    );
";

/// SQLite-backed store holding the single process-wide connection.
pub struct SqliteEmployeeStore {
    conn: Mutex<Connection>,
}

impl SqliteEmployeeStore {
    /// Opens (or creates) the database file and makes sure the table exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let conn =
            Connection::open(path).map_err(|e| StoreError::Connectivity(e.to_string()))?;
        info!("Connected to database at {}", path.display());
        Self::from_connection(conn)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn =
            Connection::open_in_memory().map_err(|e| StoreError::Connectivity(e.to_string()))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Connectivity("connection lock poisoned".to_string()))
    }
}

impl EmployeeStore for SqliteEmployeeStore {
    fn insert(&self, employee: &NewEmployee) -> Result<i64, StoreError> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO employees (name, age, country, role, years_experience)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                &employee.name,
                employee.age,
                &employee.country,
                &employee.role,
                employee.years_experience
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn list_all(&self) -> Result<Vec<Employee>, StoreError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, age, country, role, years_experience
             FROM employees ORDER BY id DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Employee {
                id: row.get(0)?,
                name: row.get(1)?,
                age: row.get(2)?,
                country: row.get(3)?,
                role: row.get(4)?,
                years_experience: row.get(5)?,
            })
        })?;

        let employees = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(employees)
    }

    fn update(&self, id: i64, employee: &NewEmployee) -> Result<usize, StoreError> {
        let conn = self.conn()?;
        let affected = conn.execute(
            "UPDATE employees
             SET name = ?1, age = ?2, country = ?3, role = ?4, years_experience = ?5
             WHERE id = ?6",
            params![
                &employee.name,
                employee.age,
                &employee.country,
                &employee.role,
                employee.years_experience,
                id
            ],
        )?;
        Ok(affected)
    }

    fn delete(&self, id: i64) -> Result<usize, StoreError> {
        let conn = self.conn()?;
        let affected = conn.execute("DELETE FROM employees WHERE id = ?1", params![id])?;
        Ok(affected)
    }
}
