use serde::{Deserialize, Serialize};

/// A stored employee row, as returned by `GET /employees`.
///
/// `id` is assigned by the store on insert and never changes afterwards.
/// The list endpoint returns rows newest first (highest `id` first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub age: u32,
    pub country: String,
    pub role: String,
    pub years_experience: u32,
}

/// Body posted by the form to `POST /create` and `PUT /update/{id}`.
///
/// Values are the raw text typed into the form inputs. The backend checks
/// presence and converts `age` and `years` to integers; numeric JSON values
/// are accepted there as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeFormData {
    pub name: String,
    pub age: String,
    pub country: String,
    pub role: String,
    pub years: String,
}

impl From<&Employee> for EmployeeFormData {
    fn from(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            age: employee.age.to_string(),
            country: employee.country.clone(),
            role: employee.role.clone(),
            years: employee.years_experience.to_string(),
        }
    }
}
