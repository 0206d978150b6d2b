//! Presence and type checks for create/update bodies.
//!
//! A field counts as missing when it is absent, `null`, `false`, numeric `0`
//! or the empty string. Every field is checked for presence before any
//! conversion, so a body with one missing field and one malformed field is
//! reported as missing. Note that this rejects a literal `age: 0`, while the
//! string `"0"` (what the form sends) is present and stored as zero.

use crate::errors::ApiError;
use crate::store::NewEmployee;
use serde::Deserialize;
use serde_json::Value;

/// Raw create/update body. Unknown keys (such as an `id` echoed back by the
/// form) are ignored.
#[derive(Debug, Deserialize)]
pub struct EmployeeDraft {
    pub name: Option<Value>,
    pub age: Option<Value>,
    pub country: Option<Value>,
    pub role: Option<Value>,
    pub years: Option<Value>,
}

impl EmployeeDraft {
    pub fn validate(self) -> Result<NewEmployee, ApiError> {
        let present = [&self.name, &self.age, &self.country, &self.role, &self.years]
            .into_iter()
            .all(is_present);
        if !present {
            return Err(ApiError::missing_fields());
        }

        Ok(NewEmployee {
            name: text("name", self.name)?,
            age: count("age", self.age)?,
            country: text("country", self.country)?,
            role: text("role", self.role)?,
            years_experience: count("years", self.years)?,
        })
    }
}

fn is_present(value: &Option<Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(_) => true,
    }
}

fn text(field: &str, value: Option<Value>) -> Result<String, ApiError> {
    match value {
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        None => Err(ApiError::missing_fields()),
        Some(_) => Err(ApiError::Validation(format!("Field `{}` must be text", field))),
    }
}

fn count(field: &str, value: Option<Value>) -> Result<u32, ApiError> {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse::<u32>().ok(),
        None => return Err(ApiError::missing_fields()),
        Some(_) => None,
    };
    parsed.ok_or_else(|| {
        ApiError::Validation(format!("Field `{}` must be a non-negative integer", field))
    })
}
