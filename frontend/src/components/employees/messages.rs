use super::state::{Field, SubmitKind};
use common::model::employee::Employee;

pub enum Msg {
    Refresh,
    EmployeesLoaded(Vec<Employee>),
    LoadFailed(String),
    UpdateField(Field, String),
    Edit(Employee),
    Cancel,
    Submit,
    SubmitSucceeded(SubmitKind),
    SubmitFailed(SubmitKind, String),
    Delete(Employee),
    DeleteSucceeded,
    DeleteFailed(String),
}
