//! Component state for the employee form and list.
//!
//! Everything here is plain data with no DOM access, so the form state
//! machine can be exercised by native unit tests. The screen is either in
//! create mode or editing one row (`FormMode`); `loading` and `error` are
//! independent of the mode.

use common::model::employee::{Employee, EmployeeFormData};

/// One of the five inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Age,
    Country,
    Role,
    Years,
}

impl Field {
    /// Render order of the inputs.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Age,
        Field::Country,
        Field::Role,
        Field::Years,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Age => "Age",
            Field::Country => "Country",
            Field::Role => "Role",
            Field::Years => "Experience",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Enter name",
            Field::Age => "Enter age",
            Field::Country => "Enter country",
            Field::Role => "Enter role",
            Field::Years => "Enter years of experience",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Field::Age | Field::Years)
    }

    pub fn value(self, form: &EmployeeFormData) -> &str {
        match self {
            Field::Name => &form.name,
            Field::Age => &form.age,
            Field::Country => &form.country,
            Field::Role => &form.role,
            Field::Years => &form.years,
        }
    }

    fn set(self, form: &mut EmployeeFormData, value: String) {
        let slot = match self {
            Field::Name => &mut form.name,
            Field::Age => &mut form.age,
            Field::Country => &mut form.country,
            Field::Role => &mut form.role,
            Field::Years => &mut form.years,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    /// Editing the row with this id. The id is the form's hidden field.
    Edit { id: i64 },
}

/// Which request a submit produced; kept so the response is reported in the
/// terms of the submit even if the mode changed meanwhile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitKind {
    Create,
    Update,
}

impl SubmitKind {
    pub fn success_message(self) -> &'static str {
        match self {
            SubmitKind::Create => "Employee registered successfully",
            SubmitKind::Update => "Employee updated successfully",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            SubmitKind::Create => "Error registering the employee",
            SubmitKind::Update => "Error updating the employee",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(EmployeeFormData),
    Update { id: i64, form: EmployeeFormData },
}

impl Submission {
    pub fn kind(&self) -> SubmitKind {
        match self {
            Submission::Create(_) => SubmitKind::Create,
            Submission::Update { .. } => SubmitKind::Update,
        }
    }
}

pub const LOAD_FAILED: &str = "Error loading employees";
pub const DELETE_FAILED: &str = "Error deleting the employee";

/// Main state container for the `EmployeesComponent`.
pub struct EmployeesComponent {
    /// Current input values.
    pub form: EmployeeFormData,

    pub mode: FormMode,

    /// Last list fetched from the server, newest first. Replaced wholesale on
    /// every refresh.
    pub employees: Vec<Employee>,

    /// True only while a create/update request is in flight.
    pub loading: bool,

    /// Message shown above the form after a failed request.
    pub error: Option<String>,

    /// Guard so the initial list fetch runs once.
    pub loaded: bool,
}

impl EmployeesComponent {
    pub fn new() -> Self {
        Self {
            form: EmployeeFormData::default(),
            mode: FormMode::Create,
            employees: Vec::new(),
            loading: false,
            error: None,
            loaded: false,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        field.set(&mut self.form, value);
    }

    /// Switches to edit mode with the form filled from the cached row.
    pub fn begin_edit(&mut self, employee: &Employee) {
        self.form = EmployeeFormData::from(employee);
        self.mode = FormMode::Edit { id: employee.id };
    }

    /// Drops in-progress edits. Returns whether anything changed.
    pub fn cancel_edit(&mut self) -> bool {
        if !self.is_editing() {
            return false;
        }
        self.reset_form();
        true
    }

    pub fn reset_form(&mut self) {
        self.form = EmployeeFormData::default();
        self.mode = FormMode::Create;
    }

    /// Marks a submit as in flight and returns the request to send, or `None`
    /// if one is already pending.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.loading {
            return None;
        }
        self.loading = true;

        let form = self.form.clone();
        Some(match self.mode {
            FormMode::Create => Submission::Create(form),
            FormMode::Edit { id } => Submission::Update { id, form },
        })
    }

    pub fn submit_succeeded(&mut self) {
        self.loading = false;
        self.reset_form();
    }

    /// Keeps the form populated so the user can retry.
    pub fn submit_failed(&mut self, kind: SubmitKind) {
        self.loading = false;
        self.error = Some(kind.failure_message().to_string());
    }

    pub fn replace_employees(&mut self, employees: Vec<Employee>) {
        self.employees = employees;
        self.error = None;
    }

    pub fn set_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.is_editing(), self.loading) {
            (false, false) => "Register",
            (false, true) => "Registering...",
            (true, false) => "Update",
            (true, true) => "Updating...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> Employee {
        Employee {
            id: 3,
            name: "Ana".to_string(),
            age: 30,
            country: "Chile".to_string(),
            role: "Engineer".to_string(),
            years_experience: 5,
        }
    }

    fn fill(component: &mut EmployeesComponent) {
        for (field, value) in Field::ALL.into_iter().zip(["Ana", "30", "Chile", "Engineer", "5"]) {
            component.set_field(field, value.to_string());
        }
    }

    #[test]
    fn starts_empty_in_create_mode() {
        let component = EmployeesComponent::new();
        assert_eq!(component.mode, FormMode::Create);
        assert_eq!(component.form, EmployeeFormData::default());
        assert!(!component.loading);
        assert!(!component.loaded);
        assert_eq!(component.submit_label(), "Register");
    }

    #[test]
    fn create_submit_clears_form_on_success() {
        let mut component = EmployeesComponent::new();
        fill(&mut component);

        let submission = component.begin_submit().unwrap();
        assert_eq!(submission.kind(), SubmitKind::Create);
        assert!(component.loading);
        assert_eq!(component.submit_label(), "Registering...");
        assert!(component.begin_submit().is_none());

        component.submit_succeeded();
        assert!(!component.loading);
        assert_eq!(component.form, EmployeeFormData::default());
        assert_eq!(component.mode, FormMode::Create);
    }

    #[test]
    fn failed_submit_keeps_form_for_retry() {
        let mut component = EmployeesComponent::new();
        fill(&mut component);
        let before = component.form.clone();

        component.begin_submit().unwrap();
        component.submit_failed(SubmitKind::Create);

        assert!(!component.loading);
        assert_eq!(component.form, before);
        assert_eq!(component.error.as_deref(), Some("Error registering the employee"));
        assert!(component.begin_submit().is_some());
    }

    #[test]
    fn edit_prefills_and_submits_update_for_that_id() {
        let mut component = EmployeesComponent::new();
        component.begin_edit(&ana());
        assert_eq!(component.mode, FormMode::Edit { id: 3 });
        assert_eq!(Field::Age.value(&component.form), "30");
        assert_eq!(Field::Years.value(&component.form), "5");
        assert_eq!(component.submit_label(), "Update");

        component.set_field(Field::Age, "31".to_string());
        let submission = component.begin_submit().unwrap();
        assert_eq!(component.submit_label(), "Updating...");
        match submission {
            Submission::Update { id, form } => {
                assert_eq!(id, 3);
                assert_eq!(form.age, "31");
            }
            other => panic!("expected update, got {other:?}"),
        }

        component.submit_succeeded();
        assert_eq!(component.mode, FormMode::Create);
    }

    #[test]
    fn cancel_only_applies_while_editing() {
        let mut component = EmployeesComponent::new();
        fill(&mut component);
        assert!(!component.cancel_edit());
        assert_eq!(component.form.name, "Ana");

        component.begin_edit(&ana());
        component.set_field(Field::Role, "Lead".to_string());
        assert!(component.cancel_edit());
        assert_eq!(component.mode, FormMode::Create);
        assert_eq!(component.form, EmployeeFormData::default());
    }

    #[test]
    fn refresh_replaces_list_and_clears_error() {
        let mut component = EmployeesComponent::new();
        component.set_error(LOAD_FAILED);
        component.replace_employees(vec![ana()]);
        assert_eq!(component.employees, vec![ana()]);
        assert!(component.error.is_none());

        component.replace_employees(Vec::new());
        assert!(component.employees.is_empty());
    }

    #[test]
    fn removing_the_edited_row_leaves_the_form_alone() {
        let mut component = EmployeesComponent::new();
        component.replace_employees(vec![ana()]);
        component.begin_edit(&ana());

        component.replace_employees(Vec::new());
        assert_eq!(component.mode, FormMode::Edit { id: 3 });
        assert_eq!(component.form.name, "Ana");
    }
}
