use crate::model::{Driver, DriverPayload, DEFAULT_ROLE};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Username,
    Password,
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    OperationalTime,
    Route,
    VehicleNumber,
    VehicleBrand,
    VehicleSeries,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
            Self::FirstName => "firstname",
            Self::LastName => "lastname",
            Self::Email => "email",
            Self::PhoneNumber => "phone_number",
            Self::OperationalTime => "operational_time",
            Self::Route => "route",
            Self::VehicleNumber => "vehicle_number",
            Self::VehicleBrand => "vehicle_brand",
            Self::VehicleSeries => "vehicle_series",
        }
    }
}

// Required in both modes; create mode additionally requires the password.
// First and last name deliberately stay optional in both variants.
const ALWAYS_REQUIRED: [Field; 5] = [
    Field::Username,
    Field::Email,
    Field::PhoneNumber,
    Field::OperationalTime,
    Field::Route,
];

/// Per-field validation flags over the required subset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    invalid: BTreeSet<Field>,
}

impl FieldErrors {
    pub fn is_invalid(&self, field: Field) -> bool {
        self.invalid.contains(&field)
    }

    pub fn set(&mut self, field: Field, invalid: bool) {
        if invalid {
            self.invalid.insert(field);
        } else {
            self.invalid.remove(&field);
        }
    }

    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty()
    }
}

/// Submission lifecycle. `Submitting` doubles as the in-flight guard that
/// makes a second submit a no-op until the first one settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Succeeded,
    Failed,
}

/// Mutable snapshot of all driver fields while the form is alive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverFormData {
    pub username: String,
    pub password: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone_number: String,
    pub role: String,
    pub operational_time: String,
    pub route: String,
    pub vehicle_number: String,
    pub vehicle_brand: String,
    pub vehicle_series: String,
}

impl Default for DriverFormData {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            firstname: String::new(),
            lastname: String::new(),
            email: String::new(),
            phone_number: String::new(),
            role: DEFAULT_ROLE.to_string(),
            operational_time: String::new(),
            route: String::new(),
            vehicle_number: String::new(),
            vehicle_brand: String::new(),
            vehicle_series: String::new(),
        }
    }
}

/// Form controller state for both the create and the edit workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverForm {
    pub mode: FormMode,
    pub data: DriverFormData,
    pub errors: FieldErrors,
    pub phase: FormPhase,
}

impl DriverForm {
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            data: DriverFormData::default(),
            errors: FieldErrors::default(),
            phase: FormPhase::default(),
        }
    }

    pub fn is_required(&self, field: Field) -> bool {
        ALWAYS_REQUIRED.contains(&field)
            || (field == Field::Password && self.mode == FormMode::Create)
    }

    fn required_fields(&self) -> Vec<Field> {
        let mut fields = ALWAYS_REQUIRED.to_vec();
        if self.mode == FormMode::Create {
            fields.push(Field::Password);
        }
        fields
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.data.username,
            Field::Password => &self.data.password,
            Field::FirstName => &self.data.firstname,
            Field::LastName => &self.data.lastname,
            Field::Email => &self.data.email,
            Field::PhoneNumber => &self.data.phone_number,
            Field::OperationalTime => &self.data.operational_time,
            Field::Route => &self.data.route,
            Field::VehicleNumber => &self.data.vehicle_number,
            Field::VehicleBrand => &self.data.vehicle_brand,
            Field::VehicleSeries => &self.data.vehicle_series,
        }
    }

    /// Update one field and recompute its error flag. Fields outside the
    /// required subset never get flagged, whatever their content.
    pub fn set_field(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Username => &mut self.data.username,
            Field::Password => &mut self.data.password,
            Field::FirstName => &mut self.data.firstname,
            Field::LastName => &mut self.data.lastname,
            Field::Email => &mut self.data.email,
            Field::PhoneNumber => &mut self.data.phone_number,
            Field::OperationalTime => &mut self.data.operational_time,
            Field::Route => &mut self.data.route,
            Field::VehicleNumber => &mut self.data.vehicle_number,
            Field::VehicleBrand => &mut self.data.vehicle_brand,
            Field::VehicleSeries => &mut self.data.vehicle_series,
        };
        *slot = value.to_string();
        if self.is_required(field) {
            let invalid = value.trim().is_empty();
            self.errors.set(field, invalid);
        }
    }

    /// Pre-populate from an existing record. The password always starts
    /// empty, meaning "leave unchanged".
    pub fn populate(&mut self, driver: &Driver) {
        self.data = DriverFormData {
            username: driver.username.clone(),
            password: String::new(),
            firstname: driver.firstname.clone(),
            lastname: driver.lastname.clone(),
            email: driver.email.clone(),
            phone_number: driver.phone_number.clone(),
            role: DEFAULT_ROLE.to_string(),
            operational_time: driver.operational_time.clone(),
            route: driver.route.clone(),
            vehicle_number: driver.vehicle_number.clone(),
            vehicle_brand: driver.vehicle_brand.clone(),
            vehicle_series: driver.vehicle_series.clone(),
        };
        self.errors = FieldErrors::default();
    }

    /// Recompute the full error set against the required subset.
    /// Returns true iff submission may proceed.
    pub fn validate(&mut self) -> bool {
        for field in self.required_fields() {
            let invalid = self.get(field).trim().is_empty();
            self.errors.set(field, invalid);
        }
        self.errors.is_clean()
    }

    /// Build the request body. In edit mode a blank password is dropped
    /// entirely instead of being sent as an empty string.
    pub fn payload(&self) -> DriverPayload {
        let password = match self.mode {
            FormMode::Create => Some(self.data.password.clone()),
            FormMode::Edit(_) => {
                if self.data.password.trim().is_empty() {
                    None
                } else {
                    Some(self.data.password.clone())
                }
            }
        };
        DriverPayload {
            username: self.data.username.clone(),
            password,
            firstname: self.data.firstname.clone(),
            lastname: self.data.lastname.clone(),
            email: self.data.email.clone(),
            phone_number: self.data.phone_number.clone(),
            role: self.data.role.clone(),
            operational_time: self.data.operational_time.clone(),
            route: self.data.route.clone(),
            vehicle_number: self.data.vehicle_number.clone(),
            vehicle_brand: self.data.vehicle_brand.clone(),
            vehicle_series: self.data.vehicle_series.clone(),
        }
    }

    /// Enter the submitting phase. Refused while a submission is in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.phase == FormPhase::Submitting {
            return false;
        }
        self.phase = FormPhase::Submitting;
        true
    }

    pub fn finish_submit(&mut self, success: bool) {
        self.phase = if success {
            FormPhase::Succeeded
        } else {
            FormPhase::Failed
        };
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_create_form() -> DriverForm {
        let mut form = DriverForm::new(FormMode::Create);
        form.set_field(Field::Username, "jdoe");
        form.set_field(Field::Email, "a@b.com");
        form.set_field(Field::PhoneNumber, "555");
        form.set_field(Field::OperationalTime, "08-16");
        form.set_field(Field::Route, "A1");
        form.set_field(Field::Password, "x");
        form
    }

    fn sample_driver() -> Driver {
        Driver {
            id: Some(7),
            username: "jdoe".to_string(),
            firstname: "John".to_string(),
            lastname: "Doe".to_string(),
            email: "a@b.com".to_string(),
            phone_number: "555".to_string(),
            role: DEFAULT_ROLE.to_string(),
            operational_time: "08-16".to_string(),
            route: "A1".to_string(),
            vehicle_number: "B-1234".to_string(),
            vehicle_brand: "Toyota".to_string(),
            vehicle_series: "HiAce".to_string(),
        }
    }

    #[test]
    fn create_form_with_required_fields_validates() {
        let mut form = filled_create_form();
        assert!(form.validate());
        assert!(form.errors.is_clean());
    }

    #[test]
    fn any_missing_required_field_blocks_validation() {
        for field in [
            Field::Username,
            Field::Email,
            Field::PhoneNumber,
            Field::OperationalTime,
            Field::Route,
            Field::Password,
        ] {
            let mut form = filled_create_form();
            form.set_field(field, "   ");
            assert!(!form.validate(), "{field:?} should be required");
            assert!(form.errors.is_invalid(field));
        }
    }

    #[test]
    fn names_are_never_required() {
        let mut form = filled_create_form();
        assert!(form.validate());
        form.set_field(Field::FirstName, "");
        form.set_field(Field::LastName, "");
        assert!(form.validate());
        assert!(!form.errors.is_invalid(Field::FirstName));
        assert!(!form.errors.is_invalid(Field::LastName));
    }

    #[test]
    fn password_not_required_in_edit_mode() {
        let mut form = DriverForm::new(FormMode::Edit(7));
        form.populate(&sample_driver());
        assert!(form.validate());
    }

    #[test]
    fn non_required_fields_never_raise_error_flags() {
        let mut form = DriverForm::new(FormMode::Create);
        form.set_field(Field::VehicleBrand, "   ");
        assert!(!form.errors.is_invalid(Field::VehicleBrand));
    }

    #[test]
    fn edit_payload_omits_blank_password() {
        let mut form = DriverForm::new(FormMode::Edit(7));
        form.populate(&sample_driver());
        let value = serde_json::to_value(form.payload()).unwrap();
        assert!(value.get("password").is_none());
    }

    #[test]
    fn edit_payload_carries_changed_password_verbatim() {
        let mut form = DriverForm::new(FormMode::Edit(7));
        form.populate(&sample_driver());
        form.set_field(Field::Password, "s3cret");
        let value = serde_json::to_value(form.payload()).unwrap();
        assert_eq!(value["password"], "s3cret");
    }

    #[test]
    fn create_payload_includes_password_and_defaults() {
        let form = filled_create_form();
        let value = serde_json::to_value(form.payload()).unwrap();
        assert_eq!(value["password"], "x");
        assert_eq!(value["role"], DEFAULT_ROLE);
        assert_eq!(value["firstname"], "");
    }

    #[test]
    fn populate_copies_record_with_empty_password() {
        let mut form = DriverForm::new(FormMode::Edit(7));
        form.populate(&sample_driver());
        assert_eq!(form.get(Field::Username), "jdoe");
        assert_eq!(form.get(Field::VehicleNumber), "B-1234");
        assert_eq!(form.get(Field::Password), "");
    }

    #[test]
    fn missing_record_leaves_empty_defaults() {
        let form = DriverForm::new(FormMode::Edit(99));
        assert_eq!(form.data, DriverFormData::default());
    }

    #[test]
    fn settling_touches_only_the_phase() {
        let mut form = filled_create_form();
        assert!(form.begin_submit());
        // the user keeps typing while the request is in flight
        form.set_field(Field::Email, "new@b.com");
        form.finish_submit(false);
        assert_eq!(form.get(Field::Email), "new@b.com");
        assert_eq!(form.phase, FormPhase::Failed);
    }

    #[test]
    fn double_submit_is_refused_while_in_flight() {
        let mut form = filled_create_form();
        assert!(form.begin_submit());
        assert!(!form.begin_submit());
        form.finish_submit(false);
        assert_eq!(form.phase, FormPhase::Failed);
        // a settled failure may be retried
        assert!(form.begin_submit());
        form.finish_submit(true);
        assert_eq!(form.phase, FormPhase::Succeeded);
    }
}
