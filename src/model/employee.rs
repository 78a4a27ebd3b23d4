use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumMessage, EnumString};

use crate::model::record_id::RecordId;
use crate::panel::Entity;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeRecord {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub national_id_number: String,
}

impl EmployeeRecord {
    pub fn new(
        id: impl Into<RecordId>,
        first_name: &str,
        last_name: &str,
        email: &str,
        national_id_number: &str,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email: email.to_owned(),
            national_id_number: national_id_number.to_owned(),
        }
    }
}

/// Editable fields of the employee form, named as they appear on the wire.
#[derive(Debug, Display, EnumString, EnumIter, EnumMessage, Clone, Copy, PartialEq, Eq)]
#[strum(ascii_case_insensitive)]
pub enum EmployeeField {
    #[strum(serialize = "firstName", message = "First name")]
    FirstName,
    #[strum(serialize = "lastName", message = "Last name")]
    LastName,
    #[strum(serialize = "email", message = "E-mail")]
    Email,
    #[strum(serialize = "nationalIdNumber", message = "NIS number")]
    NationalIdNumber,
}

/// Server-side search keys accepted by `GET /employees?{key}={value}`.
#[derive(Debug, Display, EnumString, EnumIter, EnumMessage, Clone, Copy, PartialEq, Eq)]
#[strum(ascii_case_insensitive)]
pub enum EmployeeFilter {
    #[strum(serialize = "name", message = "Name")]
    Name,
    #[strum(serialize = "surname", message = "Surname")]
    Surname,
    #[strum(serialize = "email", message = "E-mail")]
    Email,
    #[strum(serialize = "nationalIdNumber", message = "NIS number")]
    NationalIdNumber,
}

impl Entity for EmployeeRecord {
    type Field = EmployeeField;
    type Filter = EmployeeFilter;

    const RESOURCE: &'static str = "employees";
    const TITLE: &'static str = "Employees";
    const SINGULAR: &'static str = "Employee";

    fn id(&self) -> RecordId {
        self.id
    }

    fn get(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::FirstName => &self.first_name,
            EmployeeField::LastName => &self.last_name,
            EmployeeField::Email => &self.email,
            EmployeeField::NationalIdNumber => &self.national_id_number,
        }
    }

    fn set(&mut self, field: EmployeeField, value: String) {
        match field {
            EmployeeField::FirstName => self.first_name = value,
            EmployeeField::LastName => self.last_name = value,
            EmployeeField::Email => self.email = value,
            EmployeeField::NationalIdNumber => self.national_id_number = value,
        }
    }
}
