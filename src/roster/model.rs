use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single employee record.
///
/// Missing JSON fields deserialize to their zero values, so a request body
/// without `id` produces id `0` rather than a decode error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone_no: String,
    pub role: String,
    pub salary: f64,
    pub birthdate: String,
}

impl Employee {
    /// Checks the fields every boundary requires before a create.
    pub fn validate_required(&self) -> Result<()> {
        let required = [&self.first_name, &self.last_name, &self.email, &self.role];
        if required.iter().any(|field| field.is_empty()) {
            return Err(RosterError::Validation("Missing required fields".to_string()));
        }
        Ok(())
    }
}

/// One requested change to an existing employee.
///
/// Conversion from an untyped JSON mapping drops unknown keys and values of
/// the wrong type; applying an update drops empty strings. Neither case is an
/// error.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    FirstName(String),
    LastName(String),
    Email(String),
    Password(String),
    PhoneNo(String),
    Role(String),
    Salary(f64),
    Birthdate(String),
}

impl FieldUpdate {
    /// Builds an update from a JSON key/value pair, if the key is known and
    /// the value has the expected type.
    pub fn from_json(key: &str, value: &Value) -> Option<Self> {
        let text = || value.as_str().map(str::to_string);
        match key {
            "firstName" => text().map(FieldUpdate::FirstName),
            "lastName" => text().map(FieldUpdate::LastName),
            "email" => text().map(FieldUpdate::Email),
            "password" => text().map(FieldUpdate::Password),
            "phoneNo" => text().map(FieldUpdate::PhoneNo),
            "role" => text().map(FieldUpdate::Role),
            "salary" => value.as_f64().map(FieldUpdate::Salary),
            "birthdate" => text().map(FieldUpdate::Birthdate),
            _ => None,
        }
    }

    pub fn from_map(fields: &Map<String, Value>) -> Vec<Self> {
        fields
            .iter()
            .filter_map(|(key, value)| {
                let update = Self::from_json(key, value);
                if update.is_none() {
                    tracing::debug!(
                        key = %key,
                        value = %value,
                        "Ignoring unrecognized update field"
                    );
                }
                update
            })
            .collect()
    }

    pub fn field_name(&self) -> &'static str {
        match self {
            FieldUpdate::FirstName(_) => "firstName",
            FieldUpdate::LastName(_) => "lastName",
            FieldUpdate::Email(_) => "email",
            FieldUpdate::Password(_) => "password",
            FieldUpdate::PhoneNo(_) => "phoneNo",
            FieldUpdate::Role(_) => "role",
            FieldUpdate::Salary(_) => "salary",
            FieldUpdate::Birthdate(_) => "birthdate",
        }
    }

    /// Writes the update into `employee`. Returns `false` when the update was
    /// ignored because the text value is empty.
    pub fn apply(&self, employee: &mut Employee) -> bool {
        let (slot, value) = match self {
            FieldUpdate::Salary(salary) => {
                employee.salary = *salary;
                return true;
            }
            FieldUpdate::FirstName(v) => (&mut employee.first_name, v),
            FieldUpdate::LastName(v) => (&mut employee.last_name, v),
            FieldUpdate::Email(v) => (&mut employee.email, v),
            FieldUpdate::Password(v) => (&mut employee.password, v),
            FieldUpdate::PhoneNo(v) => (&mut employee.phone_no, v),
            FieldUpdate::Role(v) => (&mut employee.role, v),
            FieldUpdate::Birthdate(v) => (&mut employee.birthdate, v),
        };
        if value.is_empty() {
            return false;
        }
        slot.clone_from(value);
        true
    }
}
