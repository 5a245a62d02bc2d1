//! Employee Model

use serde::{Deserialize, Deserializer, Serialize};

use crate::validation::{self, FieldRules, NOT_BLANK, Validate, Violations, WELL_FORMED_EMAIL};

/// Employee ID type
pub type EmployeeId = i64;

/// Employee record
///
/// `id` is `0` until the record has been stored. Fields missing from an
/// incoming body (or sent as `null`) decode to empty strings so they surface
/// as validation violations instead of decode failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(default, rename_all = "camelCase")]
pub struct Employee {
    #[serde(deserialize_with = "null_as_default")]
    pub id: EmployeeId,
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Employee {
    pub fn builder() -> EmployeeBuilder {
        EmployeeBuilder::default()
    }

    /// Whether the record has not been stored yet
    pub fn is_new(&self) -> bool {
        self.id == 0
    }
}

/// Builder for [`Employee`]; unset fields keep their zero values
#[derive(Debug, Clone, Default)]
pub struct EmployeeBuilder {
    inner: Employee,
}

impl EmployeeBuilder {
    pub fn id(mut self, id: EmployeeId) -> Self {
        self.inner.id = id;
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.inner.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.inner.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.inner.email = email.into();
        self
    }

    pub fn build(self) -> Employee {
        self.inner
    }
}

fn first_name(e: &Employee) -> &str {
    &e.first_name
}

fn last_name(e: &Employee) -> &str {
    &e.last_name
}

fn email(e: &Employee) -> &str {
    &e.email
}

/// Field rules of an employee, keyed by wire name
pub const EMPLOYEE_RULES: &[FieldRules<Employee>] = &[
    FieldRules {
        field: "firstName",
        value: first_name,
        rules: &[NOT_BLANK],
    },
    FieldRules {
        field: "lastName",
        value: last_name,
        rules: &[NOT_BLANK],
    },
    FieldRules {
        field: "email",
        value: email,
        rules: &[NOT_BLANK, WELL_FORMED_EMAIL],
    },
];

impl Validate for Employee {
    fn validate(&self) -> Violations {
        validation::validate(self, EMPLOYEE_RULES)
    }
}
