use serde::{Deserialize, Serialize};
use validator::Validate;

/// Stored employee row, also the wire record returned by the API.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl Employee {
    pub fn new(id: i32, details: EmployeeDetails) -> Self {
        Self {
            id,
            first_name: details.first_name,
            last_name: details.last_name,
            email: details.email,
            phone: details.phone,
        }
    }

    /// Overwrites every mutable field, keeping the identifier.
    pub fn with_details(self, details: EmployeeDetails) -> Self {
        Self::new(self.id, details)
    }
}

/// Body of create and update requests. Every field is required.
#[derive(Deserialize, Validate, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    #[validate(required)]
    pub first_name: Option<String>,
    #[validate(required)]
    pub last_name: Option<String>,
    #[validate(required)]
    pub email: Option<String>,
    #[validate(required)]
    pub phone: Option<String>,
}

/// The four writable fields once a payload has passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// Missing fields become empty strings; call only on a payload that passed `validate`.
impl From<EmployeePayload> for EmployeeDetails {
    fn from(payload: EmployeePayload) -> Self {
        Self {
            first_name: payload.first_name.unwrap_or_default(),
            last_name: payload.last_name.unwrap_or_default(),
            email: payload.email.unwrap_or_default(),
            phone: payload.phone.unwrap_or_default(),
        }
    }
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: &'static str,
}
