use std::fmt::Display;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ConversionError;

use super::Role;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
/// Identifier employees log in with. Constrained to not be an empty string
pub struct WorkId(String);

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayName(String);

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl WorkId {
    pub const MAX_LENGTH: usize = 32;
}

impl DisplayName {
    pub const MAX_LENGTH: usize = 50;
}

impl Email {
    pub const MAX_LENGTH: usize = 254;
}

fn check_length(value: &str, max: usize) -> Result<(), ConversionError> {
    if value.is_empty() {
        return Err(ConversionError::Empty);
    }
    let actual = value.chars().count();
    if actual > max {
        return Err(ConversionError::MaxExceeded { max, actual });
    }
    Ok(())
}

impl TryFrom<String> for WorkId {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let value = value.trim().to_string();
        check_length(&value, Self::MAX_LENGTH)?;
        Ok(Self(value))
    }
}

impl TryFrom<&str> for WorkId {
    type Error = ConversionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.to_string().try_into()
    }
}

impl TryFrom<String> for DisplayName {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let value = value.trim().to_string();
        check_length(&value, Self::MAX_LENGTH)?;
        Ok(Self(value))
    }
}

impl TryFrom<&str> for DisplayName {
    type Error = ConversionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.to_string().try_into()
    }
}

impl TryFrom<String> for Email {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let value = value.trim().to_string();
        check_length(&value, Self::MAX_LENGTH)?;
        let mut parts = value.split('@');
        let is_valid = matches!(
            (parts.next(), parts.next(), parts.next()),
            (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty()
        );
        if !is_valid {
            return Err(ConversionError::InvalidEmail(value));
        }
        Ok(Self(value))
    }
}

impl TryFrom<&str> for Email {
    type Error = ConversionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.to_string().try_into()
    }
}

impl From<WorkId> for String {
    fn from(value: WorkId) -> Self {
        value.0
    }
}

impl From<DisplayName> for String {
    fn from(value: DisplayName) -> Self {
        value.0
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl AsRef<str> for WorkId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for WorkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for DisplayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The current logged in identity. This is what gets persisted under
/// [`SESSION_STORAGE_KEY`](crate::const_config::session::SESSION_STORAGE_KEY)
///
/// NB: Nothing here is verified by a server. Whatever role the login form
/// submits is taken as true
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub work_id: WorkId,
    pub name: DisplayName,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_joined: Option<NaiveDate>,
}

impl UserInfo {
    pub fn new(work_id: WorkId, name: DisplayName, role: Role) -> Self {
        Self {
            work_id,
            name,
            role,
            email: None,
            department: None,
            position: None,
            contact_number: None,
            date_joined: None,
        }
    }

    pub fn email(mut self, email: Option<Email>) -> Self {
        self.email = email;
        self
    }

    pub fn department(mut self, department: Option<String>) -> Self {
        self.department = department;
        self
    }

    pub fn position(mut self, position: Option<String>) -> Self {
        self.position = position;
        self
    }

    pub fn contact_number(mut self, contact_number: Option<String>) -> Self {
        self.contact_number = contact_number;
        self
    }
}
