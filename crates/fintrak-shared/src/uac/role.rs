use crate::const_config::path::{
    PathSpec, PATH_DASHBOARD_ADD_EXPENSE, PATH_DASHBOARD_APPROVE_EXPENSES,
    PATH_DASHBOARD_COMPANY_OVERVIEW,
};

/// The role tag carried by every session. Decides which dashboard views a
/// session may reach
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Role {
    Employee,
    Manager,
    Admin,
}

impl Role {
    /// Where a session of this role lands when no particular view was asked for
    pub fn landing_path(&self) -> PathSpec {
        match self {
            Role::Employee => PATH_DASHBOARD_ADD_EXPENSE,
            Role::Manager => PATH_DASHBOARD_APPROVE_EXPENSES,
            Role::Admin => PATH_DASHBOARD_COMPANY_OVERVIEW,
        }
    }

    /// Human readable label as shown on the login form
    pub fn label(&self) -> &'static str {
        match self {
            Role::Employee => "Employee",
            Role::Manager => "Manager",
            Role::Admin => "Admin",
        }
    }
}
