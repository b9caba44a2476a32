//! Stores the shape of what the login and signup forms submit. Passwords are
//! kept secret and never end up in a session record

use secrecy::{ExposeSecret, SecretString};
use std::fmt::Debug;

use crate::uac::Role;

#[derive(serde::Deserialize, Clone)]
pub struct LoginReqArgs {
    pub work_id: String,
    pub password: SecretString,
    pub role: Role,
}

#[derive(serde::Deserialize, Clone)]
pub struct SignupReqArgs {
    pub name: String,
    pub work_id: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    pub role: Role,
    pub department: Option<String>,
    pub position: Option<String>,
    pub contact_number: Option<String>,
}

impl LoginReqArgs {
    pub fn new<S: Into<String>>(work_id: S, password: SecretString, role: Role) -> Self {
        Self {
            work_id: work_id.into(),
            password,
            role,
        }
    }
}

impl SignupReqArgs {
    pub fn new<S: Into<String>>(
        name: S,
        work_id: S,
        email: S,
        password: SecretString,
        role: Role,
    ) -> Self {
        Self {
            name: name.into(),
            work_id: work_id.into(),
            email: email.into(),
            confirm_password: password.clone(),
            password,
            role,
            department: None,
            position: None,
            contact_number: None,
        }
    }

    pub fn confirm_password(mut self, confirm_password: SecretString) -> Self {
        self.confirm_password = confirm_password;
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

    pub fn is_password_set(&self) -> bool {
        !self.password.expose_secret().is_empty()
    }

    pub fn passwords_match(&self) -> bool {
        self.password.expose_secret() == self.confirm_password.expose_secret()
    }
}

impl Debug for LoginReqArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginReqArgs")
            .field("work_id", &self.work_id)
            .field("has_password", &!self.password.expose_secret().is_empty())
            .field("role", &self.role)
            .finish()
    }
}

impl Debug for SignupReqArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupReqArgs")
            .field("name", &self.name)
            .field("work_id", &self.work_id)
            .field("email", &self.email)
            .field("has_password", &self.is_password_set())
            .field("role", &self.role)
            .field("department", &self.department)
            .field("position", &self.position)
            .field("contact_number", &self.contact_number)
            .finish()
    }
}
