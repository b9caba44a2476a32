use crate::errors::ConversionError;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SignupError {
    #[error("You entered two different passwords - the field values must match.")]
    PasswordsDoNotMatch,
    #[error("Password must not be empty")]
    EmptyPassword,
    #[error("Invalid {field}: {source}")]
    InvalidField {
        field: &'static str,
        source: ConversionError,
    },
}

impl SignupError {
    pub fn invalid_field(field: &'static str) -> impl FnOnce(ConversionError) -> Self {
        move |source| Self::InvalidField { field, source }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum LoginError {
    #[error("Invalid work id: {0}")]
    InvalidWorkId(ConversionError),
    #[error("Password must not be empty")]
    EmptyPassword,
}
