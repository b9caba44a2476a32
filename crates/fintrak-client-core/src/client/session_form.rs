//! Builds sessions from what the login and signup forms submit. Nothing is
//! checked against a server, the submitted role is taken as given

use fintrak_shared::{
    const_config::session::SESSION_LOGIN_DISPLAY_NAME,
    req_args::{LoginReqArgs, SignupReqArgs},
    uac::{DisplayName, Email, LoginError, SignupError, UserInfo, WorkId},
};
use secrecy::ExposeSecret as _;

pub(crate) fn login_display_name() -> DisplayName {
    DisplayName::try_from(SESSION_LOGIN_DISPLAY_NAME).expect("test below ensures this is valid")
}

#[tracing::instrument(ret, err(Debug))]
pub(crate) fn user_info_from_login(args: &LoginReqArgs) -> Result<UserInfo, LoginError> {
    if args.password.expose_secret().is_empty() {
        return Err(LoginError::EmptyPassword);
    }
    let work_id = WorkId::try_from(args.work_id.as_str()).map_err(LoginError::InvalidWorkId)?;
    Ok(UserInfo::new(work_id, login_display_name(), args.role))
}

#[tracing::instrument(ret, err(Debug))]
pub(crate) fn user_info_from_signup(args: &SignupReqArgs) -> Result<UserInfo, SignupError> {
    if !args.is_password_set() {
        return Err(SignupError::EmptyPassword);
    }
    if !args.passwords_match() {
        return Err(SignupError::PasswordsDoNotMatch);
    }
    let name =
        DisplayName::try_from(args.name.as_str()).map_err(SignupError::invalid_field("name"))?;
    let work_id =
        WorkId::try_from(args.work_id.as_str()).map_err(SignupError::invalid_field("work id"))?;
    let email =
        Email::try_from(args.email.as_str()).map_err(SignupError::invalid_field("email"))?;
    Ok(UserInfo::new(work_id, name, args.role)
        .email(Some(email))
        .department(non_blank(&args.department))
        .position(non_blank(&args.position))
        .contact_number(non_blank(&args.contact_number)))
}

/// Optional form fields come through as empty strings when left blank
fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
