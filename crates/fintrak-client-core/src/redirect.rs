//! Turns rejected navigations into where to go instead, and decides where to
//! go after the session changes

use fintrak_shared::{
    const_config::path::{PATH_DASHBOARD, PATH_LOGIN, PATH_SIGNUP},
    uac::UserInfo,
};
use tracing::{instrument, warn};

use crate::{
    gate::Rejection,
    navigation::{Location, RedirectReason},
    routes::{RequestedPath, RouteTable},
};

/// Where to send the user when the gate rejects a navigation
#[instrument(ret, skip(session))]
pub fn on_rejection(rejection: &Rejection, session: Option<&UserInfo>) -> (Location, RedirectReason) {
    match rejection {
        Rejection::LoginRequired { return_to } => (
            Location::new(PATH_LOGIN.path).with_return_to(return_to.clone()),
            RedirectReason::LoginRequired,
        ),
        // They can't reach the view no matter what so there is nothing to return to
        Rejection::WrongRole { .. } => (Location::new(PATH_DASHBOARD.path), RedirectReason::WrongRole),
        Rejection::NotFound => {
            let target = if session.is_some() {
                PATH_DASHBOARD
            } else {
                PATH_LOGIN
            };
            (Location::new(target.path), RedirectReason::NotFound)
        }
    }
}

/// Where to go once a session has been created. Resumes the remembered path if
/// there is a usable one otherwise the landing view for the role
#[instrument(ret, skip(user, routes), fields(role = %user.role))]
pub fn after_login(return_to: Option<&str>, user: &UserInfo, routes: &RouteTable) -> Location {
    if let Some(return_to) = return_to {
        let requested = RequestedPath::parse(return_to);
        let is_auth_form =
            requested.path() == PATH_LOGIN.path || requested.path() == PATH_SIGNUP.path;
        if !is_auth_form && routes.contains(requested.path()) {
            return Location::new(requested.full());
        }
        warn!(?return_to, "ignoring unusable return path");
    }
    Location::new(user.role.landing_path().path)
}

pub fn after_logout() -> Location {
    Location::new(PATH_LOGIN.path)
}
