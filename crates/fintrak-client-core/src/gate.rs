//! Decides per navigation whether a view may render
//!
//! The only inputs are the current session (if any) and what the route
//! requires. A missing session is checked before any role requirement so a
//! single navigation never produces two competing redirects.

use fintrak_shared::{
    const_config::path::{Access, PathSpec},
    uac::{Role, UserInfo},
};
use tracing::instrument;

use crate::routes::{RequestedPath, RouteMatch};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Accept(PathSpec),
    Reject(Rejection),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// No session for a view that needs one. Holds the path to resume after
    /// logging in
    LoginRequired { return_to: String },
    /// Logged in but not with the role the view is restricted to
    WrongRole { required: Role, actual: Role },
    /// No such view
    NotFound,
}

impl Decision {
    /// Returns `true` if the decision is [`Accept`].
    ///
    /// [`Accept`]: Decision::Accept
    #[must_use]
    pub fn is_accept(&self) -> bool {
        matches!(self, Self::Accept(..))
    }
}

#[instrument(ret, skip(session), fields(session_role = ?session.map(|user| user.role)))]
pub fn authorize(
    session: Option<&UserInfo>,
    route: &RouteMatch,
    requested: &RequestedPath,
) -> Decision {
    let spec = match route {
        RouteMatch::Known(spec) => *spec,
        RouteMatch::UnknownProtected if session.is_none() => {
            return Decision::Reject(Rejection::LoginRequired {
                return_to: requested.full(),
            })
        }
        RouteMatch::UnknownProtected | RouteMatch::Unknown => {
            return Decision::Reject(Rejection::NotFound)
        }
    };

    let Some(user) = session else {
        return if spec.access.is_protected() {
            Decision::Reject(Rejection::LoginRequired {
                return_to: requested.full(),
            })
        } else {
            Decision::Accept(spec)
        };
    };

    match spec.access {
        Access::RoleRequired(required) if required != user.role => {
            Decision::Reject(Rejection::WrongRole {
                required,
                actual: user.role,
            })
        }
        Access::Public | Access::SessionRequired | Access::RoleRequired(_) => {
            Decision::Accept(spec)
        }
    }
}
