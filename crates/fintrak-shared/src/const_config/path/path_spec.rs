use crate::uac::Role;

/// What a navigation needs before the view may render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    Public,
    SessionRequired,
    RoleRequired(Role),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathSpec {
    pub path: &'static str,
    pub access: Access,
}

impl PathSpec {
    pub const fn public(path: &'static str) -> Self {
        Self {
            path,
            access: Access::Public,
        }
    }

    pub const fn session(path: &'static str) -> Self {
        Self {
            path,
            access: Access::SessionRequired,
        }
    }

    pub const fn role(path: &'static str, role: Role) -> Self {
        Self {
            path,
            access: Access::RoleRequired(role),
        }
    }
}

impl Access {
    /// Returns `true` if a session must be present to render the view
    #[must_use]
    pub fn is_protected(&self) -> bool {
        !matches!(self, Self::Public)
    }

    pub fn required_role(&self) -> Option<Role> {
        match self {
            Access::RoleRequired(role) => Some(*role),
            Access::Public | Access::SessionRequired => None,
        }
    }
}

impl std::fmt::Display for Access {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Access::Public => write!(f, "public"),
            Access::SessionRequired => write!(f, "session"),
            Access::RoleRequired(role) => write!(f, "role {role}"),
        }
    }
}
