//! Stores settings that are not expected to need to change but grouped together
//! for discoverability and reuse. Each constant should be prefixed by the module
//! name to allow importing the constant only and still be readable

pub const PANIC_ON_RARE_ERR: bool = true;

pub mod session {
    /// Key the current user is persisted under in durable storage
    pub const SESSION_STORAGE_KEY: &str = "fintrak_user";

    /// Display name attached to sessions created from the login form (the form
    /// does not ask for a name)
    pub const SESSION_LOGIN_DISPLAY_NAME: &str = "Demo User";
}

pub mod navigation {
    /// Upper bound on redirect hops for a single navigation. The longest
    /// legitimate chain is wrong role -> `/dashboard` -> landing route
    pub const NAVIGATION_MAX_REDIRECTS: usize = 4;
}

pub mod path {
    mod path_spec;
    use crate::uac::Role;
    pub use path_spec::{Access, PathSpec};

    // Public
    pub const PATH_HOME: PathSpec = PathSpec::public("/");
    pub const PATH_LOGIN: PathSpec = PathSpec::public("/login");
    pub const PATH_SIGNUP: PathSpec = PathSpec::public("/signup");
    pub const PATH_ABOUT: PathSpec = PathSpec::public("/about");
    pub const PATH_CONTACT: PathSpec = PathSpec::public("/contact");

    // Any logged in user
    pub const PATH_PROFILE: PathSpec = PathSpec::session("/profile");
    pub const PATH_ACCOUNT_SETTINGS: PathSpec = PathSpec::session("/account-settings");
    pub const PATH_NOTIFICATIONS: PathSpec = PathSpec::session("/notifications");
    pub const PATH_DASHBOARD: PathSpec = PathSpec::session("/dashboard");

    // Employee
    pub const PATH_DASHBOARD_ADD_EXPENSE: PathSpec =
        PathSpec::role("/dashboard/add-expense", Role::Employee);
    pub const PATH_DASHBOARD_MANAGE_EXPENSES: PathSpec =
        PathSpec::role("/dashboard/manage-expenses", Role::Employee);
    pub const PATH_DASHBOARD_ANALYTICS: PathSpec =
        PathSpec::role("/dashboard/analytics", Role::Employee);

    // Manager
    pub const PATH_DASHBOARD_APPROVE_EXPENSES: PathSpec =
        PathSpec::role("/dashboard/approve-expenses", Role::Manager);
    pub const PATH_DASHBOARD_HISTORY: PathSpec =
        PathSpec::role("/dashboard/history", Role::Manager);
    pub const PATH_DASHBOARD_TEAM_OVERVIEW: PathSpec =
        PathSpec::role("/dashboard/team-overview", Role::Manager);

    // Admin
    pub const PATH_DASHBOARD_ALL_EMPLOYEES: PathSpec =
        PathSpec::role("/dashboard/all-employees", Role::Admin);
    pub const PATH_DASHBOARD_ALL_MANAGERS: PathSpec =
        PathSpec::role("/dashboard/all-managers", Role::Admin);
    pub const PATH_DASHBOARD_COMPANY_OVERVIEW: PathSpec =
        PathSpec::role("/dashboard/company-overview", Role::Admin);

    /// Everything under this prefix needs a session even if the path is unknown
    pub const PATH_DASHBOARD_PREFIX: &str = "/dashboard/";

    pub const ALL_PATHS: [PathSpec; 18] = [
        PATH_HOME,
        PATH_LOGIN,
        PATH_SIGNUP,
        PATH_ABOUT,
        PATH_CONTACT,
        PATH_PROFILE,
        PATH_ACCOUNT_SETTINGS,
        PATH_NOTIFICATIONS,
        PATH_DASHBOARD,
        PATH_DASHBOARD_ADD_EXPENSE,
        PATH_DASHBOARD_MANAGE_EXPENSES,
        PATH_DASHBOARD_ANALYTICS,
        PATH_DASHBOARD_APPROVE_EXPENSES,
        PATH_DASHBOARD_HISTORY,
        PATH_DASHBOARD_TEAM_OVERVIEW,
        PATH_DASHBOARD_ALL_EMPLOYEES,
        PATH_DASHBOARD_ALL_MANAGERS,
        PATH_DASHBOARD_COMPANY_OVERVIEW,
    ];
}
