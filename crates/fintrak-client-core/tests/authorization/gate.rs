use fintrak_client_core::{Location, RedirectReason};
use fintrak_shared::{
    const_config::path::{
        Access, ALL_PATHS, PATH_DASHBOARD, PATH_DASHBOARD_APPROVE_EXPENSES, PATH_LOGIN,
    },
    uac::Role,
};
use rstest::rstest;
use strum::IntoEnumIterator as _;

use crate::helpers::{spawn_app, spawn_app_logged_in};

#[test]
fn matching_role_renders_every_view_for_that_role() {
    for role in Role::iter() {
        // Arrange
        let (app, _) = spawn_app_logged_in(role);

        for spec in ALL_PATHS
            .iter()
            .filter(|spec| spec.access == Access::RoleRequired(role))
        {
            // Act
            let outcome = app.client.navigate(spec.path).unwrap();

            // Assert
            assert_eq!(outcome.view, *spec);
            assert!(
                !outcome.was_redirected(),
                "{role} should reach {spec:?} but got {:?}",
                outcome.redirects
            );
        }
    }
}

#[test]
fn every_protected_view_sends_anonymous_to_login_with_return() {
    // Arrange
    let app = spawn_app();

    for spec in ALL_PATHS.iter().filter(|spec| spec.access.is_protected()) {
        // Act
        let outcome = app.client.navigate(spec.path).unwrap();

        // Assert
        assert_eq!(outcome.view, PATH_LOGIN);
        assert_eq!(
            outcome.location,
            Location::new(PATH_LOGIN.path).with_return_to(spec.path)
        );
        assert_eq!(outcome.redirects[0].reason, RedirectReason::LoginRequired);
    }
}

#[test]
fn other_roles_never_sent_to_login() {
    for actual in Role::iter() {
        // Arrange
        let (app, _) = spawn_app_logged_in(actual);

        for spec in ALL_PATHS.iter().filter(|spec| {
            spec.access
                .required_role()
                .is_some_and(|required| required != actual)
        }) {
            // Act
            let outcome = app.client.navigate(spec.path).unwrap();

            // Assert
            assert_eq!(outcome.redirects[0].reason, RedirectReason::WrongRole);
            assert_eq!(outcome.redirects[0].to, PATH_DASHBOARD.path);
            assert!(outcome.redirects.iter().all(|r| r.to != PATH_LOGIN.path));
            assert_eq!(outcome.view, actual.landing_path());
            assert_eq!(outcome.location.return_to, None);
        }
    }
}

#[test]
fn employee_requesting_manager_view_goes_to_dashboard() {
    // Arrange
    let (app, _) = spawn_app_logged_in(Role::Employee);

    // Act
    let outcome = app
        .client
        .navigate(PATH_DASHBOARD_APPROVE_EXPENSES.path)
        .unwrap();

    // Assert
    assert_eq!(outcome.redirects[0].from, "/dashboard/approve-expenses");
    assert_eq!(outcome.redirects[0].to, "/dashboard");
    assert_eq!(outcome.location, Location::new("/dashboard/add-expense"));
}

#[rstest]
#[case(Role::Employee, "/dashboard/add-expense")]
#[case(Role::Manager, "/dashboard/approve-expenses")]
#[case(Role::Admin, "/dashboard/company-overview")]
fn dashboard_index_lands_on_role_view(#[case] role: Role, #[case] expected: &str) {
    // Arrange
    let (app, _) = spawn_app_logged_in(role);

    // Act
    let outcome = app.client.navigate("/dashboard/").unwrap();

    // Assert
    assert_eq!(outcome.location.path, expected);
    assert_eq!(outcome.redirects.len(), 1);
    assert_eq!(outcome.redirects[0].reason, RedirectReason::DashboardIndex);
}

#[rstest]
#[case::anonymous(None, "/login")]
#[case::employee(Some(Role::Employee), "/dashboard/add-expense")]
#[case::admin(Some(Role::Admin), "/dashboard/company-overview")]
fn unknown_path_falls_back(#[case] role: Option<Role>, #[case] expected: &str) {
    // Arrange
    let app = match role {
        Some(role) => spawn_app_logged_in(role).0,
        None => spawn_app(),
    };

    // Act
    let outcome = app.client.navigate("/expenses/export.csv").unwrap();

    // Assert
    assert_eq!(outcome.redirects[0].reason, RedirectReason::NotFound);
    assert_eq!(outcome.location, Location::new(expected));
}

#[rstest]
#[case("/")]
#[case("/about")]
#[case("/contact")]
#[case("/login")]
#[case("/signup")]
fn public_views_render_for_anyone(#[case] path: &str) {
    let anonymous = spawn_app();
    let (logged_in, _) = spawn_app_logged_in(Role::Manager);

    for app in [anonymous, logged_in] {
        let outcome = app.client.navigate(path).unwrap();
        assert!(!outcome.was_redirected(), "{path} redirected: {outcome:?}");
    }
}

#[test]
fn path_case_does_not_matter() {
    // Arrange
    let app = spawn_app();

    // Act
    let outcome = app.client.navigate("/Dashboard").unwrap();

    // Assert
    assert_eq!(outcome.redirects[0].reason, RedirectReason::LoginRequired);
    assert_eq!(
        outcome.location,
        Location::new("/login").with_return_to("/dashboard")
    );
}
