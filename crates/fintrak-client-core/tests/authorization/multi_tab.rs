use std::sync::{Arc, Mutex};

use fintrak_client_core::{Location, RedirectReason};
use fintrak_shared::uac::Role;

use crate::helpers::{spawn_app_logged_in, TestUser};

#[test]
fn logout_in_one_tab_closes_views_in_the_other() {
    // Arrange
    let (first_tab, _) = spawn_app_logged_in(Role::Employee);
    let second_tab = first_tab.reload();
    second_tab.client.navigate("/profile").unwrap();
    let notified = Arc::new(Mutex::new(Vec::new()));
    let notified_clone = Arc::clone(&notified);
    second_tab
        .client
        .subscribe(move |user| notified_clone.lock().unwrap().push(user.is_some()));

    // Act
    first_tab.client.logout().unwrap();
    let outcome = second_tab.client.sync_external_changes().unwrap().unwrap();

    // Assert
    assert!(!second_tab.client.is_logged_in());
    assert_eq!(outcome.redirects[0].reason, RedirectReason::LoginRequired);
    assert_eq!(
        outcome.location,
        Location::new("/login").with_return_to("/profile")
    );
    assert_eq!(*notified.lock().unwrap(), vec![false]);
}

#[test]
fn sync_without_external_change_does_nothing() {
    // Arrange
    let (first_tab, _) = spawn_app_logged_in(Role::Manager);
    let second_tab = first_tab.reload();
    second_tab.client.navigate("/notifications").unwrap();

    // Act
    second_tab.client.logout().unwrap();
    let own_change = second_tab.client.sync_external_changes().unwrap();
    let first_sync = first_tab.client.sync_external_changes().unwrap();
    let second_sync = first_tab.client.sync_external_changes().unwrap();

    // Assert
    assert!(own_change.is_none(), "own writes are not external");
    assert!(first_sync.is_none(), "first tab never navigated");
    assert!(!first_tab.client.is_logged_in());
    assert!(second_sync.is_none());
}

#[test]
fn login_in_one_tab_is_picked_up_by_the_other() {
    // Arrange
    let (first_tab, _) = spawn_app_logged_in(Role::Admin);
    first_tab.client.logout().unwrap();
    let second_tab = first_tab.reload();
    second_tab.client.navigate("/about").unwrap();
    let user = TestUser::generate(Role::Manager);

    // Act
    first_tab.login_as(&user);
    let outcome = second_tab.client.sync_external_changes().unwrap().unwrap();

    // Assert
    assert_eq!(outcome.location, Location::new("/about"));
    let user_info = second_tab.client.user_info().unwrap();
    assert_eq!(user_info.role, Role::Manager);
    assert_eq!(user_info.work_id.as_ref(), user.work_id);
}

#[test]
fn login_in_other_tab_resumes_remembered_view() {
    // Arrange
    let (first_tab, _) = spawn_app_logged_in(Role::Employee);
    first_tab.client.logout().unwrap();
    let second_tab = first_tab.reload();
    let waiting = second_tab.client.navigate("/dashboard/history").unwrap();
    assert_eq!(
        waiting.location,
        Location::new("/login").with_return_to("/dashboard/history")
    );

    // Act
    first_tab.login_as(&TestUser::generate(Role::Manager));
    let outcome = second_tab.client.sync_external_changes().unwrap().unwrap();

    // Assert
    assert_eq!(outcome.requested, "/dashboard/history");
    assert_eq!(outcome.location, Location::new("/dashboard/history"));
    assert_eq!(
        second_tab.client.current_location(),
        Some(Location::new("/dashboard/history"))
    );
}
