use fintrak_client_core::KeyValueStorage as _;
use fintrak_shared::{const_config::session::SESSION_STORAGE_KEY, uac::Role};
use rstest::rstest;

use crate::helpers::{spawn_app, spawn_app_logged_in, spawn_app_with_storage, TestUser};

#[test]
fn logout_then_reload_is_anonymous() {
    // Arrange
    let (app, _) = spawn_app_logged_in(Role::Admin);

    // Act
    app.client.logout().unwrap();
    let reloaded = app.reload();

    // Assert
    assert!(app.stored_record().is_none());
    assert!(!reloaded.client.is_logged_in());
}

#[rstest]
#[case(Role::Employee)]
#[case(Role::Manager)]
#[case(Role::Admin)]
fn signup_survives_reload(#[case] role: Role) {
    // Arrange
    let app = spawn_app();
    let user = TestUser::generate(role);
    let args = user
        .signup_args()
        .department(Some("Finance".to_string()))
        .contact_number(Some("555-0100".to_string()));
    app.client.signup(args).unwrap();
    let expected = app.client.user_info().unwrap();

    // Act
    let reloaded = app.reload();

    // Assert
    assert_eq!(reloaded.client.user_info(), Some(expected));
}

#[test]
fn stored_record_has_role_and_name_but_no_password() {
    // Arrange
    let app = spawn_app();
    let user = TestUser::generate(Role::Manager);

    // Act
    app.login_as(&user);

    // Assert
    let record: serde_json::Value = serde_json::from_str(&app.stored_record().unwrap()).unwrap();
    assert_eq!(record["role"], "MANAGER");
    assert_eq!(record["name"], "Demo User");
    assert_eq!(record["workId"], user.work_id.as_str());
    assert!(record.get("password").is_none());
    assert!(!app.stored_record().unwrap().contains(&user.password));
}

#[rstest]
#[case::truncated(r#"{"workId":"E-1","name":"Jo","role":"EMP"#)]
#[case::not_json("undefined")]
#[case::missing_role(r#"{"workId":"E-1","name":"Jo"}"#)]
fn corrupted_record_starts_anonymous(#[case] record: &str) {
    // Arrange
    let mut storage = fintrak_client_core::MemoryStorage::new();
    storage.set_item(SESSION_STORAGE_KEY, record).unwrap();

    // Act
    let app = spawn_app_with_storage(storage);

    // Assert
    assert!(!app.client.is_logged_in());
    assert!(app.stored_record().is_none(), "corrupt record should be removed");
    let outcome = app.client.navigate("/profile").unwrap();
    assert_eq!(outcome.location.path, "/login");
}

#[test]
fn listeners_see_login_and_logout() {
    use std::sync::{Arc, Mutex};

    // Arrange
    let app = spawn_app();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = Arc::clone(&seen);
    app.client
        .subscribe(move |user| seen_clone.lock().unwrap().push(user.map(|u| u.role)));
    let user = TestUser::generate(Role::Employee);

    // Act
    app.login_as(&user);
    app.client.logout().unwrap();

    // Assert
    assert_eq!(*seen.lock().unwrap(), vec![Some(Role::Employee), None]);
}

#[test]
fn unreadable_session_file_starts_anonymous_and_is_removed() {
    use rand::distributions::{Alphanumeric, DistString as _};

    // Arrange
    let path = std::env::temp_dir()
        .join("fintrak-authorization-tests")
        .join(format!(
            "{}.json",
            Alphanumeric.sample_string(&mut rand::thread_rng(), 16)
        ));
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{not json").unwrap();

    // Act
    let storage = fintrak_client_core::FileStorage::new(path.clone());
    let client = fintrak_client_core::Client::new(Box::new(storage));

    // Assert
    assert!(!client.is_logged_in());
    assert!(!path.exists(), "unreadable session file should be removed");
}
