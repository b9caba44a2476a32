use fintrak_client_core::{Client, KeyValueStorage as _, MemoryStorage};
use fintrak_shared::{
    const_config::session::SESSION_STORAGE_KEY,
    req_args::{LoginReqArgs, SignupReqArgs},
    telemetry::{get_subscriber, init_subscriber},
    uac::{Role, WorkId},
};
use rand::distributions::{Alphanumeric, DistString as _};
use std::sync::LazyLock;

// Ensure that the `tracing` stack is only initialised once
pub static TRACING: LazyLock<String> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber).unwrap();
        "Traces for tests being written to stdout".to_string()
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).unwrap();
        "Traces set to std::io::sink".to_string()
    }
});

#[derive(Debug)]
pub struct TestApp {
    pub client: Client,
    /// Shares its items with the storage inside `client`
    pub storage: MemoryStorage,
}

#[derive(Debug)]
pub struct TestUser {
    pub work_id: String,
    pub password: String,
    pub role: Role,
}

impl TestApp {
    /// Simulates reloading the page: a fresh client over the same storage
    pub fn reload(&self) -> Self {
        spawn_app_with_storage(self.storage.clone())
    }

    pub fn stored_record(&self) -> Option<String> {
        self.storage.get_item(SESSION_STORAGE_KEY).unwrap()
    }

    pub fn login_as(&self, user: &TestUser) -> fintrak_client_core::NavigationOutcome {
        self.client
            .login(user.login_args())
            .expect("login with valid test user failed")
    }
}

impl TestUser {
    pub fn generate(role: Role) -> Self {
        let prefix = match role {
            Role::Employee => "EMP",
            Role::Manager => "MGR",
            Role::Admin => "ADM",
        };
        let remaining_length = WorkId::MAX_LENGTH - prefix.len() - 1;
        Self {
            work_id: format!(
                "{prefix}-{}",
                Alphanumeric.sample_string(&mut rand::thread_rng(), remaining_length)
            ),
            password: Alphanumeric.sample_string(&mut rand::thread_rng(), 12),
            role,
        }
    }

    pub fn login_args(&self) -> LoginReqArgs {
        LoginReqArgs::new(self.work_id.clone(), self.password.clone().into(), self.role)
    }

    pub fn signup_args(&self) -> SignupReqArgs {
        SignupReqArgs::new(
            "Test User".to_string(),
            self.work_id.clone(),
            format!("{}@example.com", self.work_id.to_lowercase()),
            self.password.clone().into(),
            self.role,
        )
    }
}

pub fn spawn_app() -> TestApp {
    spawn_app_with_storage(MemoryStorage::new())
}

pub fn spawn_app_with_storage(storage: MemoryStorage) -> TestApp {
    // Accessing TRACING also forces the LazyLock to initialize
    let _ = &*TRACING;
    TestApp {
        client: Client::new(Box::new(storage.clone())),
        storage,
    }
}

/// Starts with a user already stored, as if they logged in on a previous visit
pub fn spawn_app_logged_in(role: Role) -> (TestApp, TestUser) {
    let user = TestUser::generate(role);
    let app = spawn_app();
    app.login_as(&user);
    (app.reload(), user)
}
