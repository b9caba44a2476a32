use std::sync::{Arc, Mutex, MutexGuard};

use fintrak_shared::{
    req_args::{LoginReqArgs, SignupReqArgs},
    uac::UserInfo,
};
use tracing::{info, instrument};

use crate::{
    navigation::{Location, NavigationError, NavigationOutcome, Navigator},
    redirect,
    routes::RouteTable,
    session_store::{SessionStore, SubscriptionId},
    storage::KeyValueStorage,
};

mod session_form;

/// Owns the session and the navigation state. Clones share the same state
///
/// NB: Session listeners run while the client is locked, they must not call
/// back into the client
#[derive(Debug, Clone)]
pub struct Client {
    inner: Arc<Mutex<ClientInner>>,
}

#[derive(Debug)]
struct ClientInner {
    session_store: SessionStore,
    navigator: Navigator,
    routes: RouteTable,
}

impl ClientInner {
    fn navigate(&mut self, target: Location) -> Result<NavigationOutcome, NavigationError> {
        let session = self.session_store.current();
        self.navigator.navigate(target, session.as_deref(), &self.routes)
    }

    fn start_session(&mut self, user_info: UserInfo) -> Result<NavigationOutcome, NavigationError> {
        let return_to = self
            .navigator
            .current()
            .and_then(|location| location.return_to.clone());
        let target = redirect::after_login(return_to.as_deref(), &user_info, &self.routes);
        self.session_store.set(Some(user_info));
        self.navigate(target)
    }
}

impl Client {
    /// Restores any persisted session straight away
    #[instrument(name = "NEW CLIENT-CORE", skip(storage))]
    pub fn new(storage: Box<dyn KeyValueStorage>) -> Self {
        Self::with_routes(storage, RouteTable::default())
    }

    #[instrument(skip(storage, routes))]
    pub fn with_routes(storage: Box<dyn KeyValueStorage>, routes: RouteTable) -> Self {
        let mut session_store = SessionStore::new(storage);
        match session_store.load() {
            Some(user_info) => {
                info!(work_id = %user_info.work_id, role = %user_info.role, "session restored")
            }
            None => info!("no session to restore"),
        }
        Self {
            inner: Arc::new(Mutex::new(ClientInner {
                session_store,
                navigator: Navigator::new(),
                routes,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ClientInner> {
        self.inner.lock().expect("mutex poisoned")
    }

    pub fn user_info(&self) -> Option<Arc<UserInfo>> {
        self.lock().session_store.current()
    }

    pub fn is_logged_in(&self) -> bool {
        self.lock().session_store.is_logged_in()
    }

    pub fn current_location(&self) -> Option<Location> {
        self.lock().navigator.current().cloned()
    }

    pub fn routes(&self) -> RouteTable {
        self.lock().routes.clone()
    }

    #[instrument(skip(self))]
    pub fn navigate(&self, path: &str) -> Result<NavigationOutcome, NavigationError> {
        self.lock().navigate(Location::new(path))
    }

    /// Creates a session from the login form and goes to the remembered path
    /// (if the last navigation was redirected to login) or the role's landing
    /// view
    #[instrument(skip(self))]
    pub fn login(&self, args: LoginReqArgs) -> anyhow::Result<NavigationOutcome> {
        let user_info = session_form::user_info_from_login(&args)?;
        Ok(self.lock().start_session(user_info)?)
    }

    #[instrument(skip(self))]
    pub fn signup(&self, args: SignupReqArgs) -> anyhow::Result<NavigationOutcome> {
        let user_info = session_form::user_info_from_signup(&args)?;
        Ok(self.lock().start_session(user_info)?)
    }

    #[instrument(skip(self))]
    pub fn logout(&self) -> Result<NavigationOutcome, NavigationError> {
        let mut inner = self.lock();
        inner.session_store.clear();
        inner.navigate(redirect::after_logout())
    }

    /// Picks up a session change made through another handle on the same
    /// storage (another tab or process). If it changed the current location is
    /// checked again and the outcome of that is returned. A login page that
    /// remembers a path resumes it once a session shows up
    #[instrument(skip(self))]
    pub fn sync_external_changes(&self) -> Result<Option<NavigationOutcome>, NavigationError> {
        let mut inner = self.lock();
        if !inner.session_store.sync_external_changes() {
            return Ok(None);
        }
        let Some(current) = inner.navigator.current().cloned() else {
            return Ok(None);
        };
        let target = match (current.return_to.as_deref(), inner.session_store.current()) {
            (Some(return_to), Some(user_info)) => {
                redirect::after_login(Some(return_to), &user_info, &inner.routes)
            }
            _ => Location::new(current.path),
        };
        inner.navigate(target).map(Some)
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: FnMut(Option<&UserInfo>) + Send + 'static,
    {
        self.lock().session_store.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.lock().session_store.unsubscribe(id)
    }
}
