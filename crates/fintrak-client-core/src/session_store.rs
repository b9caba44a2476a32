//! Single source of truth for who is logged in, backed by durable storage

use std::{fmt::Debug, sync::Arc};

use fintrak_shared::{
    const_config::session::SESSION_STORAGE_KEY, log_err_as_error, log_err_as_warn, uac::UserInfo,
};
use tracing::{info, instrument, warn};

use crate::storage::{KeyValueStorage, StorageError};

/// Called with the new session every time it changes
pub type SessionListener = Box<dyn FnMut(Option<&UserInfo>) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

pub struct SessionStore {
    storage: Box<dyn KeyValueStorage>,
    current: Option<Arc<UserInfo>>,
    listeners: Vec<(SubscriptionId, SessionListener)>,
    next_subscription_id: u64,
}

impl SessionStore {
    /// Creates an anonymous store. Call [`Self::load`] to restore a persisted
    /// session
    pub fn new(storage: Box<dyn KeyValueStorage>) -> Self {
        Self {
            storage,
            current: None,
            listeners: Vec::new(),
            next_subscription_id: 0,
        }
    }

    /// Replaces the in memory session with whatever is in durable storage.
    /// Anything that cannot be read or parsed is treated as no session and a
    /// record that fails to parse is removed
    ///
    /// Returns the session after loading
    #[instrument(skip(self))]
    pub fn load(&mut self) -> Option<Arc<UserInfo>> {
        // What we load now is the baseline for later external changes
        let _ = self.storage.take_external_change();
        let loaded = self.read_record().map(Arc::new);
        self.replace_current(loaded);
        self.current()
    }

    /// Reloads only if another handle on the same storage changed it since we
    /// last looked. Returns `true` if the session changed as a result
    #[instrument(skip(self))]
    pub fn sync_external_changes(&mut self) -> bool {
        if !self.storage.take_external_change() {
            return false;
        }
        info!("storage changed externally, reloading session");
        let loaded = self.read_record().map(Arc::new);
        self.replace_current(loaded)
    }

    pub fn current(&self) -> Option<Arc<UserInfo>> {
        self.current.clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    /// Replaces the session. `Some` is persisted and `None` removes the
    /// durable record. The in memory value changes even if persisting fails
    #[instrument(skip(self))]
    pub fn set(&mut self, session: Option<UserInfo>) {
        match &session {
            Some(user_info) => match serde_json::to_string(user_info) {
                Ok(record) => {
                    log_err_as_warn!(self.storage.set_item(SESSION_STORAGE_KEY, &record))
                }
                serialize_result => log_err_as_error!(serialize_result),
            },
            None => log_err_as_warn!(self.storage.remove_item(SESSION_STORAGE_KEY)),
        }
        // Our own write is not an external change
        let _ = self.storage.take_external_change();
        self.replace_current(session.map(Arc::new));
    }

    pub fn clear(&mut self) {
        self.set(None);
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(Option<&UserInfo>) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription_id);
        self.next_subscription_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if no listener was registered with that id
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        before != self.listeners.len()
    }

    fn read_record(&mut self) -> Option<UserInfo> {
        let record = match self.storage.get_item(SESSION_STORAGE_KEY) {
            Ok(Some(record)) => record,
            Ok(None) => return None,
            Err(e @ StorageError::Corrupt { .. }) => {
                warn!(?e, "discarding unreadable storage");
                self.discard_record();
                return None;
            }
            Err(e) => {
                warn!(?e, "failed to read session record, treating as logged out");
                return None;
            }
        };
        match serde_json::from_str(&record) {
            Ok(user_info) => Some(user_info),
            Err(e) => {
                warn!(?e, "discarding invalid session record");
                self.discard_record();
                None
            }
        }
    }

    fn discard_record(&mut self) {
        log_err_as_warn!(self.storage.remove_item(SESSION_STORAGE_KEY));
        let _ = self.storage.take_external_change();
    }

    /// Returns `true` if the value changed. Listeners are only told about
    /// actual changes
    fn replace_current(&mut self, new: Option<Arc<UserInfo>>) -> bool {
        if self.current == new {
            return false;
        }
        info!(
            from = ?self.current.as_ref().map(|user| (&user.work_id, user.role)),
            to = ?new.as_ref().map(|user| (&user.work_id, user.role)),
            "session changed"
        );
        self.current = new;
        for (_, listener) in self.listeners.iter_mut() {
            listener(self.current.as_deref());
        }
        true
    }
}

impl Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("storage", &self.storage)
            .field("current", &self.current)
            .field("listener_count", &self.listeners.len())
            .finish()
    }
}
