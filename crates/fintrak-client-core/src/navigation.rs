use fintrak_shared::{
    const_config::{navigation::NAVIGATION_MAX_REDIRECTS, path::PathSpec},
    uac::UserInfo,
};
use tracing::{debug, info, instrument};

use crate::{
    gate::{self, Decision},
    redirect,
    routes::{RequestedPath, RouteTable},
};

/// A place in the app plus the remembered path to resume after logging in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub return_to: Option<String>,
}

impl Location {
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self {
            path: path.into(),
            return_to: None,
        }
    }

    pub fn with_return_to<S: Into<String>>(mut self, return_to: S) -> Self {
        self.return_to = Some(return_to.into());
        self
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.return_to {
            Some(return_to) => write!(f, "{} (return to {return_to})", self.path),
            None => write!(f, "{}", self.path),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum RedirectReason {
    #[strum(to_string = "login required")]
    LoginRequired,
    #[strum(to_string = "role not allowed")]
    WrongRole,
    #[strum(to_string = "not found")]
    NotFound,
    #[strum(to_string = "dashboard index")]
    DashboardIndex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub from: String,
    pub to: String,
    pub reason: RedirectReason,
}

/// What happened for one navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationOutcome {
    /// As originally asked for
    pub requested: String,
    /// Where we ended up
    pub location: Location,
    /// The view that renders at `location`
    pub view: PathSpec,
    pub redirects: Vec<Redirect>,
}

impl NavigationOutcome {
    pub fn was_redirected(&self) -> bool {
        !self.redirects.is_empty()
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum NavigationError {
    #[error("gave up navigating to {requested:?} after {} redirects", chain.len())]
    TooManyRedirects {
        requested: String,
        chain: Vec<Redirect>,
    },
}

/// The one place navigation happens. Keeps the history of rendered locations
#[derive(Debug, Default)]
pub struct Navigator {
    history: Vec<Location>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Location> {
        self.history.last()
    }

    pub fn history(&self) -> &[Location] {
        &self.history
    }

    /// Runs `target` through the gate, following redirects until a view is
    /// accepted. Only the final location is added to the history
    #[instrument(skip(self, session, routes), fields(session_role = ?session.map(|user| user.role)))]
    pub fn navigate(
        &mut self,
        target: Location,
        session: Option<&UserInfo>,
        routes: &RouteTable,
    ) -> Result<NavigationOutcome, NavigationError> {
        let requested = target.path.clone();
        let mut location = target;
        let mut redirects = Vec::new();
        loop {
            let requested_path = RequestedPath::parse(&location.path);
            let route = routes.lookup(&requested_path);
            let (next, reason) = match gate::authorize(session, &route, &requested_path) {
                Decision::Accept(view) => {
                    match session.and_then(|user| routes.index_redirect(&view, user.role)) {
                        Some(index_target) => (
                            Location::new(index_target.path),
                            RedirectReason::DashboardIndex,
                        ),
                        None => {
                            location.path = requested_path.full();
                            info!(%location, redirect_count = redirects.len(), "navigated");
                            self.history.push(location.clone());
                            return Ok(NavigationOutcome {
                                requested,
                                location,
                                view,
                                redirects,
                            });
                        }
                    }
                }
                Decision::Reject(rejection) => redirect::on_rejection(&rejection, session),
            };

            let redirect = Redirect {
                from: location.path.clone(),
                to: next.path.clone(),
                reason,
            };
            debug!(?redirect);
            redirects.push(redirect);
            if redirects.len() > NAVIGATION_MAX_REDIRECTS {
                return Err(NavigationError::TooManyRedirects {
                    requested,
                    chain: redirects,
                });
            }
            location = next;
        }
    }
}
