use std::collections::BTreeMap;

use fintrak_shared::{
    const_config::path::{PathSpec, ALL_PATHS, PATH_DASHBOARD, PATH_DASHBOARD_PREFIX},
    uac::Role,
};
use tracing::instrument;

/// A path as asked for by the user split into the part used for matching and
/// the part that is only carried along (query and fragment)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestedPath {
    path: String,
    suffix: String,
}

impl RequestedPath {
    /// Trailing slashes are dropped (except for the root), a missing leading
    /// slash is added and the path is lower cased. Paths match case
    /// insensitively, the query and fragment keep their case
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let split_at = raw.find(['?', '#']).unwrap_or(raw.len());
        let (path, suffix) = raw.split_at(split_at);
        let path = path.to_lowercase();
        let trimmed = path.trim_end_matches('/');
        let path = if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };
        Self {
            path,
            suffix: suffix.to_string(),
        }
    }

    /// The normalized path used for matching
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The normalized path with the query and fragment as originally given
    pub fn full(&self) -> String {
        format!("{}{}", self.path, self.suffix)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch {
    Known(PathSpec),
    /// Not in the table but inside an area that needs a session
    UnknownProtected,
    Unknown,
}

/// Maps paths to the views and what they need to be accessed
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: BTreeMap<&'static str, PathSpec>,
    protected_prefixes: Vec<&'static str>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new(ALL_PATHS, vec![PATH_DASHBOARD_PREFIX])
    }
}

impl RouteTable {
    pub fn new<I>(routes: I, protected_prefixes: Vec<&'static str>) -> Self
    where
        I: IntoIterator<Item = PathSpec>,
    {
        Self {
            routes: routes.into_iter().map(|spec| (spec.path, spec)).collect(),
            protected_prefixes,
        }
    }

    #[instrument(ret)]
    pub fn lookup(&self, requested: &RequestedPath) -> RouteMatch {
        if let Some(spec) = self.routes.get(requested.path()) {
            return RouteMatch::Known(*spec);
        }
        if self
            .protected_prefixes
            .iter()
            .any(|prefix| requested.path().starts_with(prefix))
        {
            RouteMatch::UnknownProtected
        } else {
            RouteMatch::Unknown
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.routes.contains_key(RequestedPath::parse(path).path())
    }

    /// Some views only exist to pick a more specific view. Returns where to
    /// send a session of `role` instead of rendering `spec`
    pub fn index_redirect(&self, spec: &PathSpec, role: Role) -> Option<PathSpec> {
        (spec.path == PATH_DASHBOARD.path).then(|| role.landing_path())
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathSpec> {
        self.routes.values()
    }
}
