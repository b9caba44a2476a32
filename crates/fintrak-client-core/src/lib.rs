//! Stores functionality that should be shared between different FinTrak clients
//!
//! The [`Client`] owns the current session and is the only way to change it.
//! Every navigation goes through the authorization gate and redirect policy
//! before a view is reported as rendered.
//!
//! NB: The role on a session is whatever the login form submitted. Nothing
//! here is a security boundary, it only decides what views to show.

#![warn(unused_crate_dependencies)]

mod client;
pub mod gate;
pub mod navigation;
pub mod redirect;
pub mod routes;
pub mod session_store;
pub mod storage;

pub use client::Client;
pub use gate::{Decision, Rejection};
pub use navigation::{Location, NavigationError, NavigationOutcome, Redirect, RedirectReason};
pub use routes::{RequestedPath, RouteMatch, RouteTable};
pub use session_store::{SessionStore, SubscriptionId};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
