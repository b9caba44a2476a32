//! Code shared between the client core and the front ends built on it

#![warn(unused_crate_dependencies)]

pub mod const_config;
pub mod errors;
mod macros;
pub mod req_args;
pub mod telemetry;
pub mod uac;
