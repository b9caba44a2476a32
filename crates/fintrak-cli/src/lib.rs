#![warn(unused_crate_dependencies)]

pub mod cli;
pub mod commands;
pub mod configuration;
pub mod tracing;
