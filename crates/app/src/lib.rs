//! `candyworld` command-line front end: configuration, catalog bootstrap and
//! query rendering.

pub mod cli;
pub mod config;
pub mod query;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use query::run_query;
