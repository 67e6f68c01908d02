//! Command-line interface and orchestration for module-ratings
//!
//! This module implements the CLI commands and wires configuration, the check
//! suite and the report generators together.
//!
//! ## Commands
//!
//! - **rate**: Rate one or more repositories by slug, optionally inspecting a
//!   local checkout, and report the results on the console and/or as JSON
//! - **init**: Generate a default configuration file
//! - **validate**: Check that a configuration file loads and yields a usable suite
//!
//! The `common` module holds the shared pieces: logging setup, configuration
//! loading, building the [`Suite`](crate::checks::Suite) from configuration, and
//! report generation.

mod common;
mod config;
mod host;
mod init;
mod rate;
mod run;
mod validate;

pub use common::build_suite;
pub use config::Config;
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use rate::{RateArgs, rate_repositories};
pub use run::run;
pub use validate::{ValidateArgs, validate_config};
