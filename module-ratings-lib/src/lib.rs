#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for module-ratings
//!
//! This library holds all functionality of the module-ratings tool, which rates
//! a software module repository by running a suite of independent checks and
//! aggregating them into a score.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`checks`]: The checks, the suite that runs them, and the resulting rating
//! - [`facts`]: Data collection from remote services
//! - [`reports`]: Report generation

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod checks;
pub mod commands;
pub mod facts;
pub mod reports;

pub use crate::commands::{Host, run};
