//! Repository checks and their aggregation into a rating
//!
//! Every check implements the [`Check`] trait and is handed the repository to
//! inspect through an explicit [`CheckContext`]. Checks are independent of one
//! another and never fail: anything that goes wrong while checking simply
//! yields a failed [`CheckResult`] with an explanatory detail.
//!
//! # Implementation Model
//!
//! - [`CoverageCheck`] asks codecov.io for the coverage of the default branch
//!   and falls back to the scrutinizer-ci.com quality score.
//! - [`LicenseCheck`] and [`CiConfigCheck`] inspect a local checkout.
//!
//! A [`Suite`] owns the registered checks, runs them in order for a repository,
//! and turns the awarded points into a [`Rating`] with a score and a [`Tier`].

mod check;
mod ci_config_check;
mod context;
mod coverage_check;
mod license_check;
mod rating;
mod suite;

pub use check::{Check, CheckResult};
pub use ci_config_check::{CiConfigCheck, find_ci_config};
pub use context::CheckContext;
pub use coverage_check::CoverageCheck;
pub use license_check::{LicenseCheck, find_license_file};
pub use rating::{Rating, Tier};
pub use suite::Suite;
