//! Data collection from remote services
//!
//! This module gathers the raw information the checks rate a repository on.
//! Providers talk to external APIs through [`http::fetch_json`] and wrap every
//! answer in a [`ProviderResult`], which is either `Found` or `Unavailable`.
//! A failing provider never aborts a rating run; it simply has nothing to say.

pub mod coverage;
pub mod http;
pub(crate) mod json_utils;
mod provider_result;
mod repo_slug;

pub use provider_result::ProviderResult;
pub use repo_slug::RepoSlug;
