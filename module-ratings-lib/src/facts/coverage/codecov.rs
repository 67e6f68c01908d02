use crate::facts::ProviderResult;
use crate::facts::http::fetch_json;
use crate::facts::json_utils::{as_integer, as_number, is_empty_document, lookup};
use crate::facts::repo_slug::RepoSlug;
use serde_json::Value;

const LOG_TARGET: &str = "   codecov";

pub const CODECOV_BASE_URL: &str = "https://codecov.io";

/// Branch assumed when the provider does not report a default branch.
pub const FALLBACK_BRANCH: &str = "master";

/// Coverage lookups against the codecov.io v2 API.
#[derive(Debug, Clone)]
pub struct Provider {
    client: reqwest::Client,
    base_url: String,
}

impl Provider {
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: Option<&str>) -> Self {
        Self {
            client,
            base_url: base_url.unwrap_or(CODECOV_BASE_URL).trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the coverage percentage of the repository's default branch.
    ///
    /// Returns `Found(0.0)` when codecov knows the branch but reports no totals.
    pub async fn get_coverage(&self, slug: &RepoSlug) -> ProviderResult<f64> {
        log::info!(target: LOG_TARGET, "Querying '{}' for code coverage of '{slug}'", self.base_url);

        let branches_url = format!("{}/api/gh/{slug}/branches", self.base_url);
        let branches = match self.fetch_document(&branches_url).await {
            ProviderResult::Found(doc) => doc,
            ProviderResult::Unavailable(reason) => return ProviderResult::Unavailable(reason),
        };

        let branch = lookup(&branches, &["repo", "branch"])
            .and_then(Value::as_str)
            .unwrap_or(FALLBACK_BRANCH);
        log::debug!(target: LOG_TARGET, "Default branch of '{slug}' is '{branch}'");

        let branch_url = format!("{}/api/gh/{slug}/branch/{branch}", self.base_url);
        let detail = match self.fetch_document(&branch_url).await {
            ProviderResult::Found(doc) => doc,
            ProviderResult::Unavailable(reason) => return ProviderResult::Unavailable(reason),
        };

        let coverage = lookup(&detail, &["commit", "totals", "c"]).and_then(as_number).unwrap_or(0.0);
        log::debug!(target: LOG_TARGET, "Found coverage {coverage}% for '{slug}' on branch '{branch}'");

        ProviderResult::Found(coverage)
    }

    /// Fetch a document and reject it if it is empty or reports a non-200 `meta.status`.
    async fn fetch_document(&self, url: &str) -> ProviderResult<Value> {
        let doc = match fetch_json(&self.client, url).await {
            Ok(doc) => doc,
            Err(e) => {
                log::debug!(target: LOG_TARGET, "Could not fetch '{url}': {e}");
                return ProviderResult::unavailable(format!("could not fetch '{url}'"));
            }
        };

        if is_empty_document(&doc) {
            return ProviderResult::unavailable(format!("empty response from '{url}'"));
        }

        if let Some(status) = lookup(&doc, &["meta", "status"])
            && as_integer(status) != Some(200)
        {
            log::debug!(target: LOG_TARGET, "'{url}' reported meta status {status}");
            return ProviderResult::unavailable(format!("repository not set up on codecov (status {status})"));
        }

        ProviderResult::Found(doc)
    }
}
