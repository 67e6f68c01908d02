use super::codecov::FALLBACK_BRANCH;
use crate::facts::ProviderResult;
use crate::facts::http::fetch_json;
use crate::facts::json_utils::{as_number, is_empty_document, lookup};
use crate::facts::repo_slug::RepoSlug;
use serde_json::Value;

const LOG_TARGET: &str = "scrutinizer";

pub const SCRUTINIZER_BASE_URL: &str = "https://scrutinizer-ci.com";

const QUALITY_METRIC: &str = "scrutinizer.quality";

/// Quality-score lookups against the scrutinizer-ci.com repository API.
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
            base_url: base_url.unwrap_or(SCRUTINIZER_BASE_URL).trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the quality score of the repository's default branch, scaled to 0..100.
    ///
    /// Scrutinizer responses carry no `meta.status`, so any non-empty document is
    /// examined.
    pub async fn get_coverage(&self, slug: &RepoSlug) -> ProviderResult<f64> {
        log::info!(target: LOG_TARGET, "Querying '{}' for quality score of '{slug}'", self.base_url);

        let url = format!("{}/api/repositories/g/{slug}", self.base_url);
        let doc = match fetch_json(&self.client, &url).await {
            Ok(doc) => doc,
            Err(e) => {
                log::debug!(target: LOG_TARGET, "Could not fetch '{url}': {e}");
                return ProviderResult::unavailable(format!("could not fetch '{url}'"));
            }
        };

        if is_empty_document(&doc) {
            return ProviderResult::unavailable(format!("empty response from '{url}'"));
        }

        let branch = lookup(&doc, &["default_branch"]).and_then(Value::as_str).unwrap_or(FALLBACK_BRANCH);

        let Some(metrics) = lookup(&doc, &["applications", branch, "index", "_embedded", "project", "metric_values"]) else {
            log::debug!(target: LOG_TARGET, "No metric values for branch '{branch}' of '{slug}'");
            return ProviderResult::unavailable(format!("no metrics for branch '{branch}' on scrutinizer"));
        };

        let quality = lookup(metrics, &[QUALITY_METRIC]).and_then(as_number).map_or(0.0, |q| q * 100.0);
        log::debug!(target: LOG_TARGET, "Found quality score {quality} for '{slug}' on branch '{branch}'");

        ProviderResult::Found(quality)
    }
}
