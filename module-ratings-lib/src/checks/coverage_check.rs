use super::{Check, CheckContext, CheckResult};
use crate::facts::coverage::{codecov, scrutinizer};
use crate::facts::{ProviderResult, RepoSlug};
use futures::FutureExt;
use futures::future::BoxFuture;

const LOG_TARGET: &str = "  coverage";

/// Rates a repository on its test coverage.
///
/// Coverage comes from codecov.io, falling back to the scrutinizer-ci.com
/// quality score when codecov has nothing for the repository. The check passes
/// when the percentage reaches the threshold.
#[derive(Debug, Clone)]
pub struct CoverageCheck {
    name: String,
    description: String,
    points: u32,
    threshold: i64,
    codecov: codecov::Provider,
    scrutinizer: scrutinizer::Provider,
}

impl CoverageCheck {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        points: u32,
        codecov: codecov::Provider,
        scrutinizer: scrutinizer::Provider,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            points,
            threshold: 0,
            codecov,
            scrutinizer,
        }
    }

    /// Percentage the coverage must reach for the check to pass.
    #[must_use]
    pub const fn threshold(&self) -> i64 {
        self.threshold
    }

    pub const fn set_threshold(&mut self, threshold: i64) -> &mut Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: i64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Coverage percentage of the repository, or 0 when no provider has data.
    pub async fn coverage(&self, context: &CheckContext) -> f64 {
        let Some(slug) = context.slug() else {
            log::debug!(target: LOG_TARGET, "No repository slug, skipping coverage lookup");
            return 0.0;
        };

        match self.codecov_coverage(slug).await {
            ProviderResult::Found(coverage) => coverage,
            ProviderResult::Unavailable(reason) => {
                log::info!(target: LOG_TARGET, "Codecov unavailable for '{slug}' ({reason}), falling back to scrutinizer");
                self.scrutinizer_coverage(slug).await.found_or(0.0)
            }
        }
    }

    /// Coverage reported by codecov.io.
    pub async fn codecov_coverage(&self, slug: &RepoSlug) -> ProviderResult<f64> {
        self.codecov.get_coverage(slug).await
    }

    /// Quality score reported by scrutinizer-ci.com, as a percentage.
    pub async fn scrutinizer_coverage(&self, slug: &RepoSlug) -> ProviderResult<f64> {
        self.scrutinizer.get_coverage(slug).await
    }

    #[expect(clippy::cast_precision_loss, reason = "thresholds are small integers")]
    fn evaluate(&self, coverage: f64) -> CheckResult {
        let passed = coverage >= self.threshold as f64;
        let detail = format!("coverage {coverage:.2}% (threshold {}%)", self.threshold);
        CheckResult::new(self, passed, Some(detail))
    }
}

impl Check for CoverageCheck {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn points(&self) -> u32 {
        self.points
    }

    fn run<'a>(&'a self, context: &'a CheckContext) -> BoxFuture<'a, CheckResult> {
        async move {
            let coverage = self.coverage(context).await;
            self.evaluate(coverage)
        }
        .boxed()
    }
}
