use super::{Check, CheckContext, Rating};
use futures::future::join_all;

const LOG_TARGET: &str = "     suite";

/// The registry of checks a repository is rated against.
#[derive(Debug)]
pub struct Suite {
    checks: Vec<Box<dyn Check>>,
    fair_threshold: f64,
    good_threshold: f64,
}

impl Suite {
    /// Create an empty suite. Scores at or above `good_threshold` rate as good,
    /// at or above `fair_threshold` as fair, and anything else as poor.
    #[must_use]
    pub const fn new(fair_threshold: f64, good_threshold: f64) -> Self {
        Self {
            checks: Vec::new(),
            fair_threshold,
            good_threshold,
        }
    }

    pub fn add_check(&mut self, check: impl Check + 'static) -> &mut Self {
        self.checks.push(Box::new(check));
        self
    }

    #[must_use]
    pub fn with_check(mut self, check: impl Check + 'static) -> Self {
        let _ = self.add_check(check);
        self
    }

    pub fn checks(&self) -> impl Iterator<Item = &dyn Check> {
        self.checks.iter().map(|check| &**check as &dyn Check)
    }

    /// Run every check, one after the other, and aggregate the results.
    pub async fn rate(&self, context: &CheckContext) -> Rating {
        let name = context.display_name();
        log::info!(target: LOG_TARGET, "Rating '{name}' with {} check(s)", self.checks.len());

        let mut results = Vec::with_capacity(self.checks.len());
        for check in &self.checks {
            let result = check.run(context).await;
            log::debug!(
                target: LOG_TARGET,
                "Check '{}' {} for '{name}'",
                result.name,
                if result.passed { "passed" } else { "failed" }
            );
            results.push(result);
        }

        let rating = Rating::new(name, results, self.fair_threshold, self.good_threshold);
        log::info!(
            target: LOG_TARGET,
            "'{}' scored {:.2} ({}/{} points), rated {}",
            rating.name,
            rating.score,
            rating.awarded_points,
            rating.available_points,
            rating.tier
        );

        rating
    }

    /// Rate several repositories concurrently; each rating is independent.
    pub async fn rate_all(&self, contexts: &[CheckContext]) -> Vec<Rating> {
        join_all(contexts.iter().map(|context| self.rate(context))).await
    }
}
