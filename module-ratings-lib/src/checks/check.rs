use super::CheckContext;
use futures::future::BoxFuture;

/// A single, independent test run against a repository.
pub trait Check: Send + Sync + core::fmt::Debug {
    /// Stable identifier, used in configuration and reports.
    fn name(&self) -> &str;

    /// Human-readable explanation of what passing the check means.
    fn description(&self) -> &str;

    /// Points awarded when the check passes.
    fn points(&self) -> u32;

    /// Run the check. Checks never fail; problems become a failed result.
    fn run<'a>(&'a self, context: &'a CheckContext) -> BoxFuture<'a, CheckResult>;
}

/// The outcome of running one check.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub name: String,
    pub description: String,
    pub points: u32,
    pub passed: bool,
    pub detail: Option<String>,
}

impl CheckResult {
    pub fn new(check: &(impl Check + ?Sized), passed: bool, detail: Option<String>) -> Self {
        Self {
            name: check.name().to_string(),
            description: check.description().to_string(),
            points: check.points(),
            passed,
            detail,
        }
    }

    /// Points awarded by this result.
    #[must_use]
    pub const fn awarded_points(&self) -> u32 {
        if self.passed { self.points } else { 0 }
    }
}
