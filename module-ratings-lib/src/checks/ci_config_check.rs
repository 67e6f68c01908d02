use super::{Check, CheckContext, CheckResult};
use crate::Result;
use camino::Utf8Path;
use futures::FutureExt;
use futures::future::BoxFuture;
use ohno::IntoAppError;

const LOG_TARGET: &str = " ci_config";

const MAX_WORKFLOW_FILES: usize = 100;

/// Single-file CI configurations, relative to the checkout root.
const CI_CONFIG_FILES: &[&str] = &[".travis.yml", ".gitlab-ci.yml", ".circleci/config.yml"];

/// Passes when the repository checkout contains continuous integration configuration.
#[derive(Debug, Clone)]
pub struct CiConfigCheck {
    points: u32,
}

impl CiConfigCheck {
    pub const NAME: &'static str = "ci_config";

    #[must_use]
    pub const fn new(points: u32) -> Self {
        Self { points }
    }
}

/// Look for a CI configuration, returning the first one found relative to `repo_path`.
pub fn find_ci_config(repo_path: &Utf8Path) -> Result<Option<String>> {
    for file in CI_CONFIG_FILES {
        if repo_path.join(file).is_file() {
            return Ok(Some((*file).to_string()));
        }
    }

    let workflows_dir = repo_path.join(".github").join("workflows");
    if !workflows_dir.is_dir() {
        return Ok(None);
    }

    let mut file_count = 0;

    for entry_result in walkdir::WalkDir::new(&workflows_dir).follow_links(false) {
        let entry = entry_result.into_app_err("could not walk workflows directory")?;

        if entry.file_type().is_dir() {
            continue;
        }

        file_count += 1;
        if file_count > MAX_WORKFLOW_FILES {
            log::warn!(target: LOG_TARGET, "Workflow file count limit ({MAX_WORKFLOW_FILES}) exceeded, stopping scan");
            break;
        }

        let is_yaml = entry
            .path()
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext == "yml" || ext == "yaml");

        if is_yaml {
            let relative = entry.path().strip_prefix(repo_path.as_std_path()).unwrap_or_else(|_| entry.path());
            return Ok(Some(relative.to_string_lossy().replace('\\', "/")));
        }
    }

    Ok(None)
}

impl Check for CiConfigCheck {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "The repository has continuous integration configured"
    }

    fn points(&self) -> u32 {
        self.points
    }

    fn run<'a>(&'a self, context: &'a CheckContext) -> BoxFuture<'a, CheckResult> {
        async move {
            let Some(directory) = context.directory() else {
                return CheckResult::new(self, false, Some("no local checkout to inspect".to_string()));
            };

            let directory = directory.to_path_buf();
            let scan = tokio::task::spawn_blocking(move || find_ci_config(&directory)).await;

            match scan {
                Ok(Ok(Some(path))) => CheckResult::new(self, true, Some(format!("found {path}"))),
                Ok(Ok(None)) => CheckResult::new(self, false, Some("no CI configuration found".to_string())),
                Ok(Err(e)) => {
                    log::warn!(target: LOG_TARGET, "Could not scan for CI configuration: {e:#}");
                    CheckResult::new(self, false, Some(format!("{e}")))
                }
                Err(e) => {
                    log::warn!(target: LOG_TARGET, "CI configuration scan did not complete: {e}");
                    CheckResult::new(self, false, Some("CI configuration scan did not complete".to_string()))
                }
            }
        }
        .boxed()
    }
}
