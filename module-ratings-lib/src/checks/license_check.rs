use super::{Check, CheckContext, CheckResult};
use crate::Result;
use camino::Utf8Path;
use futures::FutureExt;
use futures::future::BoxFuture;
use ohno::IntoAppError;
use std::fs;

const LOG_TARGET: &str = "   license";

const LICENSE_FILE_NAMES: &[&str] = &["license", "license.md", "license.txt", "licence", "licence.md", "licence.txt", "copying"];

/// Passes when the repository checkout ships a license file at its root.
#[derive(Debug, Clone)]
pub struct LicenseCheck {
    points: u32,
}

impl LicenseCheck {
    pub const NAME: &'static str = "license";

    #[must_use]
    pub const fn new(points: u32) -> Self {
        Self { points }
    }
}

/// Look for a license file at the root of `directory`, returning its name.
///
/// Entries that cannot be read are logged and skipped.
pub fn find_license_file(directory: &Utf8Path) -> Result<Option<String>> {
    let entries = fs::read_dir(directory).into_app_err_with(|| format!("could not read directory '{directory}'"))?;

    for entry_result in entries {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!(target: LOG_TARGET, "Skipping unreadable entry in '{directory}': {e}");
                continue;
            }
        };

        let file_name = entry.file_name().to_string_lossy().into_owned();
        if LICENSE_FILE_NAMES.contains(&file_name.to_lowercase().as_str()) && entry.path().is_file() {
            return Ok(Some(file_name));
        }
    }

    Ok(None)
}

impl Check for LicenseCheck {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "The repository has a license file"
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
            let scan = tokio::task::spawn_blocking(move || find_license_file(&directory)).await;

            match scan {
                Ok(Ok(Some(file_name))) => CheckResult::new(self, true, Some(format!("found {file_name}"))),
                Ok(Ok(None)) => CheckResult::new(self, false, Some("no license file found".to_string())),
                Ok(Err(e)) => {
                    log::warn!(target: LOG_TARGET, "Could not scan for a license file: {e:#}");
                    CheckResult::new(self, false, Some(format!("{e}")))
                }
                Err(e) => {
                    log::warn!(target: LOG_TARGET, "License file scan did not complete: {e}");
                    CheckResult::new(self, false, Some("license file scan did not complete".to_string()))
                }
            }
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn context_for(dir: &tempfile::TempDir) -> CheckContext {
        CheckContext::new(None, Some(Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap()))
    }

    #[tokio::test]
    async fn test_license_found() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("LICENSE.md"), "MIT").unwrap();

        let result = LicenseCheck::new(5).run(&context_for(&dir)).await;
        assert!(result.passed);
        assert_eq!(result.detail.as_deref(), Some("found LICENSE.md"));
    }

    #[tokio::test]
    async fn test_copying_counts_as_license() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("COPYING"), "GPL").unwrap();

        assert!(LicenseCheck::new(5).run(&context_for(&dir)).await.passed);
    }

    #[tokio::test]
    async fn test_license_directory_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("license")).unwrap();

        assert!(!LicenseCheck::new(5).run(&context_for(&dir)).await.passed);
    }

    #[tokio::test]
    async fn test_missing_license() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("README.md"), "hello").unwrap();

        let result = LicenseCheck::new(5).run(&context_for(&dir)).await;
        assert!(!result.passed);
        assert_eq!(result.awarded_points(), 0);
    }

    #[tokio::test]
    async fn test_no_directory() {
        let result = LicenseCheck::new(5).run(&CheckContext::default()).await;
        assert!(!result.passed);
        assert_eq!(result.detail.as_deref(), Some("no local checkout to inspect"));
    }

    #[tokio::test]
    async fn test_unreadable_directory() {
        let context = CheckContext::new(None, Some(Utf8PathBuf::from("/definitely/not/here")));
        let result = LicenseCheck::new(5).run(&context).await;
        assert!(!result.passed);
        assert!(result.detail.unwrap().contains("could not read directory '/definitely/not/here'"));
    }

    #[test]
    fn test_find_license_file_reports_unreadable_directory() {
        let err = find_license_file(Utf8Path::new("/definitely/not/here")).unwrap_err();
        assert!(err.to_string().contains("could not read directory"));
    }

    #[test]
    fn test_find_license_file_among_other_entries() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["README.md", "src", "Cargo.toml", "Licence.txt", "zzz"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }

        let path = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();
        assert_eq!(find_license_file(&path).unwrap().as_deref(), Some("Licence.txt"));
    }
}
