use crate::facts::RepoSlug;
use camino::{Utf8Path, Utf8PathBuf};

/// What the checks are allowed to look at for one repository.
#[derive(Debug, Clone, Default)]
pub struct CheckContext {
    slug: Option<RepoSlug>,
    directory: Option<Utf8PathBuf>,
}

impl CheckContext {
    #[must_use]
    pub const fn new(slug: Option<RepoSlug>, directory: Option<Utf8PathBuf>) -> Self {
        Self { slug, directory }
    }

    /// The `owner/repo` slug used to query remote services, if known.
    #[must_use]
    pub const fn slug(&self) -> Option<&RepoSlug> {
        self.slug.as_ref()
    }

    /// Local checkout of the repository, if one was provided.
    #[must_use]
    pub fn directory(&self) -> Option<&Utf8Path> {
        self.directory.as_deref()
    }

    /// Name to show in reports.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (&self.slug, &self.directory) {
            (Some(slug), _) => slug.to_string(),
            (None, Some(dir)) => dir.to_string(),
            (None, None) => "<unknown>".to_string(),
        }
    }
}
