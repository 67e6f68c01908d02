use crate::Result;
use core::fmt::{Display, Formatter};
use core::str::FromStr;
use ohno::{IntoAppError, bail};
use std::sync::Arc;
use url::Url;

/// An `owner/repo` identifier for a hosted repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSlug {
    owner: Arc<str>,
    repo: Arc<str>,
}

impl RepoSlug {
    /// Parse a slug from `owner/repo` or from a repository URL such as
    /// `https://github.com/owner/repo/tree/main`.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();

        if text.starts_with("http://") || text.starts_with("https://") {
            let url = Url::parse(text).into_app_err_with(|| format!("parsing repository URL '{text}'"))?;
            return Self::from_url(&url);
        }

        let segments: Vec<_> = text.split('/').collect();
        if segments.len() != 2 {
            bail!("invalid repository slug '{text}': expected the form 'owner/repo'");
        }

        Self::from_segments(segments[0], segments[1], text)
    }

    /// Extract the slug from the first two path segments of a repository URL.
    pub fn from_url(url: &Url) -> Result<Self> {
        let path_segments: Vec<_> = url.path_segments().map(Iterator::collect).unwrap_or_default();

        if path_segments.len() < 2 {
            bail!("invalid repository URL format: {url}");
        }

        Self::from_segments(path_segments[0], path_segments[1], url.as_str())
    }

    fn from_segments(owner: &str, repo: &str, source: &str) -> Result<Self> {
        let repo = repo.trim_end_matches(".git");

        if owner.is_empty() || repo.is_empty() {
            bail!("invalid repository slug: empty owner or repo name: {source}");
        }

        Ok(Self {
            owner: Arc::from(owner),
            repo: Arc::from(repo),
        })
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }
}

impl Display for RepoSlug {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

// clap needs an error type implementing `std::error::Error`, which `AppError` does not.
impl FromStr for RepoSlug {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        Self::parse(s).map_err(|e| format!("{e:#}"))
    }
}
