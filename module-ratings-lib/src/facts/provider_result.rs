use std::sync::Arc;

/// Outcome of asking a single provider for data.
///
/// `Unavailable` covers both transport failures and responses that carry no
/// usable data; callers do not distinguish the two. The reason is kept only for
/// diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderResult<T> {
    /// The provider returned usable data.
    Found(T),

    /// The provider had nothing usable to offer.
    Unavailable(Arc<str>),
}

impl<T> ProviderResult<T> {
    pub fn unavailable(reason: impl Into<Arc<str>>) -> Self {
        Self::Unavailable(reason.into())
    }

    /// Returns `true` if the result is `Found`.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns a reference to the contained data if `Found`, otherwise `None`.
    #[must_use]
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Found(data) => Some(data),
            Self::Unavailable(_) => None,
        }
    }

    /// Collapse the result into a value, using `default` when unavailable.
    pub fn found_or(self, default: T) -> T {
        match self {
            Self::Found(data) => data,
            Self::Unavailable(_) => default,
        }
    }
}
