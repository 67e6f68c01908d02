//! Coverage figures from hosted analysis services.
//!
//! Two providers are supported: [`codecov`] is consulted first and
//! [`scrutinizer`] serves as a fallback. Each provider makes at most the
//! requests it needs, once, and reports [`ProviderResult::Unavailable`] instead
//! of failing.
//!
//! [`ProviderResult::Unavailable`]: crate::facts::ProviderResult::Unavailable

pub mod codecov;
pub mod scrutinizer;
