//! Typed error surface of the engine.
//!
//! Path misses are never errors: `translate` degrades to returning the raw
//! path so a missing translation is visible in the UI instead of crashing
//! it. The variants here cover the cases that do surface to callers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum I18nError {
    /// A string-only accessor resolved to a non-string node.
    #[error("message at '{path}' is not a string (found {kind})")]
    InvalidLeafType { path: String, kind: &'static str },

    /// A lazy locale's loader failed; the locale stays unavailable until
    /// replaced via `add_locale`. Surfaced only by explicit load calls,
    /// never by `translate`.
    #[error("locale '{locale}' failed to load")]
    LoadFailed { locale: String },

    /// The named locale has no entry in the locale table.
    #[error("unknown locale '{0}'")]
    UnknownLocale(String),
}
