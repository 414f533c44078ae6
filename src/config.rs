//! Construction input for the engine.
//!
//! `I18nOptions` is the programmatic form, carrying loaders and a custom
//! resolver when needed. `I18nConfig` is the serde-friendly wire form for
//! callers that keep their i18n setup in a JSON document; it can only carry
//! eager message trees.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::interpolate::FormatArgs;
use crate::locale::LocaleSource;

/// Custom resolution strategy override.
///
/// When configured, `translate` delegates entirely to it: the override
/// receives the path and the caller's arguments, and its result is returned
/// verbatim, with no fallback retry and no interpolation pass.
pub type CustomResolver = Arc<dyn Fn(&str, Option<&FormatArgs>) -> Value + Send + Sync>;

/// Programmatic construction input.
#[derive(Clone)]
pub struct I18nOptions {
    pub locale: String,
    pub fallback: Option<String>,
    pub not_found_fallback: bool,
    pub resolver: Option<CustomResolver>,
    pub messages: Vec<(String, LocaleSource)>,
}

impl I18nOptions {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            fallback: None,
            not_found_fallback: true,
            resolver: None,
            messages: Vec::new(),
        }
    }

    /// Set the fallback locale consulted on lookup misses.
    pub fn with_fallback(mut self, locale: impl Into<String>) -> Self {
        self.fallback = Some(locale.into());
        self
    }

    /// Enable or disable the fallback-locale retry (enabled by default).
    pub fn with_not_found_fallback(mut self, enabled: bool) -> Self {
        self.not_found_fallback = enabled;
        self
    }

    /// Install a custom resolution strategy.
    pub fn with_resolver<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&str, Option<&FormatArgs>) -> Value + Send + Sync + 'static,
    {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    /// Register messages for one locale, eager or lazy.
    pub fn with_locale(
        mut self,
        name: impl Into<String>,
        source: impl Into<LocaleSource>,
    ) -> Self {
        self.messages.push((name.into(), source.into()));
        self
    }
}

impl std::fmt::Debug for I18nOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18nOptions")
            .field("locale", &self.locale)
            .field("fallback", &self.fallback)
            .field("not_found_fallback", &self.not_found_fallback)
            .field("resolver", &self.resolver.as_ref().map(|_| "<custom>"))
            .field("messages", &self.messages)
            .finish()
    }
}

/// JSON wire form of the construction input.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nConfig {
    pub locale: String,
    #[serde(default)]
    pub fallback: Option<String>,
    #[serde(default = "default_not_found_fallback")]
    pub not_found_fallback: bool,
    #[serde(default)]
    pub messages: HashMap<String, Value>,
}

fn default_not_found_fallback() -> bool {
    true
}

impl I18nConfig {
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse i18n configuration.")
    }

    pub fn into_options(self) -> I18nOptions {
        let mut options = I18nOptions::new(self.locale);
        options.fallback = self.fallback;
        options.not_found_fallback = self.not_found_fallback;
        for (name, tree) in self.messages {
            options = options.with_locale(name, tree);
        }
        options
    }
}
