//! Locale management and the `translate` facade.
//!
//! `I18n` owns the locale table, the current/fallback locale names, and the
//! observer registry. Every operation is synchronous except `translate` /
//! `translate_string` / `ensure_loaded`, which may await a lazy locale
//! load. The state lock is never held across an await.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, RwLock};

use serde_json::Value;

use crate::config::{CustomResolver, I18nOptions};
use crate::error::I18nError;
use crate::interpolate::{FormatArgs, interpolate};
use crate::locale::{LocaleEntry, LocaleSource};
use crate::message::{MessageProxy, value_kind};
use crate::observe::{ChangeEvent, ObserverId, Registry};
use crate::path;

struct State {
    locales: BTreeMap<String, LocaleEntry>,
    current: Option<String>,
    fallback: Option<String>,
    not_found_fallback: bool,
    resolver: Option<CustomResolver>,
}

/// The message-resolution engine.
///
/// Shareable across tasks (`Arc<I18n>`); mutations are single-entry
/// replacements with no transactional guarantees beyond the lock.
pub struct I18n {
    state: RwLock<State>,
    observers: Mutex<Registry>,
}

impl I18n {
    pub fn new(options: I18nOptions) -> Self {
        let locales = options
            .messages
            .into_iter()
            .map(|(name, source)| (name, LocaleEntry::new(source)))
            .collect();

        Self {
            state: RwLock::new(State {
                locales,
                current: Some(options.locale),
                fallback: options.fallback,
                not_found_fallback: options.not_found_fallback,
                resolver: options.resolver,
            }),
            observers: Mutex::new(Registry::default()),
        }
    }

    /// The current locale name. `None` after the current locale was removed
    /// and before a new one is set.
    pub fn locale(&self) -> Option<String> {
        self.state.read().expect("state lock poisoned").current.clone()
    }

    /// Switch the current locale. Plain field assignment: nothing is loaded
    /// here; resolution requests drive loading.
    pub fn set_locale(&self, name: impl Into<String>) {
        let name = name.into();
        {
            let mut state = self.state.write().expect("state lock poisoned");
            state.current = Some(name.clone());
        }
        self.notify(&ChangeEvent::LocaleChanged { locale: Some(name) });
    }

    /// The fallback locale name, if configured.
    pub fn fallback(&self) -> Option<String> {
        self.state.read().expect("state lock poisoned").fallback.clone()
    }

    pub fn set_fallback(&self, locale: Option<String>) {
        {
            let mut state = self.state.write().expect("state lock poisoned");
            state.fallback = locale.clone();
        }
        self.notify(&ChangeEvent::FallbackChanged { locale });
    }

    /// All registered locale names, sorted.
    pub fn available_locales(&self) -> Vec<String> {
        self.state
            .read()
            .expect("state lock poisoned")
            .locales
            .keys()
            .cloned()
            .collect()
    }

    /// Insert or replace a locale entry. Replacing resets any lazy state,
    /// so a previously failed load can be recovered this way.
    pub fn add_locale(&self, name: impl Into<String>, source: impl Into<LocaleSource>) {
        let name = name.into();
        {
            let mut state = self.state.write().expect("state lock poisoned");
            state
                .locales
                .insert(name.clone(), LocaleEntry::new(source.into()));
        }
        self.notify(&ChangeEvent::LocaleAdded { locale: name });
    }

    /// Delete a locale entry. Silent no-op when the name is unknown. When
    /// the current locale is removed, `locale()` becomes `None` until a new
    /// one is set; callers must handle this, there is no auto-fallback.
    pub fn remove_locale(&self, name: &str) {
        let (removed, cleared) = {
            let mut state = self.state.write().expect("state lock poisoned");
            let removed = state.locales.remove(name).is_some();
            let cleared = removed && state.current.as_deref() == Some(name);
            if cleared {
                state.current = None;
            }
            (removed, cleared)
        };

        if removed {
            self.notify(&ChangeEvent::LocaleRemoved {
                locale: name.to_string(),
            });
            if cleared {
                self.notify(&ChangeEvent::LocaleChanged { locale: None });
            }
        }
    }

    /// Load a locale's tree explicitly, surfacing failures that `translate`
    /// degrades over.
    pub async fn ensure_loaded(&self, name: &str) -> Result<Arc<Value>, I18nError> {
        let entry = self
            .state
            .read()
            .expect("state lock poisoned")
            .locales
            .get(name)
            .cloned()
            .ok_or_else(|| I18nError::UnknownLocale(name.to_string()))?;

        entry
            .tree(name)
            .await
            .ok_or_else(|| I18nError::LoadFailed {
                locale: name.to_string(),
            })
    }

    /// Read proxy over the current locale's tree, when that tree is already
    /// in memory. A lazy locale that has not loaded yet (or failed) yields
    /// `None`; use `ensure_loaded` first to force it.
    pub fn proxy(&self) -> Option<MessageProxy> {
        let state = self.state.read().expect("state lock poisoned");
        let name = state.current.as_ref()?;
        state.locales.get(name)?.loaded().map(MessageProxy::new)
    }

    /// Register a change observer. Callbacks run synchronously inside the
    /// mutating call, after state is updated; they must not subscribe or
    /// unsubscribe re-entrantly.
    pub fn subscribe<F>(&self, callback: F) -> ObserverId
    where
        F: Fn(&ChangeEvent) + Send + Sync + 'static,
    {
        self.observers
            .lock()
            .expect("observer lock poisoned")
            .subscribe(Box::new(callback))
    }

    /// Remove an observer. Returns false for unknown ids.
    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        self.observers
            .lock()
            .expect("observer lock poisoned")
            .unsubscribe(id)
    }

    /// Resolve `path` against the current locale, retrying against the
    /// fallback locale on a miss when enabled.
    ///
    /// A string leaf is interpolated with `args`; a non-string node is
    /// returned as-is. A miss after fallback returns the path itself as a
    /// string, keeping missing translations visible instead of failing.
    pub async fn translate(&self, path: &str, args: Option<&FormatArgs>) -> Value {
        let resolver = self
            .state
            .read()
            .expect("state lock poisoned")
            .resolver
            .clone();
        if let Some(resolver) = resolver {
            return resolver(path, args);
        }

        match self.lookup(path).await {
            Some(Value::String(template)) => Value::String(interpolate(&template, args)),
            Some(node) => node,
            None => Value::String(path.to_string()),
        }
    }

    /// Like `translate`, but guarantees a plain string result. Resolving to
    /// a non-string node is an `InvalidLeafType` error; a miss still
    /// degrades to the raw path.
    pub async fn translate_string(
        &self,
        path: &str,
        args: Option<&FormatArgs>,
    ) -> Result<String, I18nError> {
        match self.translate(path, args).await {
            Value::String(text) => Ok(text),
            node => Err(I18nError::InvalidLeafType {
                path: path.to_string(),
                kind: value_kind(&node),
            }),
        }
    }

    async fn lookup(&self, path: &str) -> Option<Value> {
        let (current, fallback) = {
            let state = self.state.read().expect("state lock poisoned");
            let current = state
                .current
                .clone()
                .map(|name| (name.clone(), state.locales.get(&name).cloned()));
            // The fallback retry needs a current locale that differs from
            // the fallback; a cleared current locale never auto-falls-back.
            let fallback = match (&state.current, &state.fallback) {
                (Some(current), Some(fallback))
                    if state.not_found_fallback && fallback != current =>
                {
                    Some((fallback.clone(), state.locales.get(fallback).cloned()))
                }
                _ => None,
            };
            (current, fallback)
        };

        if let Some(node) = resolve_in(current, path).await {
            return Some(node);
        }
        if let Some(node) = resolve_in(fallback, path).await {
            tracing::debug!(path, "resolved via fallback locale");
            return Some(node);
        }
        tracing::debug!(path, "message not found, degrading to raw path");
        None
    }

    fn notify(&self, event: &ChangeEvent) {
        self.observers
            .lock()
            .expect("observer lock poisoned")
            .notify(event);
    }
}

async fn resolve_in(pair: Option<(String, Option<LocaleEntry>)>, path: &str) -> Option<Value> {
    let (name, entry) = pair?;
    let tree = entry?.tree(&name).await?;
    path::resolve(&tree, path).cloned()
}
