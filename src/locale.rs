//! Locale table entries and lazy loading.
//!
//! A locale is either provided eagerly as a message tree or lazily as a
//! caller-supplied asynchronous loader. Lazy loading is the engine's only
//! suspension point: the loader runs at most once, concurrent callers share
//! the single in-flight load, and the outcome (success or failure) is
//! memoized. A failed locale behaves as not-found until replaced via
//! `add_locale`; there is no automatic retry.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use futures_util::future::BoxFuture;
use serde_json::Value;
use tokio::sync::OnceCell;

/// Caller-supplied asynchronous producer of a message tree.
///
/// What the loader does internally (file read, network fetch, bundled data)
/// is opaque to the engine; failures are reported as opaque errors.
pub type LoaderFn = Arc<dyn Fn() -> BoxFuture<'static, Result<Value>> + Send + Sync>;

/// Construction input for one locale: an eager tree or a lazy loader.
#[derive(Clone)]
pub enum LocaleSource {
    Tree(Value),
    Loader(LoaderFn),
}

impl LocaleSource {
    /// Wrap an async closure as a lazy locale source.
    pub fn loader<F, Fut>(load: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value>> + Send + 'static,
    {
        LocaleSource::Loader(Arc::new(move || Box::pin(load())))
    }
}

impl fmt::Debug for LocaleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleSource::Tree(tree) => f.debug_tuple("Tree").field(tree).finish(),
            LocaleSource::Loader(_) => f.debug_tuple("Loader").finish(),
        }
    }
}

impl From<Value> for LocaleSource {
    fn from(tree: Value) -> Self {
        LocaleSource::Tree(tree)
    }
}

/// Lazy entry state: the loader plus the memoized outcome of its single
/// invocation. `None` in the cell records a failed load.
pub(crate) struct LazySlot {
    loader: LoaderFn,
    cell: OnceCell<Option<Arc<Value>>>,
}

/// One entry of the locale table.
#[derive(Clone)]
pub(crate) enum LocaleEntry {
    Ready(Arc<Value>),
    Lazy(Arc<LazySlot>),
}

impl LocaleEntry {
    pub(crate) fn new(source: LocaleSource) -> Self {
        match source {
            LocaleSource::Tree(tree) => LocaleEntry::Ready(Arc::new(tree)),
            LocaleSource::Loader(loader) => LocaleEntry::Lazy(Arc::new(LazySlot {
                loader,
                cell: OnceCell::new(),
            })),
        }
    }

    /// The tree if already resolved, without triggering a load.
    pub(crate) fn loaded(&self) -> Option<Arc<Value>> {
        match self {
            LocaleEntry::Ready(tree) => Some(tree.clone()),
            LocaleEntry::Lazy(slot) => slot.cell.get().and_then(Clone::clone),
        }
    }

    /// Resolve the entry's tree, invoking the loader on first use.
    ///
    /// Concurrent callers await the same initialization, so the loader runs
    /// exactly once per entry no matter how many resolutions race it.
    pub(crate) async fn tree(&self, locale: &str) -> Option<Arc<Value>> {
        match self {
            LocaleEntry::Ready(tree) => Some(tree.clone()),
            LocaleEntry::Lazy(slot) => slot
                .cell
                .get_or_init(|| async {
                    match (slot.loader)().await {
                        Ok(tree) => Some(Arc::new(tree)),
                        Err(error) => {
                            tracing::warn!(locale, %error, "locale loader failed");
                            None
                        }
                    }
                })
                .await
                .clone(),
        }
    }
}

impl fmt::Debug for LocaleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleEntry::Ready(_) => f.debug_tuple("Ready").finish(),
            LocaleEntry::Lazy(slot) => f
                .debug_struct("Lazy")
                .field("loaded", &slot.cell.initialized())
                .finish(),
        }
    }
}
