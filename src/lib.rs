//! Glossa - runtime message resolution for localization
//!
//! Glossa resolves locale-keyed messages at runtime: dotted/bracketed path
//! lookup into nested message trees, `{name}`/`{0}` placeholder
//! interpolation, fallback-locale retry on misses, and lazy locale loading
//! with request coalescing. Missing translations degrade to the raw path
//! string so a gap is visible in the UI instead of breaking it. UI
//! frameworks wrap the engine's state and change events as their own
//! observables; the engine itself has no reactivity runtime.
//!
//! ## Module Structure
//!
//! - `config`: Construction input (programmatic options and JSON config)
//! - `engine`: Locale management and the `translate` facade
//! - `error`: Typed error surface
//! - `interpolate`: Placeholder substitution
//! - `loader`: JSON locale-file helpers
//! - `locale`: Locale table entries and lazy loading
//! - `message`: Message-tree helpers and the read proxy
//! - `observe`: Change notification for locale state
//! - `path`: Path parsing and tree walking
//!
//! ## Example
//!
//! ```
//! use glossa::{FormatArgs, I18n, I18nOptions};
//! use serde_json::json;
//!
//! let i18n = I18n::new(
//!     I18nOptions::new("pt")
//!         .with_fallback("en")
//!         .with_locale("en", json!({"hello": "Hello {name}"}))
//!         .with_locale("pt", json!({})),
//! );
//!
//! let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! let args = FormatArgs::named([("name", "Jo")]);
//! let greeting = rt.block_on(i18n.translate_string("hello", Some(&args)));
//! assert_eq!(greeting.unwrap(), "Hello Jo");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod interpolate;
pub mod loader;
pub mod locale;
pub mod message;
pub mod observe;
pub mod path;

pub use config::{CustomResolver, I18nConfig, I18nOptions};
pub use engine::I18n;
pub use error::I18nError;
pub use interpolate::FormatArgs;
pub use locale::{LoaderFn, LocaleSource};
pub use message::MessageProxy;
pub use observe::{ChangeEvent, ObserverId};
