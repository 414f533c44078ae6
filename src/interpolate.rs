//! Placeholder substitution for resolved message templates.
//!
//! Templates carry `{name}` placeholders for named arguments and `{0}`,
//! `{1}`, … for positional arguments. Substitution is best effort: an
//! unmatched placeholder stays verbatim in the output, so missing
//! interpolation data never breaks rendering. Substituted values are
//! inserted as-is and never re-scanned for further placeholders.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::message::value_to_string;

/// Matches `{name}` (identifier) and `{N}` (integer) placeholders.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*|[0-9]+)\}").unwrap());

/// Interpolation arguments: an ordered sequence for positional placeholders
/// or a name-to-value mapping for named placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormatArgs {
    Positional(Vec<Value>),
    Named(Map<String, Value>),
}

impl FormatArgs {
    /// Build named arguments from `(key, value)` pairs.
    pub fn named<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        FormatArgs::Named(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Build positional arguments from a sequence of values.
    pub fn positional<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        FormatArgs::Positional(values.into_iter().map(Into::into).collect())
    }

    fn lookup(&self, token: &str) -> Option<&Value> {
        match self {
            FormatArgs::Positional(values) => {
                token.parse::<usize>().ok().and_then(|index| values.get(index))
            }
            FormatArgs::Named(map) => map.get(token),
        }
    }
}

impl From<Vec<Value>> for FormatArgs {
    fn from(values: Vec<Value>) -> Self {
        FormatArgs::Positional(values)
    }
}

impl From<Map<String, Value>> for FormatArgs {
    fn from(map: Map<String, Value>) -> Self {
        FormatArgs::Named(map)
    }
}

/// Substitute placeholders in `template` with stringified argument values.
///
/// # Examples
///
/// ```
/// use glossa::interpolate::{FormatArgs, interpolate};
///
/// let args = FormatArgs::named([("name", "Ana")]);
/// assert_eq!(interpolate("Hello {name}", Some(&args)), "Hello Ana");
///
/// let args = FormatArgs::positional(["a", "b"]);
/// assert_eq!(interpolate("{0} of {1}", Some(&args)), "a of b");
/// ```
pub fn interpolate(template: &str, args: Option<&FormatArgs>) -> String {
    let Some(args) = args else {
        return template.to_string();
    };

    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures<'_>| match args.lookup(&caps[1]) {
            Some(value) => value_to_string(value),
            None => caps[0].to_string(),
        })
        .into_owned()
}
