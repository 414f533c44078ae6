//! Message-tree representation and helpers.
//!
//! Locale messages are plain `serde_json::Value` trees: a string leaf, an
//! array of nodes, or an object mapping keys to further nodes. Trees come
//! from data literals, parsed config, or loader results, so cycles cannot
//! occur.

use std::sync::Arc;

use serde_json::Value;

use crate::path;

/// Human-readable kind name for a tree node, used in diagnostics.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Stringify a node for interpolation output.
///
/// Strings are taken verbatim (no surrounding quotes); everything else uses
/// the compact JSON rendering. No locale-aware number or date formatting.
///
/// # Examples
///
/// ```
/// use glossa::message::value_to_string;
/// use serde_json::json;
///
/// assert_eq!(value_to_string(&json!("Ana")), "Ana");
/// assert_eq!(value_to_string(&json!(3)), "3");
/// assert_eq!(value_to_string(&json!(true)), "true");
/// ```
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Flatten a message tree into `(path, leaf)` pairs in tree order.
///
/// Object keys become dotted segments, array elements become bracketed
/// indices, so every returned path resolves back to its leaf via
/// [`path::resolve`]. Non-string leaves are skipped.
pub fn flatten_tree(tree: &Value) -> Vec<(String, String)> {
    let mut result = Vec::new();
    flatten_into(tree, String::new(), &mut result);
    result
}

fn flatten_into(value: &Value, prefix: String, result: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(val, new_prefix, result);
            }
        }
        Value::Array(items) => {
            for (index, val) in items.iter().enumerate() {
                flatten_into(val, format!("{}[{}]", prefix, index), result);
            }
        }
        Value::String(s) => {
            if !prefix.is_empty() {
                result.push((prefix, s.clone()));
            }
        }
        _ => {}
    }
}

/// Read-only handle over one locale's message tree.
///
/// Cheap to clone; the tree it wraps is the one that was current when the
/// proxy was taken and does not follow later locale switches.
#[derive(Debug, Clone)]
pub struct MessageProxy {
    tree: Arc<Value>,
}

impl MessageProxy {
    pub(crate) fn new(tree: Arc<Value>) -> Self {
        Self { tree }
    }

    /// The node at `path`, if present.
    pub fn get(&self, path: &str) -> Option<Value> {
        path::resolve(&self.tree, path).cloned()
    }

    /// All resolvable leaf paths in tree order.
    pub fn keys(&self) -> Vec<String> {
        flatten_tree(&self.tree)
            .into_iter()
            .map(|(key, _)| key)
            .collect()
    }

    /// The whole tree.
    pub fn tree(&self) -> &Value {
        &self.tree
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::message::*;

    #[test]
    fn test_value_kind() {
        assert_eq!(value_kind(&json!(null)), "null");
        assert_eq!(value_kind(&json!(true)), "boolean");
        assert_eq!(value_kind(&json!(1.5)), "number");
        assert_eq!(value_kind(&json!("x")), "string");
        assert_eq!(value_kind(&json!([])), "array");
        assert_eq!(value_kind(&json!({})), "object");
    }

    #[test]
    fn test_value_to_string() {
        assert_eq!(value_to_string(&json!("plain")), "plain");
        assert_eq!(value_to_string(&json!(42)), "42");
        assert_eq!(value_to_string(&json!(false)), "false");
        assert_eq!(value_to_string(&json!(null)), "null");
        assert_eq!(value_to_string(&json!(["a", "b"])), r#"["a","b"]"#);
    }

    #[test]
    fn test_flatten_nested() {
        let tree = json!({
            "Auth": {
                "Login": {"title": "Login", "button": "Submit"}
            }
        });

        let flat = flatten_tree(&tree);
        assert_eq!(
            flat,
            vec![
                ("Auth.Login.title".to_string(), "Login".to_string()),
                ("Auth.Login.button".to_string(), "Submit".to_string()),
            ]
        );
    }

    #[test]
    fn test_flatten_arrays_use_index_syntax() {
        let tree = json!({"weekDays": ["Sunday", "Monday"]});

        let flat = flatten_tree(&tree);
        assert_eq!(
            flat,
            vec![
                ("weekDays[0]".to_string(), "Sunday".to_string()),
                ("weekDays[1]".to_string(), "Monday".to_string()),
            ]
        );
    }

    #[test]
    fn test_flatten_skips_non_string_leaves() {
        let tree = json!({"count": 3, "label": "Three"});

        let flat = flatten_tree(&tree);
        assert_eq!(flat, vec![("label".to_string(), "Three".to_string())]);
    }

    #[test]
    fn test_flatten_paths_resolve_back() {
        let tree = json!({
            "menu": {"items": [{"label": "Home"}, {"label": "About"}]}
        });

        for (key, leaf) in flatten_tree(&tree) {
            assert_eq!(crate::path::resolve(&tree, &key), Some(&json!(leaf)));
        }
    }

    #[test]
    fn test_proxy_get_and_keys() {
        let tree = Arc::new(json!({"Common": {"save": "Save"}}));
        let proxy = MessageProxy::new(tree);

        assert_eq!(proxy.get("Common.save"), Some(json!("Save")));
        assert_eq!(proxy.get("Common.missing"), None);
        assert_eq!(proxy.keys(), vec!["Common.save".to_string()]);
    }
}
