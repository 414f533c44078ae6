//! Path parsing and message-tree walking.
//!
//! A path is a `.`-separated list of segments addressing a node inside a
//! message tree. A segment may carry trailing bracketed numeric indices for
//! array access: `weekDays[3]`, `matrix[1][2]`. Segments apply left to
//! right; each step must land on an object (key access) or an array (index
//! access). There are no partial matches and no wildcards.

use serde_json::Value;

/// One step of a parsed message path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Object key access.
    Key(String),
    /// Array element access.
    Index(usize),
}

/// Parse a dotted/bracketed path into segments.
///
/// Returns `None` for the empty path. A segment whose brackets do not form
/// a well-formed numeric index (`a[`, `a[x]`) is kept as a literal key, so
/// exotic keys remain addressable.
///
/// # Examples
///
/// ```
/// use glossa::path::{Segment, parse_path};
///
/// assert_eq!(
///     parse_path("menu.items[2].label"),
///     Some(vec![
///         Segment::Key("menu".to_string()),
///         Segment::Key("items".to_string()),
///         Segment::Index(2),
///         Segment::Key("label".to_string()),
///     ])
/// );
/// assert_eq!(parse_path(""), None);
/// ```
pub fn parse_path(path: &str) -> Option<Vec<Segment>> {
    if path.is_empty() {
        return None;
    }

    let mut segments = Vec::new();
    for raw in path.split('.') {
        parse_segment(raw, &mut segments);
    }
    Some(segments)
}

fn parse_segment(raw: &str, segments: &mut Vec<Segment>) {
    // Peel well-formed [N] groups off the tail; stop at the first group
    // that is not a plain numeric index.
    let mut rest = raw;
    let mut indices = Vec::new();
    while rest.ends_with(']') {
        let Some(open) = rest.rfind('[') else { break };
        let Ok(index) = rest[open + 1..rest.len() - 1].parse::<usize>() else {
            break;
        };
        indices.push(index);
        rest = &rest[..open];
    }

    if !rest.is_empty() || indices.is_empty() {
        segments.push(Segment::Key(rest.to_string()));
    }
    segments.extend(indices.into_iter().rev().map(Segment::Index));
}

/// Walk `tree` along `path` and return the addressed node.
///
/// Pure and deterministic. Any miss (absent key, out-of-range index, index
/// syntax on a non-array, key access on a non-object, empty path) yields
/// `None`.
pub fn resolve<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    let segments = parse_path(path)?;
    let mut node = tree;
    for segment in &segments {
        node = match segment {
            Segment::Key(key) => node.as_object()?.get(key)?,
            Segment::Index(index) => node.as_array()?.get(*index)?,
        };
    }
    Some(node)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::path::*;

    #[test]
    fn test_parse_plain_segments() {
        assert_eq!(
            parse_path("Common.save"),
            Some(vec![
                Segment::Key("Common".to_string()),
                Segment::Key("save".to_string()),
            ])
        );
    }

    #[test]
    fn test_parse_chained_indices() {
        assert_eq!(
            parse_path("matrix[1][2]"),
            Some(vec![
                Segment::Key("matrix".to_string()),
                Segment::Index(1),
                Segment::Index(2),
            ])
        );
    }

    #[test]
    fn test_parse_bare_index_segment() {
        assert_eq!(
            parse_path("[0].label"),
            Some(vec![Segment::Index(0), Segment::Key("label".to_string())])
        );
    }

    #[test]
    fn test_parse_malformed_brackets_stay_literal() {
        assert_eq!(
            parse_path("a[x]"),
            Some(vec![Segment::Key("a[x]".to_string())])
        );
        assert_eq!(parse_path("a["), Some(vec![Segment::Key("a[".to_string())]));
        assert_eq!(
            parse_path("a]"),
            Some(vec![Segment::Key("a]".to_string())])
        );
    }

    #[test]
    fn test_resolve_leaf() {
        let tree = json!({"Common": {"save": "Save"}});
        assert_eq!(resolve(&tree, "Common.save"), Some(&json!("Save")));
    }

    #[test]
    fn test_resolve_intermediate_node() {
        let tree = json!({"Common": {"save": "Save"}});
        assert_eq!(resolve(&tree, "Common"), Some(&json!({"save": "Save"})));
    }

    #[test]
    fn test_resolve_array_element() {
        let tree = json!({"weekDays": ["Sunday", "Monday", "Tuesday"]});
        assert_eq!(resolve(&tree, "weekDays[0]"), Some(&json!("Sunday")));
        assert_eq!(resolve(&tree, "weekDays[2]"), Some(&json!("Tuesday")));
    }

    #[test]
    fn test_resolve_misses() {
        let tree = json!({"weekDays": ["Sunday"], "Common": {"save": "Save"}});

        // Empty path
        assert_eq!(resolve(&tree, ""), None);
        // Absent key
        assert_eq!(resolve(&tree, "Common.cancel"), None);
        // Out-of-range index
        assert_eq!(resolve(&tree, "weekDays[99]"), None);
        // Index syntax on a non-array
        assert_eq!(resolve(&tree, "Common[0]"), None);
        // Key access on a leaf
        assert_eq!(resolve(&tree, "Common.save.deeper"), None);
    }

    #[test]
    fn test_resolve_literal_bracket_key() {
        let tree = json!({"a[x]": "odd but legal"});
        assert_eq!(resolve(&tree, "a[x]"), Some(&json!("odd but legal")));
    }

    #[test]
    fn test_resolve_numeric_object_key_is_not_index() {
        // A well-formed index never falls back to an object key lookup.
        let tree = json!({"items[0]": "literal", "items": ["first"]});
        assert_eq!(resolve(&tree, "items[0]"), Some(&json!("first")));
    }
}
