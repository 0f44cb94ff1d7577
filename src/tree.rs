// SPDX-License-Identifier: PMPL-1.0-or-later

//! Recursive tree processing over JSON-like resource data.
//!
//! Walks the tree depth-first, pseudo-localizing every string leaf and
//! leaving everything else exactly as it was: arrays keep their length and
//! order, objects keep their keys and key order (serde_json is built with
//! `preserve_order`), numbers/booleans/null pass through unchanged.

use crate::error::Result;
use crate::localize::localize_with;
use crate::options::Options;
use crate::placeholder::PlaceholderPattern;
use serde_json::Value;

/// Pseudo-localize every string leaf of a resource tree.
///
/// Returns a tree isomorphic to the input: same container types, same
/// keys in the same order, same sequence lengths.
pub fn process_tree(tree: &Value, options: &Options) -> Result<Value> {
    let pattern = PlaceholderPattern::new(&options.placeholder_format)?;
    Ok(process_value(tree, &pattern, options))
}

fn process_value(value: &Value, pattern: &PlaceholderPattern, options: &Options) -> Value {
    match value {
        Value::String(text) => Value::String(localize_with(pattern, text, options)),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| process_value(item, pattern, options))
                .collect(),
        ),
        Value::Object(entries) => Value::Object(
            entries
                .iter()
                .map(|(key, item)| (key.clone(), process_value(item, pattern, options)))
                .collect(),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_string_leaves_pass_through_unchanged() {
        let tree = json!({"count": 3, "enabled": true, "ratio": 1.5, "missing": null});
        let out = process_tree(&tree, &Options::default()).unwrap();
        assert_eq!(out, tree);
    }

    #[test]
    fn string_leaves_are_localized_at_any_depth() {
        let tree = json!({"menu": {"items": ["Open", "Save"]}});
        let out = process_tree(&tree, &Options::default()).unwrap();
        let items = out["menu"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        for item in items {
            let s = item.as_str().unwrap();
            assert!(s.starts_with('⟦') && s.ends_with('⟧'), "not wrapped: {s}");
        }
    }

    #[test]
    fn object_key_order_is_preserved() {
        let tree = json!({"zebra": "z", "apple": "a", "mango": "m"});
        let out = process_tree(&tree, &Options::default()).unwrap();
        let keys: Vec<&String> = out.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn container_shape_is_isomorphic() {
        let tree = json!({
            "a": ["x", {"b": "y"}, [1, "z"]],
            "c": {"d": null}
        });
        let out = process_tree(&tree, &Options::default()).unwrap();
        assert!(out["a"].is_array());
        assert_eq!(out["a"].as_array().unwrap().len(), 3);
        assert!(out["a"][1].is_object());
        assert!(out["a"][2].is_array());
        assert!(out["c"]["d"].is_null());
    }
}
