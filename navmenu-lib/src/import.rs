//! Serialized menu definitions
//!
//! Menus can be stored as a JSON tree of nodes, each with a display text,
//! a data map (the `uri` key is the link target) and nested children:
//!
//! ```json
//! [
//!   { "text": "Home", "data": { "uri": "/" } },
//!   { "text": "Docs", "data": { "uri": "docs", "icon": "book" },
//!     "children": [ { "text": "Guide", "data": { "uri": "docs/guide" } } ] }
//! ]
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::builder::Builder;
use crate::error::MenuError;
use crate::item::Attributes;
use crate::item::ItemId;
use crate::item::ItemOptions;

/// Data key holding the link target of a node.
const URI_KEY: &str = "uri";

/// One node of a serialized menu tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuNode {
    /// Item title.
    pub text: String,
    /// Link target (`uri`) and extra attributes.
    #[serde(default)]
    pub data: BTreeMap<String, Value>,
    /// Nested items.
    #[serde(default)]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    /// Link target of the node, `""` when absent.
    pub fn uri(&self) -> String {
        self.data.get(URI_KEY).map(value_to_string).unwrap_or_default()
    }

    /// Render attributes of the node.
    ///
    /// Each data entry becomes a plain attribute (except `uri`) and a
    /// `data-` prefixed copy.
    pub fn attributes(&self) -> Attributes {
        let mut attributes = Attributes::new();
        for (key, value) in &self.data {
            let value = value_to_string(value);
            if key != URI_KEY {
                attributes.insert(key.clone(), value.clone());
            }
            attributes.insert(format!("data-{key}"), value);
        }
        attributes
    }
}

/// Parses a serialized menu tree.
pub fn parse_menu(json: &str) -> Result<Vec<MenuNode>, MenuError> {
    Ok(serde_json::from_str(json)?)
}

/// Adds `nodes` and their descendants to `menu` below `parent`.
///
/// Items go through [`Builder::add`], so group scopes and auto-activation
/// apply as for hand-built menus.
pub fn import_tree(menu: &mut Builder, nodes: &[MenuNode], parent: Option<ItemId>) -> Result<(), MenuError> {
    for node in nodes {
        let mut options = ItemOptions::url(node.uri());
        if let Some(parent) = parent {
            options = options.parent(parent);
        }
        let id = menu.add(node.text.as_str(), options)?.attrs(node.attributes()).id();
        if !node.children.is_empty() {
            import_tree(menu, &node.children, Some(id))?;
        }
    }
    Ok(())
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_data_and_children_default_to_empty() {
        let nodes = parse_menu(r#"[{ "text": "Home" }]"#).unwrap();
        assert_eq!(nodes[0].uri(), "");
        assert!(nodes[0].children.is_empty());
        assert!(nodes[0].attributes().is_empty());
    }

    #[test]
    fn data_entries_become_plain_and_prefixed_attributes() {
        let nodes = parse_menu(r#"[{ "text": "Docs", "data": { "uri": "docs", "icon": "book", "order": 2 } }]"#).unwrap();
        let attributes = nodes[0].attributes();
        assert_eq!(attributes.get("icon").map(String::as_str), Some("book"));
        assert_eq!(attributes.get("data-icon").map(String::as_str), Some("book"));
        assert_eq!(attributes.get("data-order").map(String::as_str), Some("2"));
        assert_eq!(attributes.get("data-uri").map(String::as_str), Some("docs"));
        assert!(!attributes.contains_key("uri"));
    }

    #[test]
    fn malformed_definition_is_an_import_error() {
        assert!(matches!(parse_menu("{ not json"), Err(MenuError::Import(_))));
    }
}
