//! Attribute serialization

use std::sync::LazyLock;

use regex::Regex;

use crate::group::merge_class;
use crate::item::Attributes;

/// `key="value"` pairs inside a static attribute string.
static STATIC_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s*([\w-]+)\s*=\s*"([^"]*)""#).expect("attribute pattern is valid"));

/// Converts an attribute map into serialized markup attributes.
///
/// Escaping is the implementation's responsibility.
pub trait AttributeRenderer: Send + Sync {
    /// Serializes `attributes`; the result is either empty or starts with a
    /// space, ready to be placed right after a tag name.
    fn render(&self, attributes: &Attributes) -> String;
}

/// HTML attribute serializer: ` key="value"` pairs, values escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlAttributes;

impl AttributeRenderer for HtmlAttributes {
    fn render(&self, attributes: &Attributes) -> String {
        attributes
            .iter()
            .map(|(key, value)| format!(" {}=\"{}\"", escape(key), escape(value)))
            .collect()
    }
}

/// Escapes the five HTML special characters.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Merges a static attribute string such as `class="dropdown" id="nav"`
/// with an item's attributes.
///
/// Classes are unioned (item classes first); any other key in the string
/// overrides the item's value.
///
/// ```
/// use navmenu_lib::item::Attributes;
/// use navmenu_lib::render::merge_static;
///
/// let mut attrs = Attributes::new();
/// attrs.insert("class".into(), "nav-item".into());
/// attrs.insert("id".into(), "home".into());
///
/// let merged = merge_static(r#"class="dropdown" id="main""#, &attrs);
/// assert_eq!(merged["class"], "nav-item dropdown");
/// assert_eq!(merged["id"], "main");
/// ```
pub fn merge_static(static_attrs: &str, attributes: &Attributes) -> Attributes {
    let parsed: Attributes = STATIC_PAIR
        .captures_iter(static_attrs)
        .map(|captures| (captures[1].to_string(), captures[2].to_string()))
        .collect();

    let class = merge_class(
        parsed.get("class").map(String::as_str),
        attributes.get("class").map(String::as_str),
    );

    let mut merged = attributes.clone();
    merged.remove("class");
    merged.extend(parsed.into_iter().filter(|(key, _)| key != "class"));
    if let Some(class) = class.filter(|class| !class.is_empty()) {
        merged.insert("class".to_string(), class);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn empty_map_renders_nothing() {
        assert_eq!(HtmlAttributes.render(&Attributes::new()), "");
    }

    #[test]
    fn pairs_are_rendered_in_key_order_and_escaped() {
        let rendered = HtmlAttributes.render(&attrs(&[("title", "Tom & \"Jerry\""), ("class", "a b")]));
        assert_eq!(rendered, r#" class="a b" title="Tom &amp; &quot;Jerry&quot;""#);
    }

    #[test]
    fn merge_static_keeps_item_class_without_static_class() {
        let merged = merge_static(r#"id="x""#, &attrs(&[("class", "nav")]));
        assert_eq!(merged, attrs(&[("class", "nav"), ("id", "x")]));
    }

    #[test]
    fn merge_static_ignores_malformed_input() {
        let merged = merge_static("not attributes", &attrs(&[("id", "keep")]));
        assert_eq!(merged, attrs(&[("id", "keep")]));
    }
}
