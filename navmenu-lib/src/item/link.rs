//! Link targets

use super::Attributes;
use crate::group::merge_class;

/// How a link target is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// A path or absolute URL.
    Url,
    /// A named route.
    Route,
    /// A controller action.
    Action,
}

/// Abstract description of an item's target URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSpec {
    /// Resolution strategy.
    pub kind: LinkKind,
    /// Path, route name or action name.
    pub value: String,
    /// Extra parameters passed to the resolver.
    pub params: Vec<String>,
    /// Group prefix in effect when the item was added.
    pub prefix: String,
    /// Request a secure (https) URL.
    pub secure: bool,
}

impl LinkSpec {
    /// Creates a URL spec with no prefix.
    pub fn url(value: impl Into<String>) -> Self {
        Self {
            kind: LinkKind::Url,
            value: value.into(),
            params: Vec::new(),
            prefix: String::new(),
            secure: false,
        }
    }

    /// Joins the prefix and the value into a normalized relative path.
    ///
    /// Returns `"/"` when both are empty.
    pub fn prefixed_path(&self) -> String {
        let joined = format!("{}/{}", self.prefix.trim_matches('/'), self.value.trim_matches('/'));
        let joined = joined.trim_matches('/');
        if joined.is_empty() {
            "/".to_string()
        } else {
            joined.to_string()
        }
    }
}

/// The anchor rendered inside an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub(crate) spec: LinkSpec,
    pub(crate) href: Option<String>,
    pub(crate) attributes: Attributes,
    pub(crate) is_active: bool,
}

impl Link {
    /// Creates a link for the given spec.
    pub fn new(spec: LinkSpec) -> Self {
        Self {
            spec,
            href: None,
            attributes: Attributes::new(),
            is_active: false,
        }
    }

    /// Target description.
    pub fn spec(&self) -> &LinkSpec {
        &self.spec
    }

    /// Explicit URL overriding resolution, if set.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    /// Attributes rendered on the anchor.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Whether the link carries the active state.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub(crate) fn activate(&mut self, active_class: &str) {
        self.is_active = true;
        add_class(&mut self.attributes, active_class);
    }
}

/// Adds class tokens to an attribute map without duplicating existing ones.
pub(crate) fn add_class(attributes: &mut Attributes, class: &str) {
    if let Some(merged) = merge_class(Some(class), attributes.get("class").map(String::as_str)) {
        if !merged.is_empty() {
            attributes.insert("class".to_string(), merged);
        }
    }
}
