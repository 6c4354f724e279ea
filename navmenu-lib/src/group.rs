//! Group attribute scopes
//!
//! Items registered inside [`Builder::group`](crate::Builder::group) inherit
//! the attributes of every enclosing group. Nested groups are merged into a
//! single frame when pushed, so the top of the stack always holds the
//! effective scope.

use crate::error::MenuError;
use crate::item::Attributes;

/// Option keys that configure an item but are never rendered.
pub const RESERVED_KEYS: [&str; 7] = ["route", "action", "url", "prefix", "parent", "secure", "raw"];

/// Shared attributes applied to every item registered inside a group.
///
/// # Example
///
/// ```
/// use navmenu_lib::GroupScope;
///
/// let scope = GroupScope::new()
///     .prefix("admin")
///     .class("nav-admin")
///     .attr("data-role", "admin");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupScope {
    /// URL prefix joined in front of `url` targets.
    pub prefix: Option<String>,
    /// Space separated class tokens.
    pub class: Option<String>,
    /// Any other attribute.
    pub attributes: Attributes,
}

impl GroupScope {
    /// Creates an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the URL prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the class tokens.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Sets an attribute.
    ///
    /// `prefix` and `class` are routed to their dedicated fields.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match key.as_str() {
            "prefix" => self.prefix = Some(value),
            "class" => self.class = Some(value),
            _ => {
                self.attributes.insert(key, value);
            }
        }
        self
    }

    /// Builds a scope from a flat attribute map, pulling out `prefix` and
    /// `class`.
    pub fn from_attributes(attributes: &Attributes) -> Self {
        attributes
            .iter()
            .fold(Self::new(), |scope, (key, value)| scope.attr(key.clone(), value.clone()))
    }

    /// Flattens the scope into render attributes, dropping reserved keys.
    pub fn into_attributes(self) -> Attributes {
        let mut attributes = self.attributes;
        if let Some(class) = self.class.filter(|class| !class.trim().is_empty()) {
            attributes.insert("class".to_string(), class);
        }
        attributes.retain(|key, _| !RESERVED_KEYS.contains(&key.as_str()));
        attributes
    }

    /// Merges `self` (the inner scope) onto `outer`.
    ///
    /// - `prefix`: path-joined with the outer prefix, or inherited.
    /// - `class`: de-duplicated union, outer tokens first, or inherited.
    /// - other keys: the inner value wins.
    pub fn merge_onto(self, outer: &GroupScope) -> GroupScope {
        let prefix = merge_prefix(self.prefix.as_deref(), outer.prefix.as_deref());
        let class = merge_class(self.class.as_deref(), outer.class.as_deref());
        let mut attributes = outer.attributes.clone();
        attributes.extend(self.attributes);
        GroupScope {
            prefix,
            class,
            attributes,
        }
    }
}

/// Joins a nested prefix onto its parent: `trim(old) + "/" + trim(new)`.
pub fn merge_prefix(new: Option<&str>, old: Option<&str>) -> Option<String> {
    match new {
        Some(new) => Some(format!(
            "{}/{}",
            old.unwrap_or_default().trim_matches('/'),
            new.trim_matches('/')
        )),
        None => old.map(str::to_string),
    }
}

/// Unions two class lists, keeping the first occurrence of each token.
///
/// Returns `old` untouched when `new` is absent.
///
/// ```
/// use navmenu_lib::group::merge_class;
///
/// assert_eq!(merge_class(Some("x y"), Some("y z")).as_deref(), Some("y z x"));
/// assert_eq!(merge_class(None, Some("y")).as_deref(), Some("y"));
/// ```
pub fn merge_class(new: Option<&str>, old: Option<&str>) -> Option<String> {
    let Some(new) = new else {
        return old.map(str::to_string);
    };
    let mut tokens: Vec<&str> = Vec::new();
    for token in old.unwrap_or_default().split_whitespace().chain(new.split_whitespace()) {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    Some(tokens.join(" "))
}

/// Stack of active group scopes.
#[derive(Debug, Clone, Default)]
pub struct GroupStack {
    frames: Vec<GroupScope>,
}

impl GroupStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a scope, merged with the current top frame if there is one.
    pub fn push(&mut self, scope: GroupScope) {
        let frame = match self.frames.last() {
            Some(top) => scope.merge_onto(top),
            None => scope,
        };
        log::debug!("group push: depth {} prefix {:?}", self.frames.len() + 1, frame.prefix);
        self.frames.push(frame);
    }

    /// Removes the top frame.
    pub fn pop(&mut self) -> Result<GroupScope, MenuError> {
        let frame = self.frames.pop().ok_or(MenuError::InvalidGroupNesting)?;
        log::debug!("group pop: depth {}", self.frames.len());
        Ok(frame)
    }

    /// Returns the effective scope, if any group is open.
    pub fn top(&self) -> Option<&GroupScope> {
        self.frames.last()
    }

    /// Number of open groups.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` when no group is open.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Prefix of the innermost group, or `""`.
    pub fn current_prefix(&self) -> &str {
        self.top()
            .and_then(|frame| frame.prefix.as_deref())
            .unwrap_or_default()
    }

    /// Turns item attributes into render attributes under the current scope.
    pub fn extract(&self, attributes: &Attributes) -> Attributes {
        let scope = GroupScope::from_attributes(attributes);
        match self.top() {
            Some(top) => scope.merge_onto(top).into_attributes(),
            None => scope.into_attributes(),
        }
    }
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
    fn nested_prefixes_are_path_joined() {
        let mut stack = GroupStack::new();
        stack.push(GroupScope::new().prefix("a"));
        stack.push(GroupScope::new().prefix("/b/"));
        assert_eq!(stack.current_prefix(), "a/b");
    }

    #[test]
    fn nested_scope_without_prefix_inherits_it() {
        let mut stack = GroupStack::new();
        stack.push(GroupScope::new().prefix("a"));
        stack.push(GroupScope::new());
        assert_eq!(stack.current_prefix(), "a");
    }

    #[test]
    fn empty_stack_has_empty_prefix() {
        assert_eq!(GroupStack::new().current_prefix(), "");
    }

    #[test]
    fn class_merge_keeps_old_order_and_drops_duplicates() {
        assert_eq!(merge_class(Some("x y"), Some("y z")).as_deref(), Some("y z x"));
    }

    #[test]
    fn class_merge_without_new_inherits_old() {
        assert_eq!(merge_class(None, Some("y z")).as_deref(), Some("y z"));
        assert_eq!(merge_class(None, None), None);
    }

    #[test]
    fn class_merge_ignores_extra_whitespace() {
        assert_eq!(merge_class(Some("  b  a "), Some(" a ")).as_deref(), Some("a b"));
    }

    #[test]
    fn other_keys_are_overridden_by_inner_scope() {
        let mut stack = GroupStack::new();
        stack.push(GroupScope::new().attr("data-role", "outer").attr("title", "kept"));
        stack.push(GroupScope::new().attr("data-role", "inner"));

        let top = stack.top().unwrap();
        assert_eq!(top.attributes.get("data-role").map(String::as_str), Some("inner"));
        assert_eq!(top.attributes.get("title").map(String::as_str), Some("kept"));
    }

    #[test]
    fn pop_on_empty_stack_is_an_error() {
        let mut stack = GroupStack::new();
        assert!(matches!(stack.pop(), Err(MenuError::InvalidGroupNesting)));
    }

    #[test]
    fn extract_merges_scope_and_strips_reserved_keys() {
        let mut stack = GroupStack::new();
        stack.push(GroupScope::new().prefix("admin").class("nav"));

        let extracted = stack.extract(&attrs(&[("class", "item"), ("id", "users"), ("route", "users.index")]));
        assert_eq!(extracted, attrs(&[("class", "nav item"), ("id", "users")]));
    }

    #[test]
    fn nested_scope_without_class_inherits_it() {
        let mut stack = GroupStack::new();
        stack.push(GroupScope::new().class("nav"));
        stack.push(GroupScope::new().prefix("x"));
        assert_eq!(stack.top().and_then(|top| top.class.as_deref()), Some("nav"));
    }

    #[test]
    fn extract_gives_classless_items_the_group_class() {
        let mut stack = GroupStack::new();
        stack.push(GroupScope::new().class("nav"));

        let extracted = stack.extract(&attrs(&[("id", "plain")]));
        assert_eq!(extracted, attrs(&[("class", "nav"), ("id", "plain")]));
    }

    #[test]
    fn extract_without_groups_only_strips_reserved_keys() {
        let stack = GroupStack::new();
        let extracted = stack.extract(&attrs(&[("secure", "1"), ("title", "Home")]));
        assert_eq!(extracted, attrs(&[("title", "Home")]));
    }
}
