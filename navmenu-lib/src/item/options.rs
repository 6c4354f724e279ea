//! Item registration options

use super::Attributes;
use super::ItemId;
use super::LinkKind;
use super::LinkSpec;

/// A named target plus its resolver parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRef {
    /// Path, route name or action name.
    pub name: String,
    /// Resolver parameters.
    pub params: Vec<String>,
}

impl TargetRef {
    fn new(name: impl Into<String>, params: Vec<String>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }
}

/// Options accepted by [`Builder::add`](crate::Builder::add).
///
/// A plain `&str` or `String` converts into a URL target.
///
/// # Example
///
/// ```
/// use navmenu_lib::ItemOptions;
///
/// let options = ItemOptions::route("users.show")
///     .class("nav-item")
///     .attr("data-toggle", "dropdown");
///
/// let plain: ItemOptions = "about".into();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemOptions {
    pub(crate) url: Option<TargetRef>,
    pub(crate) route: Option<TargetRef>,
    pub(crate) action: Option<TargetRef>,
    pub(crate) secure: bool,
    pub(crate) raw: bool,
    pub(crate) parent: Option<ItemId>,
    pub(crate) attributes: Attributes,
}

impl ItemOptions {
    /// Creates empty options (a URL target of `""`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for a URL target.
    pub fn url(url: impl Into<String>) -> Self {
        Self::new().with_url(url, Vec::new())
    }

    /// Options for a named route.
    pub fn route(name: impl Into<String>) -> Self {
        Self::new().with_route(name, Vec::new())
    }

    /// Options for a controller action.
    pub fn action(name: impl Into<String>) -> Self {
        Self::new().with_action(name, Vec::new())
    }

    /// Options for a text-only item.
    pub fn raw() -> Self {
        Self {
            raw: true,
            ..Self::default()
        }
    }

    /// Sets the URL target with extra parameters.
    pub fn with_url(mut self, url: impl Into<String>, params: Vec<String>) -> Self {
        self.url = Some(TargetRef::new(url, params));
        self
    }

    /// Sets the route target with parameters.
    pub fn with_route(mut self, name: impl Into<String>, params: Vec<String>) -> Self {
        self.route = Some(TargetRef::new(name, params));
        self
    }

    /// Sets the action target with parameters.
    pub fn with_action(mut self, name: impl Into<String>, params: Vec<String>) -> Self {
        self.action = Some(TargetRef::new(name, params));
        self
    }

    /// Requests a secure URL.
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Marks the item as text-only.
    pub fn as_raw(mut self) -> Self {
        self.raw = true;
        self
    }

    /// Nests the item under `parent`.
    pub fn parent(mut self, parent: ItemId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Sets the class tokens.
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Sets a render attribute.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Parent item, if any.
    pub fn parent_id(&self) -> Option<ItemId> {
        self.parent
    }

    /// Render attributes given with the options.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Builds the link spec; `None` for raw items.
    ///
    /// Precedence when several targets are set: url, route, action.
    pub(crate) fn link_spec(&self, prefix: &str) -> Option<LinkSpec> {
        if self.raw {
            return None;
        }
        let (kind, target) = if let Some(url) = &self.url {
            (LinkKind::Url, url.clone())
        } else if let Some(route) = &self.route {
            (LinkKind::Route, route.clone())
        } else if let Some(action) = &self.action {
            (LinkKind::Action, action.clone())
        } else {
            (LinkKind::Url, TargetRef::new("", Vec::new()))
        };
        Some(LinkSpec {
            kind,
            value: target.name,
            params: target.params,
            prefix: prefix.to_string(),
            secure: self.secure,
        })
    }
}

impl From<&str> for ItemOptions {
    fn from(url: &str) -> Self {
        Self::url(url)
    }
}

impl From<String> for ItemOptions {
    fn from(url: String) -> Self {
        Self::url(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_takes_precedence_over_route_and_action() {
        let options = ItemOptions::action("Home@index").with_route("home", Vec::new()).with_url("/", Vec::new());
        let spec = options.link_spec("").unwrap();
        assert_eq!(spec.kind, LinkKind::Url);
        assert_eq!(spec.value, "/");
    }

    #[test]
    fn route_takes_precedence_over_action() {
        let options = ItemOptions::action("Home@index").with_route("home", vec!["1".into()]);
        let spec = options.link_spec("admin").unwrap();
        assert_eq!(spec.kind, LinkKind::Route);
        assert_eq!(spec.params, vec!["1".to_string()]);
        assert_eq!(spec.prefix, "admin");
    }

    #[test]
    fn raw_items_have_no_link() {
        assert!(ItemOptions::url("x").as_raw().link_spec("").is_none());
    }

    #[test]
    fn plain_string_is_a_url_target() {
        let options: ItemOptions = "about".into();
        let spec = options.link_spec("").unwrap();
        assert_eq!(spec.kind, LinkKind::Url);
        assert_eq!(spec.value, "about");
    }
}
