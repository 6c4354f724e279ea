//! Menu items

mod link;
mod options;

use std::collections::BTreeMap;

use heck::ToLowerCamelCase;
use link::add_class;

pub use link::*;
pub use options::*;

/// Rendering attributes (`class`, `id`, `data-*`, ...).
pub type Attributes = BTreeMap<String, String>;

/// Caller-attached metadata.
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// Identifier of an item within its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub usize);

impl ItemId {
    /// Returns the raw id.
    pub fn get(self) -> usize {
        self.0
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for ItemId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

/// A single menu node.
///
/// Items are created through [`Builder::add`](crate::Builder::add) and
/// mutated through [`ItemMut`](crate::ItemMut); this type only exposes
/// read access.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub(crate) id: ItemId,
    pub(crate) parent: Option<ItemId>,
    pub(crate) title: String,
    pub(crate) nickname: String,
    pub(crate) attributes: Attributes,
    pub(crate) link: Option<Link>,
    pub(crate) divider: Option<Attributes>,
    pub(crate) data: Metadata,
    pub(crate) is_active: bool,
}

impl Item {
    pub(crate) fn new(
        id: ItemId,
        title: impl Into<String>,
        parent: Option<ItemId>,
        attributes: Attributes,
        link: Option<LinkSpec>,
    ) -> Self {
        let title = title.into();
        Self {
            id,
            parent,
            nickname: nickname(&title),
            title,
            attributes,
            link: link.map(Link::new),
            divider: None,
            data: Metadata::new(),
            is_active: false,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn parent(&self) -> Option<ItemId> {
        self.parent
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Lower camel case form of the title at creation time.
    ///
    /// Later title edits (`append`, `prepend`, `enclose`) do not change it.
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns a single attribute.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// The link, or `None` for raw items.
    pub fn link(&self) -> Option<&Link> {
        self.link.as_ref()
    }

    /// Attributes of the separator rendered after this item.
    pub fn divider(&self) -> Option<&Attributes> {
        self.divider.as_ref()
    }

    /// All metadata.
    pub fn metadata(&self) -> &Metadata {
        &self.data
    }

    /// Returns a single metadata value. Keys are case-insensitive.
    pub fn data(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(&key.to_lowercase())
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn is_raw(&self) -> bool {
        self.link.is_none()
    }

    pub(crate) fn activate_item(&mut self, active_class: &str) {
        self.is_active = true;
        add_class(&mut self.attributes, active_class);
    }
}

/// Derives the lookup name of an item from its title.
pub fn nickname(title: &str) -> String {
    title.to_lower_camel_case()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nickname_is_lower_camel_case() {
        assert_eq!(nickname("About Us"), "aboutUs");
        assert_eq!(nickname("home"), "home");
        assert_eq!(nickname("Contact-Form"), "contactForm");
    }

    #[test]
    fn activation_adds_class_once() {
        let mut item = Item::new(ItemId(1), "Home", None, Attributes::new(), Some(LinkSpec::url("/")));
        item.activate_item("active");
        item.activate_item("active");
        assert!(item.is_active());
        assert_eq!(item.attr("class"), Some("active"));
    }

    #[test]
    fn link_activation_targets_link_attributes() {
        let mut item = Item::new(ItemId(1), "Home", None, Attributes::new(), Some(LinkSpec::url("/")));
        if let Some(link) = item.link.as_mut() {
            link.activate("current");
        }
        assert_eq!(item.attr("class"), None);
        assert_eq!(item.link().and_then(|link| link.attributes().get("class")).map(String::as_str), Some("current"));
    }

    #[test]
    fn prefixed_path_is_normalized() {
        let mut spec = LinkSpec::url("/users/");
        spec.prefix = "admin/".to_string();
        assert_eq!(spec.prefixed_path(), "admin/users");
        assert_eq!(LinkSpec::url("").prefixed_path(), "/");
    }
}
