//! Mutable handles to items of a menu.

use serde_json::Value;

use super::Builder;
use crate::error::MenuError;
use crate::group::GroupScope;
use crate::group::merge_class;
use crate::item::Attributes;
use crate::item::Item;
use crate::item::ItemId;
use crate::item::ItemOptions;
use crate::item::Metadata;

/// Chainable mutation handle to a single item.
///
/// Returned by [`Builder::add`] and [`Builder::item_mut`]. The handle
/// resolves its item by id on every call, so it stays valid when a
/// [`group`](ItemMut::group) closure sorts or filters the menu. Edits to an
/// item that has been filtered out are no-ops.
///
/// # Example
///
/// ```
/// use navmenu_lib::context::{BaseUrlResolver, Environment, StaticRequest};
/// use navmenu_lib::{Builder, MenuConfig};
///
/// let env = Environment::new(
///     BaseUrlResolver::new("http://localhost").unwrap(),
///     StaticRequest::from_url("http://localhost/").unwrap(),
/// );
/// let mut menu = Builder::new("main", MenuConfig::no_cache(), env);
///
/// let users = menu
///     .add("Users", "users")
///     .unwrap()
///     .class("nav-users")
///     .data("icon", "user")
///     .prepend("<i></i> ")
///     .id();
///
/// assert_eq!(menu.find(users).unwrap().title(), "<i></i> Users");
/// assert_eq!(menu.find(users).unwrap().nickname(), "users");
/// ```
pub struct ItemMut<'a> {
    menu: &'a mut Builder,
    id: ItemId,
}

impl<'a> ItemMut<'a> {
    pub(crate) fn new(menu: &'a mut Builder, id: ItemId) -> Self {
        Self { menu, id }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Read access to the item, `None` once it has been filtered out.
    pub fn item(&self) -> Option<&Item> {
        self.menu.find(self.id)
    }

    /// The owning menu.
    pub fn menu(&self) -> &Builder {
        &*self.menu
    }

    fn edit(&mut self, change: impl FnOnce(&mut Item)) {
        if let Some(item) = self.menu.tree.find_mut(self.id) {
            change(item);
        }
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    /// Sets a render attribute.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let (key, value) = (key.into(), value.into());
        self.edit(|item| {
            item.attributes.insert(key, value);
        });
        self
    }

    /// Sets several render attributes.
    pub fn attrs(mut self, attributes: Attributes) -> Self {
        self.edit(|item| item.attributes.extend(attributes));
        self
    }

    /// Adds class tokens, keeping existing ones first.
    pub fn class(mut self, class: &str) -> Self {
        self.edit(|item| {
            let current = item.attributes.get("class").map(String::as_str);
            if let Some(merged) = merge_class(Some(class), current) {
                item.attributes.insert("class".to_string(), merged);
            }
        });
        self
    }

    /// Sets an attribute on the link; a no-op for raw items.
    pub fn link_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let (key, value) = (key.into(), value.into());
        self.edit(|item| {
            if let Some(link) = item.link.as_mut() {
                link.attributes.insert(key, value);
            }
        });
        self
    }

    /// Overrides the resolved URL of the link; a no-op for raw items.
    pub fn href(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.edit(|item| {
            if let Some(link) = item.link.as_mut() {
                link.href = Some(url);
            }
        });
        self
    }

    /// Attaches a separator rendered after the item.
    pub fn divide(self, attributes: Attributes) -> Self {
        self.menu.set_divider(self.id, attributes);
        self
    }

    // =========================================================================
    // Metadata
    // =========================================================================

    /// Stores a metadata value. Keys are lowercased.
    ///
    /// With `cascade_data` the value is also stored on every current
    /// descendant.
    pub fn data(self, key: &str, value: impl Into<Value>) -> Self {
        self.menu.set_data(self.id, key, value.into());
        self
    }

    /// Stores several metadata values.
    pub fn data_map(self, data: Metadata) -> Self {
        for (key, value) in data {
            self.menu.set_data(self.id, &key, value);
        }
        self
    }

    // =========================================================================
    // Title
    // =========================================================================

    /// Appends text to the title. The nickname is unaffected.
    pub fn append(mut self, text: &str) -> Self {
        self.edit(|item| item.title.push_str(text));
        self
    }

    /// Prepends text to the title. The nickname is unaffected.
    pub fn prepend(mut self, text: &str) -> Self {
        self.edit(|item| item.title.insert_str(0, text));
        self
    }

    /// Wraps the title between two strings.
    pub fn enclose(self, before: &str, after: &str) -> Self {
        self.prepend(before).append(after)
    }

    // =========================================================================
    // Activation
    // =========================================================================

    /// Marks the item active, cascading to its ancestors when configured.
    ///
    /// Fails with [`MenuError::ItemNotFound`] when the item has been
    /// filtered out of the menu.
    pub fn active(self) -> Result<Self, MenuError> {
        self.menu.activate(self.id)?;
        Ok(self)
    }

    /// Activates the item when the request path matches `pattern`.
    pub fn active_when(self, pattern: &str) -> Result<Self, MenuError> {
        self.menu.activate_when(self.id, pattern)?;
        Ok(self)
    }

    // =========================================================================
    // Children
    // =========================================================================

    /// Adds a child item and returns a handle to it.
    pub fn add(self, title: impl Into<String>, options: impl Into<ItemOptions>) -> Result<ItemMut<'a>, MenuError> {
        let options = options.into().parent(self.id);
        let menu = self.menu;
        menu.add(title, options)
    }

    /// Adds a text-only child item.
    pub fn raw(self, title: impl Into<String>, options: impl Into<ItemOptions>) -> Result<ItemMut<'a>, MenuError> {
        let options = options.into().parent(self.id).as_raw();
        let menu = self.menu;
        menu.add(title, options)
    }

    /// Registers items inside a group scope and returns to this item.
    pub fn group<F>(self, scope: GroupScope, build: F) -> Result<Self, MenuError>
    where
        F: FnOnce(&mut Builder) -> Result<(), MenuError>,
    {
        self.menu.group(scope, build)?;
        Ok(self)
    }

    pub fn children(&self) -> Vec<&Item> {
        self.menu.children(self.id)
    }

    pub fn has_children(&self) -> bool {
        self.menu.has_children(self.id)
    }
}

/// Applies the same mutation to several items.
///
/// Returned by [`Builder::select`] and [`Builder::select_where`].
pub struct Batch<'a> {
    menu: &'a mut Builder,
    ids: Vec<ItemId>,
}

impl<'a> Batch<'a> {
    pub(crate) fn new(menu: &'a mut Builder, ids: Vec<ItemId>) -> Self {
        Self { menu, ids }
    }

    /// Ids of the selected items.
    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn each(&mut self, mut change: impl FnMut(&mut Item)) {
        for id in &self.ids {
            if let Some(item) = self.menu.tree.find_mut(*id) {
                change(item);
            }
        }
    }

    /// Sets a render attribute on every item.
    pub fn attr(mut self, key: &str, value: &str) -> Self {
        self.each(|item| {
            item.attributes.insert(key.to_string(), value.to_string());
        });
        self
    }

    /// Stores a metadata value on every item.
    pub fn data(self, key: &str, value: impl Into<Value>) -> Self {
        let value = value.into();
        for id in &self.ids {
            self.menu.set_data(*id, key, value.clone());
        }
        self
    }

    /// Appends text to every title.
    pub fn append(mut self, text: &str) -> Self {
        self.each(|item| item.title.push_str(text));
        self
    }

    /// Prepends text to every title.
    pub fn prepend(mut self, text: &str) -> Self {
        self.each(|item| item.title.insert_str(0, text));
        self
    }

    /// Wraps every title between two strings.
    pub fn enclose(self, before: &str, after: &str) -> Self {
        self.prepend(before).append(after)
    }
}
