//! Menu builder
//!
//! The [`Builder`] owns the item tree and the group stack of one menu. It
//! registers items under the current group scope, resolves link targets
//! through the injected [`UrlResolver`](crate::context::UrlResolver),
//! computes active state and renders the tree with memoization.

mod activation;
mod handle;
mod render;

pub use activation::pattern_regex;
pub use handle::*;

use serde_json::Value;

use crate::config::MenuConfig;
use crate::context::Environment;
use crate::context::is_absolute;
use crate::error::MenuError;
use crate::group::GroupScope;
use crate::group::GroupStack;
use crate::group::merge_class;
use crate::item::Attributes;
use crate::item::Item;
use crate::item::ItemId;
use crate::item::ItemOptions;
use crate::item::LinkKind;
use crate::item::LinkSpec;
use crate::tree::Direction;
use crate::tree::Field;
use crate::tree::Tree;

/// Builds, queries and renders a single named menu.
///
/// The build phase (`add`, `group`, mutations) is expected to complete
/// before rendering. Rendered markup is cached and is **not** invalidated
/// by later mutations; call [`Builder::forget_rendered`] after changing a
/// menu that has already been rendered.
///
/// # Example
///
/// ```
/// use navmenu_lib::context::{BaseUrlResolver, Environment, StaticRequest};
/// use navmenu_lib::{Builder, GroupScope, ItemOptions, MenuConfig};
///
/// let env = Environment::new(
///     BaseUrlResolver::new("http://localhost").unwrap(),
///     StaticRequest::from_url("http://localhost/about").unwrap(),
/// );
/// let mut menu = Builder::new("main", MenuConfig::no_cache(), env);
///
/// menu.add("Home", "/").unwrap();
/// let about = menu.add("About", "about").unwrap().id();
/// menu.group(GroupScope::new().prefix("about"), |menu| {
///     menu.add("Team", ItemOptions::url("team").parent(about))?;
///     Ok(())
/// })
/// .unwrap();
///
/// let html = menu.as_ul(&Default::default()).unwrap();
/// assert!(html.starts_with("<ul>"));
/// ```
pub struct Builder {
    name: String,
    config: MenuConfig,
    tree: Tree,
    groups: GroupStack,
    last_id: ItemId,
    env: Environment,
}

impl Builder {
    /// Creates an empty menu.
    pub fn new(name: impl Into<String>, config: MenuConfig, env: Environment) -> Self {
        Self {
            name: name.into(),
            config,
            tree: Tree::new(),
            groups: GroupStack::new(),
            last_id: ItemId(0),
            env,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Adds an item under the current group scope.
    ///
    /// With `auto_activate` the item is matched against the current request
    /// right away; later changes to the tree do not re-evaluate it.
    pub fn add(&mut self, title: impl Into<String>, options: impl Into<ItemOptions>) -> Result<ItemMut<'_>, MenuError> {
        let options = options.into();
        if let Some(parent) = options.parent_id() {
            if !self.tree.contains(parent) {
                return Err(MenuError::ItemNotFound(parent));
            }
        }

        let id = self.last_id.next();
        let attributes = self.groups.extract(options.attributes());
        let link = options.link_spec(self.groups.current_prefix());
        let item = Item::new(id, title, options.parent_id(), attributes, link);

        let matched = self.config.auto_activate && self.matches_request(&item)?;

        log::trace!("menu '{}': add item {} '{}'", self.name, id, item.title());
        self.tree.push(item)?;
        self.last_id = id;

        if matched {
            self.activate(id)?;
        }
        Ok(ItemMut::new(self, id))
    }

    /// Adds a text-only item.
    pub fn raw(&mut self, title: impl Into<String>, options: impl Into<ItemOptions>) -> Result<ItemMut<'_>, MenuError> {
        self.add(title, options.into().as_raw())
    }

    /// Registers items inside a group scope.
    ///
    /// The scope is popped after `build` returns, including on error.
    pub fn group<F>(&mut self, scope: GroupScope, build: F) -> Result<(), MenuError>
    where
        F: FnOnce(&mut Builder) -> Result<(), MenuError>,
    {
        self.groups.push(scope);
        let result = build(self);
        self.groups.pop()?;
        result
    }

    /// Opens a group scope without a closure. Must be paired with
    /// [`end_group`](Self::end_group).
    pub fn begin_group(&mut self, scope: GroupScope) {
        self.groups.push(scope);
    }

    /// Closes the innermost group scope.
    pub fn end_group(&mut self) -> Result<(), MenuError> {
        self.groups.pop().map(|_| ())
    }

    /// Prefix of the innermost open group.
    pub fn current_prefix(&self) -> &str {
        self.groups.current_prefix()
    }

    /// Attaches a separator after the most recently added item.
    pub fn divide(&mut self, attributes: Attributes) -> Result<(), MenuError> {
        let id = self
            .tree
            .last()
            .map(Item::id)
            .ok_or_else(|| MenuError::EmptyMenu(self.name.clone()))?;
        self.set_divider(id, attributes);
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The underlying tree.
    pub fn all(&self) -> &Tree {
        &self.tree
    }

    /// Item with the given id.
    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.tree.find(id)
    }

    /// Item with the given nickname.
    pub fn get(&self, nickname: &str) -> Option<&Item> {
        self.tree.get(nickname)
    }

    /// Alias of [`get`](Self::get).
    pub fn item(&self, nickname: &str) -> Option<&Item> {
        self.get(nickname)
    }

    pub fn first(&self) -> Option<&Item> {
        self.tree.first()
    }

    pub fn last(&self) -> Option<&Item> {
        self.tree.last()
    }

    /// Items without a parent.
    pub fn roots(&self) -> Vec<&Item> {
        self.tree.roots()
    }

    /// Roots when `parent` is `None`, else the direct children of `parent`.
    pub fn where_parent(&self, parent: Option<ItemId>) -> Vec<&Item> {
        self.tree.where_parent(parent)
    }

    pub fn children(&self, parent: ItemId) -> Vec<&Item> {
        self.tree.children(parent)
    }

    pub fn has_children(&self, parent: ItemId) -> bool {
        self.tree.has_children(parent)
    }

    /// Every descendant of `parent` in pre-order.
    pub fn descendants(&self, parent: ItemId) -> Vec<&Item> {
        self.tree.descendants(parent)
    }

    /// Items whose `field` equals `value`.
    ///
    /// With `recursive` the whole tree is walked in pre-order instead of the
    /// flat insertion order.
    pub fn where_field(&self, field: &Field, value: impl Into<Value>, recursive: bool) -> Vec<&Item> {
        let value = value.into();
        if recursive {
            self.tree.filter_recursive(field, &value)
        } else {
            self.tree.where_field(field, &value)
        }
    }

    /// [`where_field`](Self::where_field) with the field given by name.
    pub fn where_named(&self, name: &str, value: impl Into<Value>, recursive: bool) -> Result<Vec<&Item>, MenuError> {
        let field: Field = name.parse()?;
        Ok(self.where_field(&field, value, recursive))
    }

    /// Every item whose `field` equals `value`, in pre-order.
    pub fn filter_recursive(&self, field: &Field, value: impl Into<Value>) -> Vec<&Item> {
        self.tree.filter_recursive(field, &value.into())
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Mutable handle to an item.
    pub fn item_mut(&mut self, id: ItemId) -> Option<ItemMut<'_>> {
        if !self.tree.contains(id) {
            return None;
        }
        Some(ItemMut::new(self, id))
    }

    /// Mutable handle to the item with the given nickname.
    pub fn get_mut(&mut self, nickname: &str) -> Option<ItemMut<'_>> {
        let id = self.tree.get(nickname)?.id();
        self.item_mut(id)
    }

    /// Bulk mutation handle over the given items. Unknown ids are skipped.
    pub fn select(&mut self, ids: impl IntoIterator<Item = ItemId>) -> Batch<'_> {
        let ids = ids.into_iter().filter(|id| self.tree.contains(*id)).collect();
        Batch::new(self, ids)
    }

    /// Bulk mutation handle over the items whose `field` equals `value`.
    pub fn select_where(&mut self, field: &Field, value: impl Into<Value>, recursive: bool) -> Batch<'_> {
        let ids: Vec<ItemId> = self
            .where_field(field, value, recursive)
            .into_iter()
            .map(Item::id)
            .collect();
        Batch::new(self, ids)
    }

    /// Keeps only the items matching `predicate`.
    pub fn filter(&mut self, predicate: impl FnMut(&Item) -> bool) -> &mut Self {
        self.tree.retain(predicate);
        self
    }

    /// Stable sort of the items by `field`.
    pub fn sort_by(&mut self, field: &Field, direction: Direction) -> &mut Self {
        self.tree.sort_by(field, direction);
        self
    }

    pub(crate) fn set_divider(&mut self, id: ItemId, mut attributes: Attributes) {
        let class = merge_class(attributes.get("class").map(String::as_str), Some("divider"))
            .unwrap_or_else(|| "divider".to_string());
        attributes.insert("class".to_string(), class);
        if let Some(item) = self.tree.find_mut(id) {
            item.divider = Some(attributes);
        }
    }

    /// Stores metadata on `id`, cascading to its descendants when enabled.
    pub(crate) fn set_data(&mut self, id: ItemId, key: &str, value: Value) {
        let key = key.to_lowercase();
        let mut targets = vec![id];
        if self.config.cascade_data {
            targets.extend(self.tree.descendants(id).into_iter().map(Item::id));
        }
        for target in targets {
            if let Some(item) = self.tree.find_mut(target) {
                item.data.insert(key.clone(), value.clone());
            }
        }
    }

    // =========================================================================
    // Links
    // =========================================================================

    /// Resolved URL of an item; `None` for raw items.
    pub fn url_for(&self, item: &Item) -> Result<Option<String>, MenuError> {
        let Some(link) = item.link() else {
            return Ok(None);
        };
        if let Some(href) = link.href() {
            return Ok(Some(href.to_string()));
        }
        self.dispatch(link.spec()).map(Some)
    }

    /// Resolved URL of the item with the given id.
    pub fn url(&self, id: ItemId) -> Result<Option<String>, MenuError> {
        let item = self.tree.find(id).ok_or(MenuError::ItemNotFound(id))?;
        self.url_for(item)
    }

    /// Resolves a link spec through the injected resolver.
    ///
    /// Absolute URLs pass through untouched; relative ones get the group
    /// prefix joined in front.
    pub fn dispatch(&self, spec: &LinkSpec) -> Result<String, MenuError> {
        let urls = self.env.urls();
        let url = match spec.kind {
            LinkKind::Url if is_absolute(&spec.value) => spec.value.clone(),
            LinkKind::Url => urls.to(&spec.prefixed_path(), &spec.params, spec.secure)?,
            LinkKind::Route => urls.route(&spec.value, &spec.params)?,
            LinkKind::Action => urls.action(&spec.value, &spec.params)?,
        };
        Ok(url)
    }

    /// Serializes an attribute map with the injected attribute renderer.
    pub fn attributes(&self, attributes: &Attributes) -> String {
        self.env.attributes.render(attributes)
    }
}
