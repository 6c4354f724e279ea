//! Ordered item collection and its query layer.

mod query;

use std::cell::OnceCell;
use std::collections::HashMap;
use std::collections::HashSet;

use serde_json::Value;

pub use query::*;

use crate::error::MenuError;
use crate::item::Item;
use crate::item::ItemId;

/// All items of one menu, in insertion order.
///
/// Parent/child relations are encoded as id references. Queries return
/// snapshot vectors of borrowed items; mutation goes through the owning
/// [`Builder`](crate::Builder).
///
/// A query for the children of an id that is not in the tree yields an
/// empty result rather than an error.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    items: Vec<Item>,
    /// Indices of root items, rebuilt after any structural change.
    roots: OnceCell<Vec<usize>>,
}

impl Tree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in tree order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Appends an item.
    pub fn push(&mut self, item: Item) -> Result<(), MenuError> {
        if self.contains(item.id()) {
            return Err(MenuError::DuplicateId(item.id()));
        }
        self.items.push(item);
        self.roots.take();
        Ok(())
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    /// Returns the item with the given id.
    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub(crate) fn find_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Returns the first item with the given nickname.
    pub fn get(&self, nickname: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.nickname() == nickname)
    }

    pub fn first(&self) -> Option<&Item> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&Item> {
        self.items.last()
    }

    /// Items whose `field` equals `value`, in tree order.
    pub fn where_field(&self, field: &Field, value: &Value) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| field.matches(item, value))
            .collect()
    }

    /// Root items (`parent == None`) or the direct children of `parent`.
    pub fn where_parent(&self, parent: Option<ItemId>) -> Vec<&Item> {
        match parent {
            None => self
                .root_indices()
                .iter()
                .map(|&index| &self.items[index])
                .collect(),
            Some(parent) => self.children(parent),
        }
    }

    /// Items with no parent, in insertion order.
    pub fn roots(&self) -> Vec<&Item> {
        self.where_parent(None)
    }

    /// Direct children of `parent`.
    pub fn children(&self, parent: ItemId) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.parent() == Some(parent))
            .collect()
    }

    pub fn has_children(&self, parent: ItemId) -> bool {
        self.items.iter().any(|item| item.parent() == Some(parent))
    }

    /// Every descendant of `parent`, depth first, pre-order.
    pub fn descendants(&self, parent: ItemId) -> Vec<&Item> {
        let index = self.child_index();
        let mut out = Vec::new();
        self.collect_subtree(parent, &index, &mut out, &mut |_: &Item| true);
        out
    }

    /// Ids of the ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: ItemId) -> Vec<ItemId> {
        let mut out = Vec::new();
        let mut seen = HashSet::from([id]);
        let mut current = self.find(id).and_then(Item::parent);
        while let Some(parent) = current {
            if !seen.insert(parent) {
                break;
            }
            out.push(parent);
            current = self.find(parent).and_then(Item::parent);
        }
        out
    }

    /// Every item whose `field` equals `value`, walking the tree depth
    /// first in pre-order. Matches below a matching ancestor are included.
    ///
    /// Items whose parent is no longer in the tree are visited as roots.
    pub fn filter_recursive(&self, field: &Field, value: &Value) -> Vec<&Item> {
        let index = self.child_index();
        let mut out = Vec::new();
        for item in self.items.iter().filter(|item| self.is_top_level(item)) {
            if field.matches(item, value) {
                out.push(item);
            }
            self.collect_subtree(item.id(), &index, &mut out, &mut |child: &Item| field.matches(child, value));
        }
        out
    }

    /// Keeps only the items matching `predicate`.
    pub fn retain(&mut self, predicate: impl FnMut(&Item) -> bool) {
        self.items.retain(predicate);
        self.roots.take();
    }

    /// Stable sort by `field`; equal keys keep their relative order.
    pub fn sort_by(&mut self, field: &Field, direction: Direction) {
        self.items.sort_by(|first, second| {
            let ordering = compare_values(&field.value_of(first), &field.value_of(second));
            match direction {
                Direction::Asc => ordering,
                Direction::Desc => ordering.reverse(),
            }
        });
        self.roots.take();
    }

    fn root_indices(&self) -> &[usize] {
        self.roots.get_or_init(|| {
            self.items
                .iter()
                .enumerate()
                .filter(|(_, item)| item.parent().is_none())
                .map(|(index, _)| index)
                .collect()
        })
    }

    fn is_top_level(&self, item: &Item) -> bool {
        match item.parent() {
            None => true,
            Some(parent) => !self.contains(parent),
        }
    }

    fn child_index(&self) -> HashMap<ItemId, Vec<usize>> {
        let mut index: HashMap<ItemId, Vec<usize>> = HashMap::new();
        for (position, item) in self.items.iter().enumerate() {
            if let Some(parent) = item.parent() {
                index.entry(parent).or_default().push(position);
            }
        }
        index
    }

    fn collect_subtree<'a>(
        &'a self,
        parent: ItemId,
        index: &HashMap<ItemId, Vec<usize>>,
        out: &mut Vec<&'a Item>,
        keep: &mut dyn FnMut(&Item) -> bool,
    ) {
        let Some(children) = index.get(&parent) else {
            return;
        };
        for &position in children {
            let child = &self.items[position];
            if keep(child) {
                out.push(child);
            }
            self.collect_subtree(child.id(), index, out, keep);
        }
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
