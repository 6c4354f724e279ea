//! Menu engine errors

use crate::item::ItemId;

use super::LinkError;

/// Errors raised while building, querying or rendering a menu.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// An item with the same id is already part of the tree.
    ///
    /// Ids are assigned monotonically, so this indicates a broken invariant
    /// rather than a caller mistake.
    #[error("Item {0} already exists in the menu")]
    DuplicateId(ItemId),

    /// A dynamic field name does not name any item field.
    #[error("Unknown item attribute '{0}'")]
    UnknownAttribute(String),

    /// The referenced item is not part of the tree.
    #[error("Item {0} not found")]
    ItemNotFound(ItemId),

    /// The operation needs at least one item (e.g. `divide`).
    #[error("Menu '{0}' has no items")]
    EmptyMenu(String),

    /// A group scope was popped without a matching push.
    #[error("Group stack underflow: pop without matching push")]
    InvalidGroupNesting,

    /// An activation pattern could not be compiled.
    #[error("Invalid activation pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern as given by the caller.
        pattern: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// The URL resolver failed; surfaced unmodified.
    #[error(transparent)]
    Link(#[from] LinkError),

    /// A serialized menu definition could not be parsed.
    #[error("Menu definition parse error: {0}")]
    Import(#[from] serde_json::Error),
}

impl MenuError {
    /// Creates a new invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Returns `true` for errors that indicate a programming mistake in the
    /// caller (unbalanced groups, broken id invariant).
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::DuplicateId(_) | Self::InvalidGroupNesting)
    }
}
