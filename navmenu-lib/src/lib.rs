//! Hierarchical navigation menu engine
//!
//! Register items (title, link target, attributes) into a tree, optionally
//! under shared group scopes, compute the active path for the current
//! request and render the tree as nested HTML lists with memoization.
//!
//! URL generation, the current request and the render cache are injected
//! through [`context::Environment`].

pub mod builder;
pub mod cache;
pub mod config;
pub mod context;
pub mod error;
pub mod group;
pub mod import;
pub mod item;
pub mod registry;
pub mod render;
pub mod tree;

pub use builder::Batch;
pub use builder::Builder;
pub use builder::ItemMut;
pub use config::ActiveElement;
pub use config::MenuConfig;
pub use config::MenuConfigPatch;
pub use config::MenuSettings;
pub use config::RestBase;
pub use context::Environment;
pub use error::ConfigError;
pub use error::LinkError;
pub use error::MenuError;
pub use group::GroupScope;
pub use item::Attributes;
pub use item::Item;
pub use item::ItemId;
pub use item::ItemOptions;
pub use registry::MenuRegistry;
pub use tree::Direction;
pub use tree::Field;
