//! Named menus
//!
//! A [`MenuRegistry`] creates menus with their effective configuration and
//! keeps them by name for later rendering.

use std::collections::HashMap;

use crate::builder::Builder;
use crate::config::MenuConfig;
use crate::config::MenuSettings;
use crate::context::Environment;
use crate::error::MenuError;
use crate::import::import_tree;
use crate::import::parse_menu;

/// Collection of named menus sharing one environment.
///
/// # Example
///
/// ```
/// use navmenu_lib::context::{BaseUrlResolver, Environment, StaticRequest};
/// use navmenu_lib::{MenuConfig, MenuRegistry, MenuSettings};
///
/// let env = Environment::new(
///     BaseUrlResolver::new("http://localhost").unwrap(),
///     StaticRequest::from_url("http://localhost/").unwrap(),
/// );
/// let mut menus = MenuRegistry::new(MenuSettings::new(MenuConfig::no_cache()), env);
///
/// menus
///     .make("main", |menu| {
///         menu.add("Home", "/")?;
///         Ok(())
///     })
///     .unwrap();
///
/// assert_eq!(menus.get("main").unwrap().all().len(), 1);
/// ```
pub struct MenuRegistry {
    settings: MenuSettings,
    env: Environment,
    menus: HashMap<String, Builder>,
}

impl MenuRegistry {
    /// Creates an empty registry.
    pub fn new(settings: MenuSettings, env: Environment) -> Self {
        Self {
            settings,
            env,
            menus: HashMap::new(),
        }
    }

    /// Effective configuration of the named menu.
    pub fn config_for(&self, name: &str) -> MenuConfig {
        self.settings.for_menu(name)
    }

    /// Creates a menu, lets `build` register its items and stores it.
    ///
    /// A menu with the same name is replaced. Nothing is stored when `build`
    /// fails.
    pub fn make<F>(&mut self, name: &str, build: F) -> Result<&mut Builder, MenuError>
    where
        F: FnOnce(&mut Builder) -> Result<(), MenuError>,
    {
        let mut menu = Builder::new(name, self.config_for(name), self.env.clone());
        build(&mut menu)?;
        log::debug!("registered menu '{}' with {} items", name, menu.all().len());

        Ok(self.menus.entry(name.to_string()).insert_entry(menu).into_mut())
    }

    /// Creates a menu from a serialized JSON tree.
    pub fn make_from_json(&mut self, name: &str, json: &str) -> Result<&mut Builder, MenuError> {
        let nodes = parse_menu(json)?;
        log::debug!("importing menu '{}' ({} top-level nodes)", name, nodes.len());
        self.make(name, |menu| import_tree(menu, &nodes, None))
    }

    pub fn get(&self, name: &str) -> Option<&Builder> {
        self.menus.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Builder> {
        self.menus.get_mut(name)
    }

    /// Removes a menu and returns it.
    pub fn remove(&mut self, name: &str) -> Option<Builder> {
        self.menus.remove(name)
    }

    /// Names of the registered menus, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.menus.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }
}
