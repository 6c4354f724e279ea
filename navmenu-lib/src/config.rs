//! Menu configuration

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;

/// Thirty days, the default lifetime of a rendered menu in the cache.
const DEFAULT_CACHE_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// Which element receives the active class when an item is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveElement {
    /// The item wrapper (`<li>`, `<div>`, ...).
    #[default]
    Item,
    /// The anchor inside the item.
    Link,
}

/// One or more path segments stripped from both the item path and the
/// request path before restful matching.
///
/// Deserializes from either a string or an array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RestBase {
    /// A single base (`""` means none).
    One(String),
    /// Several alternative bases.
    Many(Vec<String>),
}

impl RestBase {
    /// Returns the non-empty alternatives.
    pub fn alternatives(&self) -> Vec<&str> {
        match self {
            Self::One(base) => vec![base.as_str()],
            Self::Many(bases) => bases.iter().map(String::as_str).collect(),
        }
        .into_iter()
        .map(|base| base.trim_matches('/'))
        .filter(|base| !base.is_empty())
        .collect()
    }

    /// Returns `true` when no base is configured.
    pub fn is_empty(&self) -> bool {
        self.alternatives().is_empty()
    }
}

impl Default for RestBase {
    fn default() -> Self {
        Self::One(String::new())
    }
}

impl From<&str> for RestBase {
    fn from(base: &str) -> Self {
        Self::One(base.to_string())
    }
}

impl From<Vec<String>> for RestBase {
    fn from(bases: Vec<String>) -> Self {
        Self::Many(bases)
    }
}

/// Behaviour switches for a single menu.
///
/// # Example
///
/// ```
/// use navmenu_lib::config::{ActiveElement, MenuConfig};
///
/// let config = MenuConfig::default()
///     .with_restful(true)
///     .with_rest_base("admin")
///     .with_active_element(ActiveElement::Link);
/// assert!(config.restful);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Evaluate activation for each item as it is added.
    ///
    /// Default: `true`
    pub auto_activate: bool,

    /// Activate every ancestor of an activated item.
    ///
    /// Default: `true`
    pub activate_parents: bool,

    /// Class token appended to the activated element.
    ///
    /// Default: `"active"`
    pub active_class: String,

    /// Element that receives the active class.
    ///
    /// Default: [`ActiveElement::Item`]
    pub active_element: ActiveElement,

    /// Match by path prefix instead of full URL equality.
    ///
    /// Default: `false`
    pub restful: bool,

    /// Base segment(s) ignored by restful matching.
    ///
    /// Default: none
    pub rest_base: RestBase,

    /// Propagate metadata set on an item to its descendants.
    ///
    /// Default: `true`
    pub cascade_data: bool,

    /// Lifetime of rendered markup in the cache, in seconds. `0` disables
    /// render caching.
    ///
    /// Default: 30 days
    pub cache_ttl: u64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            auto_activate: true,
            activate_parents: true,
            active_class: "active".to_string(),
            active_element: ActiveElement::Item,
            restful: false,
            rest_base: RestBase::default(),
            cascade_data: true,
            cache_ttl: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl MenuConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `auto_activate`.
    pub fn with_auto_activate(mut self, enabled: bool) -> Self {
        self.auto_activate = enabled;
        self
    }

    /// Sets `activate_parents`.
    pub fn with_activate_parents(mut self, enabled: bool) -> Self {
        self.activate_parents = enabled;
        self
    }

    /// Sets the active class token.
    pub fn with_active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = class.into();
        self
    }

    /// Sets the element receiving the active class.
    pub fn with_active_element(mut self, element: ActiveElement) -> Self {
        self.active_element = element;
        self
    }

    /// Sets restful matching.
    pub fn with_restful(mut self, enabled: bool) -> Self {
        self.restful = enabled;
        self
    }

    /// Sets the rest base.
    pub fn with_rest_base(mut self, base: impl Into<RestBase>) -> Self {
        self.rest_base = base.into();
        self
    }

    /// Sets metadata cascading.
    pub fn with_cascade_data(mut self, enabled: bool) -> Self {
        self.cascade_data = enabled;
        self
    }

    /// Sets the render cache TTL.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl.as_secs();
        self
    }

    /// Creates a config that never caches rendered markup.
    pub fn no_cache() -> Self {
        Self {
            cache_ttl: 0,
            ..Self::default()
        }
    }

    /// Returns the render cache TTL, or `None` when caching is disabled.
    pub fn cache_ttl(&self) -> Option<Duration> {
        (self.cache_ttl > 0).then(|| Duration::from_secs(self.cache_ttl))
    }

    /// Applies the keys present in `patch` on top of this config.
    pub fn merged(&self, patch: &MenuConfigPatch) -> Self {
        Self {
            auto_activate: patch.auto_activate.unwrap_or(self.auto_activate),
            activate_parents: patch.activate_parents.unwrap_or(self.activate_parents),
            active_class: patch
                .active_class
                .clone()
                .unwrap_or_else(|| self.active_class.clone()),
            active_element: patch.active_element.unwrap_or(self.active_element),
            restful: patch.restful.unwrap_or(self.restful),
            rest_base: patch
                .rest_base
                .clone()
                .unwrap_or_else(|| self.rest_base.clone()),
            cascade_data: patch.cascade_data.unwrap_or(self.cascade_data),
            cache_ttl: patch.cache_ttl.unwrap_or(self.cache_ttl),
        }
    }
}

/// Per-menu override; only the keys present replace the defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfigPatch {
    pub auto_activate: Option<bool>,
    pub activate_parents: Option<bool>,
    pub active_class: Option<String>,
    pub active_element: Option<ActiveElement>,
    pub restful: Option<bool>,
    pub rest_base: Option<RestBase>,
    pub cascade_data: Option<bool>,
    pub cache_ttl: Option<u64>,
}

/// Settings for every menu of an application.
///
/// The document holds a `default` section and optional sections named
/// after individual menus:
///
/// ```json
/// {
///     "default": { "restful": false, "active_class": "active" },
///     "admin": { "restful": true, "rest_base": "admin" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MenuSettings {
    /// Configuration shared by every menu.
    #[serde(default)]
    pub default: MenuConfig,

    /// Overrides keyed by lower-cased menu name.
    #[serde(flatten)]
    pub menus: HashMap<String, MenuConfigPatch>,
}

impl MenuSettings {
    /// Creates settings with the given defaults and no overrides.
    pub fn new(default: MenuConfig) -> Self {
        Self {
            default,
            menus: HashMap::new(),
        }
    }

    /// Registers an override for the named menu.
    pub fn with_menu(mut self, name: &str, patch: MenuConfigPatch) -> Self {
        self.menus.insert(name.to_lowercase(), patch);
        self
    }

    /// Parses settings from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.menus = settings
            .menus
            .into_iter()
            .map(|(name, patch)| (name.to_lowercase(), patch))
            .collect();
        Ok(settings)
    }

    /// Reads and parses a JSON settings file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Returns the effective config of the named menu.
    pub fn for_menu(&self, name: &str) -> MenuConfig {
        match self.menus.get(&name.to_lowercase()) {
            Some(patch) => self.default.merged(patch),
            None => self.default.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = MenuConfig::default();
        assert!(config.auto_activate);
        assert!(config.activate_parents);
        assert!(config.cascade_data);
        assert!(!config.restful);
        assert_eq!(config.active_class, "active");
        assert_eq!(config.active_element, ActiveElement::Item);
        assert!(config.rest_base.is_empty());
        assert_eq!(config.rest_base, RestBase::One(String::new()));
        assert_eq!(config.cache_ttl(), Some(Duration::from_secs(DEFAULT_CACHE_TTL_SECS)));
    }

    #[test]
    fn no_cache_disables_ttl() {
        assert_eq!(MenuConfig::no_cache().cache_ttl(), None);
    }

    #[test]
    fn rest_base_accepts_string_or_array() {
        let one: MenuConfig = serde_json::from_str(r#"{"rest_base": "admin"}"#).unwrap();
        assert_eq!(one.rest_base.alternatives(), vec!["admin"]);

        let many: MenuConfig = serde_json::from_str(r#"{"rest_base": ["admin", "/api/"]}"#).unwrap();
        assert_eq!(many.rest_base.alternatives(), vec!["admin", "api"]);
    }

    #[test]
    fn menu_override_only_replaces_present_keys() {
        let settings = MenuSettings::from_json_str(
            r#"{
                "default": { "active_class": "current", "restful": false },
                "Admin": { "restful": true, "rest_base": "admin" }
            }"#,
        )
        .unwrap();

        let admin = settings.for_menu("admin");
        assert!(admin.restful);
        assert_eq!(admin.active_class, "current");
        assert_eq!(admin.rest_base.alternatives(), vec!["admin"]);

        let main = settings.for_menu("main");
        assert!(!main.restful);
        assert_eq!(main.active_class, "current");
    }

    #[test]
    fn active_element_deserializes_lowercase() {
        let config: MenuConfig = serde_json::from_str(r#"{"active_element": "link"}"#).unwrap();
        assert_eq!(config.active_element, ActiveElement::Link);
    }
}
