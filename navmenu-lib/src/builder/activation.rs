//! Active state

use regex::Regex;

use super::Builder;
use crate::config::ActiveElement;
use crate::context::url_path;
use crate::error::MenuError;
use crate::item::Item;
use crate::item::ItemId;

impl Builder {
    /// Returns `true` when the item's link points at the current request.
    ///
    /// In exact mode the resolved URL is compared with the request URL. In
    /// restful mode the request path matches when it equals the item path or
    /// continues below it (`users` matches `users/5/edit`), after stripping
    /// the configured rest base from both. Raw items never match.
    pub fn matches_request(&self, item: &Item) -> Result<bool, MenuError> {
        let Some(url) = self.url_for(item)? else {
            return Ok(false);
        };

        if !self.config.restful {
            return Ok(url == self.env.request().url());
        }

        let item_path = url_path(&url).trim_matches('/').to_string();
        let request_path = self.env.request().path().trim_matches('/').to_string();
        let (item_path, request_path) = match self.rest_base_regex()? {
            Some(base) => (
                base.replace(&item_path, "").into_owned(),
                base.replace(&request_path, "").into_owned(),
            ),
            None => (item_path, request_path),
        };

        let pattern = format!(r"^{}(/.+)?\z", regex::escape(&item_path));
        let matcher = Regex::new(&pattern).map_err(|source| MenuError::invalid_pattern(pattern.clone(), source))?;
        Ok(matcher.is_match(&request_path))
    }

    /// Matches an item against the request and activates it on success.
    pub fn check_activation(&mut self, id: ItemId) -> Result<bool, MenuError> {
        let item = self.tree.find(id).ok_or(MenuError::ItemNotFound(id))?;
        if !self.matches_request(item)? {
            return Ok(false);
        }
        self.activate(id)?;
        Ok(true)
    }

    /// Marks an item active and, with `activate_parents`, all its ancestors.
    ///
    /// Activating an already active item is a no-op.
    pub fn activate(&mut self, id: ItemId) -> Result<(), MenuError> {
        if !self.tree.contains(id) {
            return Err(MenuError::ItemNotFound(id));
        }
        log::debug!("menu '{}': activate item {}", self.name, id);
        self.mark_active(id);
        if self.config.activate_parents {
            for ancestor in self.tree.ancestors(id) {
                self.mark_active(ancestor);
            }
        }
        Ok(())
    }

    /// Activates `id` when the request path matches a glob-like pattern.
    ///
    /// See [`pattern_regex`] for the pattern syntax.
    pub fn activate_when(&mut self, id: ItemId, pattern: &str) -> Result<bool, MenuError> {
        if !self.tree.contains(id) {
            return Err(MenuError::ItemNotFound(id));
        }
        let matcher = pattern_regex(pattern)?;
        let path = self.env.request().path();
        if !matcher.is_match(path.trim_matches('/')) {
            return Ok(false);
        }
        self.activate(id)?;
        Ok(true)
    }

    fn mark_active(&mut self, id: ItemId) {
        let active_class = self.config.active_class.clone();
        let element = self.config.active_element;
        let Some(item) = self.tree.find_mut(id) else {
            return;
        };
        if element == ActiveElement::Link {
            if let Some(link) = item.link.as_mut() {
                link.activate(&active_class);
                item.is_active = true;
                return;
            }
        }
        item.activate_item(&active_class);
    }

    fn rest_base_regex(&self) -> Result<Option<Regex>, MenuError> {
        let bases = self.config.rest_base.alternatives();
        if bases.is_empty() {
            return Ok(None);
        }
        let alternation = bases.into_iter().map(regex::escape).collect::<Vec<_>>().join("|");
        let pattern = format!("^(?:{alternation})/");
        Regex::new(&pattern)
            .map(Some)
            .map_err(|source| MenuError::invalid_pattern(pattern.clone(), source))
    }
}

/// Compiles an activation pattern into an anchored regex.
///
/// `/*` matches the preceding path and anything below it, a bare `*`
/// matches any run of characters, everything else is literal. A leading
/// slash is ignored.
///
/// # Example
///
/// ```
/// use navmenu_lib::builder::pattern_regex;
///
/// let matcher = pattern_regex("/admin/users/*").unwrap();
/// assert!(matcher.is_match("admin/users"));
/// assert!(matcher.is_match("admin/users/5/edit"));
/// assert!(!matcher.is_match("admin/usersettings"));
/// ```
pub fn pattern_regex(pattern: &str) -> Result<Regex, MenuError> {
    let body = pattern
        .split("/*")
        .map(|piece| regex::escape(piece).replace(r"\*", ".*"))
        .collect::<Vec<_>>()
        .join("(/.*)?");
    let anchored = format!(r"^{}\z", body.trim_start_matches('/'));
    Regex::new(&anchored).map_err(|source| MenuError::invalid_pattern(pattern, source))
}
