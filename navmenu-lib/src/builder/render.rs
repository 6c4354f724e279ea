//! Cached rendering

use super::Builder;
use crate::error::MenuError;
use crate::item::Attributes;
use crate::item::ItemId;

impl Builder {
    /// Key of a rendering in the cache.
    ///
    /// Combines the menu name, the container tag and the current route, so
    /// the same menu renders once per route. The request path stands in for
    /// the route when the request has no route name.
    pub fn cache_key(&self, tag: &str, parent: Option<ItemId>) -> String {
        let request = self.env.request();
        let route = request.route_name().unwrap_or_else(|| request.path());
        match parent {
            None => format!("menu-{}{}{}", self.name, tag, route),
            Some(parent) => format!("menu-{}{}{}:{}", self.name, tag, route, parent),
        }
    }

    /// Renders the items below `parent` (the roots when `None`).
    ///
    /// The result is memoized in the render cache for the configured TTL.
    /// A zero TTL bypasses the cache entirely.
    pub fn render(&self, tag: &str, parent: Option<ItemId>) -> Result<String, MenuError> {
        let Some(ttl) = self.config.cache_ttl() else {
            return self.env.renderer.render(self, tag, parent);
        };

        let key = self.cache_key(tag, parent);
        if let Some(markup) = self.env.cache().get(&key) {
            log::trace!("menu '{}': render cache hit for {}", self.name, key);
            return Ok(markup);
        }

        log::debug!("menu '{}': rendering {}", self.name, key);
        let markup = self.env.renderer.render(self, tag, parent)?;
        self.env.cache().put(&key, markup.clone(), ttl);
        Ok(markup)
    }

    /// Renders the roots wrapped in `<ul>`.
    pub fn as_ul(&self, attributes: &Attributes) -> Result<String, MenuError> {
        self.wrapped("ul", attributes)
    }

    /// Renders the roots wrapped in `<ol>`.
    pub fn as_ol(&self, attributes: &Attributes) -> Result<String, MenuError> {
        self.wrapped("ol", attributes)
    }

    /// Renders the roots wrapped in `<div>`.
    pub fn as_div(&self, attributes: &Attributes) -> Result<String, MenuError> {
        self.wrapped("div", attributes)
    }

    /// Drops the cached top-level rendering for `tag` on the current route.
    pub fn forget_rendered(&self, tag: &str) {
        self.env.cache().remove(&self.cache_key(tag, None));
    }

    fn wrapped(&self, tag: &str, attributes: &Attributes) -> Result<String, MenuError> {
        let body = self.render(tag, None)?;
        Ok(format!("<{tag}{}>{body}</{tag}>", self.attributes(attributes)))
    }
}
