//! Markup rendering
//!
//! [`Renderer`] turns the tree held by a [`Builder`] into markup.
//! [`HtmlRenderer`] is the default; alternate renderers walk the same
//! tree through the builder's query methods.

mod attributes;

pub use attributes::*;

use crate::builder::Builder;
use crate::error::MenuError;
use crate::item::Item;
use crate::item::ItemId;

/// Serializes the subtree below `parent` (the roots when `None`).
pub trait Renderer: Send + Sync {
    /// Renders the direct children of `parent` and their descendants.
    ///
    /// `tag` is the container tag the caller wraps the result in (`ul`,
    /// `ol`, `div`, ...); nested levels reuse it.
    fn render(&self, menu: &Builder, tag: &str, parent: Option<ItemId>) -> Result<String, MenuError>;
}

/// Nested HTML lists.
///
/// For `ul` and `ol` each item becomes an `li`; any other container tag is
/// used for the items as well. Titles are emitted verbatim so they may carry
/// markup (icons, badges).
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    fn render_item(&self, menu: &Builder, tag: &str, item: &Item, out: &mut String) -> Result<(), MenuError> {
        let item_tag = item_tag(tag);
        out.push_str(&format!("<{item_tag}{}>", menu.attributes(item.attributes())));

        match item.link() {
            Some(link) => {
                let url = menu.url_for(item)?.unwrap_or_default();
                out.push_str(&format!(
                    "<a{} href=\"{}\">{}</a>",
                    menu.attributes(link.attributes()),
                    escape(&url),
                    item.title()
                ));
            }
            None => out.push_str(item.title()),
        }

        if menu.has_children(item.id()) {
            out.push_str(&format!("<{tag}>"));
            out.push_str(&self.render(menu, tag, Some(item.id()))?);
            out.push_str(&format!("</{tag}>"));
        }

        out.push_str(&format!("</{item_tag}>"));

        if let Some(divider) = item.divider() {
            out.push_str(&format!("<{item_tag}{}></{item_tag}>", menu.attributes(divider)));
        }
        Ok(())
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, menu: &Builder, tag: &str, parent: Option<ItemId>) -> Result<String, MenuError> {
        let mut out = String::new();
        for item in menu.where_parent(parent) {
            self.render_item(menu, tag, item, &mut out)?;
        }
        Ok(out)
    }
}

/// Tag wrapping a single item inside a `tag` container.
pub fn item_tag(tag: &str) -> &str {
    match tag {
        "ul" | "ol" => "li",
        other => other,
    }
}
