//! Capabilities injected into a menu builder.
//!
//! The engine never reaches for process-wide state: URL generation, the
//! current request, the render cache, attribute serialization and the
//! markup renderer are all passed in through an [`Environment`].

mod request;
mod urls;

pub use request::*;
pub use urls::*;

use std::sync::Arc;

use crate::cache::InMemoryCache;
use crate::cache::RenderCache;
use crate::render::AttributeRenderer;
use crate::render::HtmlAttributes;
use crate::render::HtmlRenderer;
use crate::render::Renderer;

/// The set of collaborators a [`Builder`](crate::Builder) works with.
///
/// Cheap to clone; every capability is reference counted so several menus
/// can share one cache.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use navmenu_lib::cache::InMemoryCache;
/// use navmenu_lib::context::{BaseUrlResolver, Environment, StaticRequest};
///
/// let urls = BaseUrlResolver::new("http://localhost").unwrap();
/// let request = StaticRequest::from_url("http://localhost/about").unwrap();
/// let env = Environment::new(urls, request).with_cache(Arc::new(InMemoryCache::new()));
/// ```
#[derive(Clone)]
pub struct Environment {
    pub(crate) urls: Arc<dyn UrlResolver>,
    pub(crate) request: Arc<dyn RequestContext>,
    pub(crate) cache: Arc<dyn RenderCache>,
    pub(crate) attributes: Arc<dyn AttributeRenderer>,
    pub(crate) renderer: Arc<dyn Renderer>,
}

impl Environment {
    /// Creates an environment with an in-memory cache and the HTML renderer.
    pub fn new(urls: impl UrlResolver + 'static, request: impl RequestContext + 'static) -> Self {
        Self {
            urls: Arc::new(urls),
            request: Arc::new(request),
            cache: Arc::new(InMemoryCache::new()),
            attributes: Arc::new(HtmlAttributes),
            renderer: Arc::new(HtmlRenderer),
        }
    }

    /// Replaces the render cache.
    pub fn with_cache(mut self, cache: Arc<dyn RenderCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Replaces the request accessor.
    pub fn with_request(mut self, request: impl RequestContext + 'static) -> Self {
        self.request = Arc::new(request);
        self
    }

    /// Replaces the attribute serializer.
    pub fn with_attribute_renderer(mut self, attributes: impl AttributeRenderer + 'static) -> Self {
        self.attributes = Arc::new(attributes);
        self
    }

    /// Replaces the markup renderer.
    pub fn with_renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn urls(&self) -> &dyn UrlResolver {
        self.urls.as_ref()
    }

    pub fn request(&self) -> &dyn RequestContext {
        self.request.as_ref()
    }

    pub fn cache(&self) -> &dyn RenderCache {
        self.cache.as_ref()
    }
}
