//! Current request accessor

use url::Url;

use crate::error::LinkError;

/// Read access to the request a menu is rendered for.
pub trait RequestContext: Send + Sync {
    /// Request path relative to the application root, e.g. `admin/users/5`.
    ///
    /// Leading and trailing slashes are ignored by the matcher.
    fn path(&self) -> String;

    /// Request URL without query string or fragment, compared verbatim in
    /// exact matching mode.
    fn url(&self) -> String;

    /// Name of the matched route, part of the render cache key.
    fn route_name(&self) -> Option<String> {
        None
    }
}

/// A fixed request, for tests and offline rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticRequest {
    path: String,
    url: String,
    route_name: Option<String>,
}

impl StaticRequest {
    /// Creates a request from its parts.
    pub fn new(path: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            path: path.into().trim_matches('/').to_string(),
            url: url.into(),
            route_name: None,
        }
    }

    /// Creates a request from an absolute URL, deriving the path. The
    /// query string and fragment are dropped.
    pub fn from_url(url: &str) -> Result<Self, LinkError> {
        let mut parsed = Url::parse(url).map_err(|source| LinkError::invalid_url(url, source))?;
        parsed.set_query(None);
        parsed.set_fragment(None);
        Ok(Self::new(parsed.path(), parsed.to_string()))
    }

    /// Sets the route name.
    pub fn with_route_name(mut self, name: impl Into<String>) -> Self {
        self.route_name = Some(name.into());
        self
    }
}

impl RequestContext for StaticRequest {
    fn path(&self) -> String {
        self.path.clone()
    }

    fn url(&self) -> String {
        self.url.clone()
    }

    fn route_name(&self) -> Option<String> {
        self.route_name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_url_derives_trimmed_path() {
        let request = StaticRequest::from_url("http://localhost/admin/users/5/").unwrap();
        assert_eq!(request.path(), "admin/users/5");
        assert_eq!(request.url(), "http://localhost/admin/users/5/");
        assert_eq!(request.route_name(), None);
    }

    #[test]
    fn from_url_drops_query_and_fragment() {
        let request = StaticRequest::from_url("http://localhost/about?page=2#team").unwrap();
        assert_eq!(request.path(), "about");
        assert_eq!(request.url(), "http://localhost/about");
    }

    #[test]
    fn from_url_rejects_relative_input() {
        assert!(StaticRequest::from_url("admin/users").is_err());
    }
}
