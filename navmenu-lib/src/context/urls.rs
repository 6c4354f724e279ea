//! URL generation capability

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::error::LinkError;

/// `{name}` or `{name?}` placeholders in route templates.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+)(\?)?\}").expect("placeholder pattern is valid"));

/// Turns link targets into URLs.
///
/// The engine prepares the inputs (group prefix joined onto `url` targets,
/// absolute URLs passed through) and delegates everything else here.
pub trait UrlResolver: Send + Sync {
    /// URL for an application path. `params` are appended as extra segments.
    fn to(&self, path: &str, params: &[String], secure: bool) -> Result<String, LinkError>;

    /// URL for a named route.
    fn route(&self, name: &str, params: &[String]) -> Result<String, LinkError>;

    /// URL for a controller action.
    fn action(&self, name: &str, params: &[String]) -> Result<String, LinkError>;
}

/// Returns `true` when `url` carries a scheme (`https://...`, `mailto:...`).
pub fn is_absolute(url: &str) -> bool {
    Url::parse(url).is_ok()
}

/// Path component of a URL, absolute or relative.
pub fn url_path(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    }
}

/// A resolver rooted at a base URL with named route and action templates.
///
/// Templates use `{param}` placeholders (`{param?}` for optional ones),
/// filled from the parameters in order.
///
/// # Example
///
/// ```
/// use navmenu_lib::context::{BaseUrlResolver, UrlResolver};
///
/// let urls = BaseUrlResolver::new("http://localhost")
///     .unwrap()
///     .with_route("users.show", "users/{id}");
///
/// assert_eq!(urls.route("users.show", &["5".to_string()]).unwrap(), "http://localhost/users/5");
/// assert_eq!(urls.to("about", &[], true).unwrap(), "https://localhost/about");
/// ```
#[derive(Debug, Clone)]
pub struct BaseUrlResolver {
    base: Url,
    routes: HashMap<String, String>,
    actions: HashMap<String, String>,
}

impl BaseUrlResolver {
    /// Creates a resolver for the given base URL.
    pub fn new(base: &str) -> Result<Self, LinkError> {
        let base = Url::parse(base).map_err(|source| LinkError::invalid_url(base, source))?;
        Ok(Self {
            base,
            routes: HashMap::new(),
            actions: HashMap::new(),
        })
    }

    /// Registers a named route template.
    pub fn with_route(mut self, name: impl Into<String>, template: impl Into<String>) -> Self {
        self.routes.insert(name.into(), template.into());
        self
    }

    /// Registers a controller action template.
    pub fn with_action(mut self, name: impl Into<String>, template: impl Into<String>) -> Self {
        self.actions.insert(name.into(), template.into());
        self
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn build(&self, path: &str, secure: bool) -> Result<String, LinkError> {
        let joined = format!(
            "{}/{}",
            self.base.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let mut url = Url::parse(&joined).map_err(|source| LinkError::invalid_url(joined.clone(), source))?;
        if secure {
            // Only fails for schemes that cannot become https; keep them as-is.
            let _ = url.set_scheme("https");
        }
        Ok(url.to_string())
    }
}

impl UrlResolver for BaseUrlResolver {
    fn to(&self, path: &str, params: &[String], secure: bool) -> Result<String, LinkError> {
        let mut segments = vec![path.trim_matches('/').to_string()];
        segments.extend(params.iter().map(|param| param.trim_matches('/').to_string()));
        let path = segments
            .into_iter()
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join("/");
        self.build(&path, secure)
    }

    fn route(&self, name: &str, params: &[String]) -> Result<String, LinkError> {
        let template = self
            .routes
            .get(name)
            .ok_or_else(|| LinkError::UnknownRoute(name.to_string()))?;
        let path = fill_template(name, template, params)?;
        self.build(&path, false)
    }

    fn action(&self, name: &str, params: &[String]) -> Result<String, LinkError> {
        let template = self
            .actions
            .get(name)
            .ok_or_else(|| LinkError::UnknownAction(name.to_string()))?;
        let path = fill_template(name, template, params)?;
        self.build(&path, false)
    }
}

/// Substitutes placeholders in order; unused parameters are dropped.
fn fill_template(target: &str, template: &str, params: &[String]) -> Result<String, LinkError> {
    let mut params = params.iter();
    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    for captures in PLACEHOLDER.captures_iter(template) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        out.push_str(&template[last..whole.start()]);
        match params.next() {
            Some(value) => out.push_str(value),
            None if captures.get(2).is_some() => {}
            None => return Err(LinkError::missing_parameter(target, &captures[1])),
        }
        last = whole.end();
    }
    out.push_str(&template[last..]);
    Ok(out.replace("//", "/"))
}
