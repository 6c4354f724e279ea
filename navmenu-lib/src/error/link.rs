//! Link resolution errors

/// Errors returned by a [`UrlResolver`](crate::context::UrlResolver).
#[derive(Debug, Clone, thiserror::Error)]
pub enum LinkError {
    /// No route is registered under the given name.
    #[error("Route '{0}' is not defined")]
    UnknownRoute(String),

    /// No controller action is registered under the given name.
    #[error("Action '{0}' is not defined")]
    UnknownAction(String),

    /// A route template needs more parameters than were supplied.
    #[error("Missing parameter '{parameter}' for '{target}'")]
    MissingParameter {
        /// Route or action name.
        target: String,
        /// Name of the placeholder left unfilled.
        parameter: String,
    },

    /// The URL could not be built.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        /// The URL (or path) that failed to parse.
        url: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },
}

impl LinkError {
    /// Creates a new missing parameter error.
    pub fn missing_parameter(target: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::MissingParameter {
            target: target.into(),
            parameter: parameter.into(),
        }
    }

    /// Creates a new invalid URL error.
    pub fn invalid_url(url: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            source,
        }
    }
}
