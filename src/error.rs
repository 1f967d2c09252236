//! Error type shared by the site modules.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal to the page. Every caller logs the error and keeps
//! going in a degraded form: no navigation markup, default config, or an
//! unpersisted theme.

/// Failures surfaced by config parsing, navigation loading, and browser glue.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// The navigation fragment request completed with a non-success status.
    #[error("navigation fragment request failed: {status} {status_text}")]
    NavStatus { status: u16, status_text: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The embedded site config block is not valid JSON for [`crate::config::SiteConfig`].
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid url `{url}`: {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// The preference store rejected a read or write.
    #[error("preference storage failed: {0}")]
    Storage(String),
    /// A DOM call threw.
    #[error("dom operation failed: {0}")]
    Dom(String),
}
