//! Per-page site settings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages may embed a `<script type="application/json" id="site-config">`
//! block. Every field is optional, so a page without the block (or with a
//! partial one) runs on the defaults below. Pages nested one directory deep
//! point `nav_fragment` at `../navtemplate.html`; the header element can
//! also override it with `data-nav-src`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::SiteError;

/// Id of the embedded JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Settings shared by every controller on a page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Relative path of the shared navigation fragment.
    pub nav_fragment: String,
    /// localStorage key holding the theme mode.
    pub storage_key: String,
    /// Viewport width below which a nav link click collapses the mobile menu.
    pub mobile_breakpoint_px: f64,
    /// Caption prefix for the lightbox, e.g. "Project Screenshot (2 of 5)".
    pub caption_label: String,
    /// Scroll the window to the top on page-ready.
    pub scroll_to_top: bool,
    pub reveal: RevealConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            nav_fragment: "navtemplate.html".to_owned(),
            storage_key: "mode".to_owned(),
            mobile_breakpoint_px: 768.0,
            caption_label: "Project Screenshot".to_owned(),
            scroll_to_top: true,
            reveal: RevealConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a config block. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] when `raw` is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// The fragment path for this page: the header's own override when it
    /// carries a non-empty one, the configured path otherwise.
    #[must_use]
    pub fn fragment_path<'a>(&'a self, header_override: Option<&'a str>) -> &'a str {
        match header_override.map(str::trim) {
            Some(path) if !path.is_empty() => path,
            _ => &self.nav_fragment,
        }
    }
}

/// How content cards are watched for visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealStrategy {
    /// Poll element positions on every scroll event.
    Scroll,
    /// Let an `IntersectionObserver` report visibility.
    #[default]
    Observer,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub strategy: RevealStrategy,
    pub selectors: Vec<String>,
    /// Scroll strategy: reveal once an element's top is above
    /// `viewport height - scroll_offset_px`.
    pub scroll_offset_px: f64,
    /// Observer strategy: visible fraction that triggers a reveal.
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            strategy: RevealStrategy::Observer,
            selectors: vec![
                ".timeline-item".to_owned(),
                ".skill-category".to_owned(),
                ".project-card".to_owned(),
            ],
            scroll_offset_px: 150.0,
            threshold: 0.2,
        }
    }
}

impl RevealConfig {
    /// All selectors joined for a single `querySelectorAll` call.
    #[must_use]
    pub fn selector_list(&self) -> String {
        self.selectors.join(", ")
    }
}
