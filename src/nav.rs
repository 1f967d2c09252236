//! Shared navigation fragment: loading, active link, mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page carries an empty `#site-header`. The fragment is fetched once
//! per page load and injected there; theme and reveal setup run after the
//! fetch settles, whether it succeeded or not.
//!
//! The fetch itself sits behind [`FragmentSource`] so the loader can be
//! driven by an in-memory source in tests and by `gloo-net` in the browser.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::error::SiteError;

/// Injection target for the fragment.
pub const HEADER_ID: &str = "site-header";
/// Optional per-page fragment path override on the header element.
pub const HEADER_FRAGMENT_ATTR: &str = "data-nav-src";
pub const MOBILE_TOGGLE_ID: &str = "mobile-menu-toggle";
pub const ACTIVE_LINK_CLASS: &str = "active-link";
pub const MENU_OPEN_CLASS: &str = "nav-open";

/// File name component of a path or href, without query or fragment.
///
/// `"/site/projects.html?tab=2"` becomes `"projects.html"`; a directory path
/// such as `"/site/"` becomes `""`.
#[must_use]
pub fn page_file_name(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    path.rsplit('/').next().unwrap_or(path)
}

/// Whether a link pointing at `href` belongs to the page named `current_file`.
/// A directory URL counts as `index.html`.
#[must_use]
pub fn is_active_link(href: &str, current_file: &str) -> bool {
    let link_file = page_file_name(href);
    link_file == current_file || (current_file.is_empty() && link_file == "index.html")
}

/// Active flags for `hrefs`, in order, for the page at `current_path`.
#[must_use]
pub fn active_flags<S: AsRef<str>>(current_path: &str, hrefs: &[S]) -> Vec<bool> {
    let current_file = page_file_name(current_path);
    hrefs
        .iter()
        .map(|href| is_active_link(href.as_ref(), current_file))
        .collect()
}

/// Icon shown on the mobile menu toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuIcon {
    Bars,
    Times,
}

impl MenuIcon {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Bars => "fa-bars",
            Self::Times => "fa-times",
        }
    }

    /// The class this icon replaces.
    #[must_use]
    pub fn other_class(self) -> &'static str {
        match self {
            Self::Bars => Self::Times.class(),
            Self::Times => Self::Bars.class(),
        }
    }
}

/// Open/closed state of the collapsible menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    #[must_use]
    pub fn icon(self) -> MenuIcon {
        if self.open { MenuIcon::Times } else { MenuIcon::Bars }
    }

    /// Flip the menu; returns the icon to show.
    pub fn toggle(&mut self) -> MenuIcon {
        self.open = !self.open;
        self.icon()
    }

    /// A nav link was clicked. Collapses an open menu on narrow viewports and
    /// returns the new icon; `None` when nothing changed.
    pub fn close_after_link(&mut self, viewport_width: f64, breakpoint_px: f64) -> Option<MenuIcon> {
        if !self.open || viewport_width >= breakpoint_px {
            return None;
        }
        self.open = false;
        Some(MenuIcon::Bars)
    }
}

/// Anything that can fetch the fragment markup by relative path.
#[allow(async_fn_in_trait)]
pub trait FragmentSource {
    /// # Errors
    ///
    /// [`SiteError::NavStatus`] for a non-success response and
    /// [`SiteError::Network`] when no response arrived.
    async fn fetch(&self, path: &str) -> Result<String, SiteError>;
}

/// Map a completed response's status onto the error taxonomy.
///
/// # Errors
///
/// Returns [`SiteError::NavStatus`] for any status outside 200..=299.
pub fn check_status(status: u16, status_text: &str) -> Result<(), SiteError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SiteError::NavStatus { status, status_text: status_text.to_owned() })
    }
}

/// How the fragment fetch ended.
#[derive(Debug)]
pub enum NavOutcome {
    /// Markup to inject into the header.
    Loaded(String),
    /// The fetch failed; the page continues without navigation markup.
    Failed(SiteError),
}

impl NavOutcome {
    #[must_use]
    pub fn markup(&self) -> Option<&str> {
        match self {
            Self::Loaded(html) => Some(html),
            Self::Failed(_) => None,
        }
    }
}

/// One-shot fragment loader. `run` consumes it, so a page that builds one
/// loader fetches once.
#[derive(Debug)]
pub struct NavigationLoader {
    fragment_path: String,
}

impl NavigationLoader {
    pub fn new(fragment_path: impl Into<String>) -> Self {
        Self { fragment_path: fragment_path.into() }
    }

    #[must_use]
    pub fn fragment_path(&self) -> &str {
        &self.fragment_path
    }

    /// Fetch the fragment. `on_loaded` receives the markup on success;
    /// `on_settled` runs afterwards on success and failure alike, so theme
    /// and reveal setup never wait on a broken fetch.
    pub async fn run<F, L, S>(self, source: &F, on_loaded: L, on_settled: S) -> NavOutcome
    where
        F: FragmentSource,
        L: FnOnce(&str),
        S: FnOnce(),
    {
        log::debug!("nav: fetching {}", self.fragment_path);
        let outcome = match source.fetch(&self.fragment_path).await {
            Ok(html) => NavOutcome::Loaded(html),
            Err(e) => {
                log::warn!("nav: error loading navigation from {}: {e}", self.fragment_path);
                NavOutcome::Failed(e)
            }
        };
        if let Some(html) = outcome.markup() {
            on_loaded(html);
        }
        on_settled();
        outcome
    }
}
