use std::cell::Cell;
use std::collections::HashMap;

use futures::executor::block_on;

use super::*;

#[derive(Default)]
struct StaticSource {
    pages: HashMap<String, String>,
    calls: Cell<usize>,
}

impl StaticSource {
    fn with(path: &str, html: &str) -> Self {
        let mut pages = HashMap::new();
        pages.insert(path.to_owned(), html.to_owned());
        Self { pages, calls: Cell::new(0) }
    }
}

impl FragmentSource for StaticSource {
    async fn fetch(&self, path: &str) -> Result<String, SiteError> {
        self.calls.set(self.calls.get() + 1);
        match self.pages.get(path) {
            Some(html) => Ok(html.clone()),
            None => Err(SiteError::NavStatus { status: 404, status_text: "Not Found".to_owned() }),
        }
    }
}

struct OfflineSource;

impl FragmentSource for OfflineSource {
    async fn fetch(&self, _path: &str) -> Result<String, SiteError> {
        Err(SiteError::Network("connection refused".to_owned()))
    }
}

// =============================================================
// page_file_name / active links
// =============================================================

#[test]
fn file_name_of_nested_path() {
    assert_eq!(page_file_name("/site/projects.html"), "projects.html");
    assert_eq!(page_file_name("projects.html"), "projects.html");
    assert_eq!(page_file_name("../index.html"), "index.html");
}

#[test]
fn file_name_strips_query_and_fragment() {
    assert_eq!(page_file_name("/site/projects.html?tab=2"), "projects.html");
    assert_eq!(page_file_name("contact.html#form"), "contact.html");
}

#[test]
fn directory_path_has_empty_file_name() {
    assert_eq!(page_file_name("/site/"), "");
    assert_eq!(page_file_name("/"), "");
}

#[test]
fn exactly_the_matching_link_is_active() {
    let hrefs = ["index.html", "projects.html", "contact.html"];
    assert_eq!(active_flags("/projects.html", &hrefs), vec![false, true, false]);
}

#[test]
fn directory_url_activates_index() {
    let hrefs = ["index.html", "projects.html"];
    assert_eq!(active_flags("/site/", &hrefs), vec![true, false]);
}

#[test]
fn relative_hrefs_compare_by_file_name() {
    let hrefs = vec!["../index.html".to_owned(), "../projects.html".to_owned()];
    assert_eq!(active_flags("/blog/projects.html", &hrefs[..]), vec![false, true]);
}

#[test]
fn unknown_page_activates_nothing() {
    let hrefs = ["index.html", "projects.html"];
    assert_eq!(active_flags("/resume.html", &hrefs), vec![false, false]);
}

// =============================================================
// MobileMenu
// =============================================================

#[test]
fn menu_starts_closed_with_bars() {
    let menu = MobileMenu::default();
    assert!(!menu.is_open());
    assert_eq!(menu.icon(), MenuIcon::Bars);
}

#[test]
fn toggle_swaps_icon() {
    let mut menu = MobileMenu::default();
    assert_eq!(menu.toggle(), MenuIcon::Times);
    assert!(menu.is_open());
    assert_eq!(menu.toggle(), MenuIcon::Bars);
    assert!(!menu.is_open());
}

#[test]
fn link_click_closes_menu_below_breakpoint() {
    let mut menu = MobileMenu::default();
    menu.toggle();
    assert_eq!(menu.close_after_link(400.0, 768.0), Some(MenuIcon::Bars));
    assert!(!menu.is_open());
}

#[test]
fn link_click_keeps_menu_at_or_above_breakpoint() {
    let mut menu = MobileMenu::default();
    menu.toggle();
    assert_eq!(menu.close_after_link(768.0, 768.0), None);
    assert!(menu.is_open());
}

#[test]
fn link_click_on_closed_menu_is_noop() {
    let mut menu = MobileMenu::default();
    assert_eq!(menu.close_after_link(320.0, 768.0), None);
}

#[test]
fn icon_classes_are_exclusive() {
    assert_eq!(MenuIcon::Bars.class(), "fa-bars");
    assert_eq!(MenuIcon::Bars.other_class(), "fa-times");
    assert_eq!(MenuIcon::Times.other_class(), "fa-bars");
}

// =============================================================
// check_status
// =============================================================

#[test]
fn success_statuses_pass() {
    assert!(check_status(200, "OK").is_ok());
    assert!(check_status(204, "No Content").is_ok());
}

#[test]
fn failure_status_carries_text() {
    let err = check_status(404, "Not Found").unwrap_err();
    assert!(matches!(err, SiteError::NavStatus { status: 404, .. }));
    assert_eq!(err.to_string(), "navigation fragment request failed: 404 Not Found");
}

#[test]
fn redirect_status_is_failure() {
    assert!(check_status(304, "Not Modified").is_err());
}

// =============================================================
// NavigationLoader
// =============================================================

/// Run a loader and count hook calls: (markup seen by `on_loaded`, settle count).
fn run_counting<F: FragmentSource>(path: &str, source: &F) -> (NavOutcome, Option<String>, usize) {
    let loaded = Cell::new(None);
    let settled = Cell::new(0);
    let outcome = block_on(NavigationLoader::new(path).run(
        source,
        |html| loaded.set(Some(html.to_owned())),
        || settled.set(settled.get() + 1),
    ));
    (outcome, loaded.into_inner(), settled.get())
}

#[test]
fn load_hands_markup_to_loaded_hook_then_settles() {
    let source = StaticSource::with("navtemplate.html", "<nav><ul></ul></nav>");
    let (outcome, loaded, settled) = run_counting("navtemplate.html", &source);
    assert_eq!(outcome.markup(), Some("<nav><ul></ul></nav>"));
    assert_eq!(loaded.as_deref(), Some("<nav><ul></ul></nav>"));
    assert_eq!(settled, 1);
    assert_eq!(source.calls.get(), 1);
}

#[test]
fn load_uses_configured_path() {
    let source = StaticSource::with("../navtemplate.html", "<nav></nav>");
    let loader = NavigationLoader::new("../navtemplate.html");
    assert_eq!(loader.fragment_path(), "../navtemplate.html");
    let (outcome, _, _) = run_counting("../navtemplate.html", &source);
    assert!(outcome.markup().is_some());
}

#[test]
fn missing_fragment_still_settles() {
    let source = StaticSource::default();
    let (outcome, loaded, settled) = run_counting("navtemplate.html", &source);
    assert!(matches!(outcome, NavOutcome::Failed(SiteError::NavStatus { status: 404, .. })));
    assert_eq!(loaded, None);
    assert_eq!(settled, 1);
}

#[test]
fn network_failure_still_settles() {
    let (outcome, loaded, settled) = run_counting("navtemplate.html", &OfflineSource);
    assert!(matches!(outcome, NavOutcome::Failed(SiteError::Network(_))));
    assert!(outcome.markup().is_none());
    assert_eq!(loaded, None);
    assert_eq!(settled, 1);
}

#[test]
fn settle_runs_after_markup_is_handled() {
    let source = StaticSource::with("navtemplate.html", "<nav></nav>");
    let order = std::cell::RefCell::new(Vec::new());
    block_on(NavigationLoader::new("navtemplate.html").run(
        &source,
        |_| order.borrow_mut().push("loaded"),
        || order.borrow_mut().push("settled"),
    ));
    assert_eq!(order.into_inner(), vec!["loaded", "settled"]);
}
