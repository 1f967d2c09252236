//! Navigation fragment fetch and wiring.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Document, Element, Window};

use super::dom;
use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::nav::{
    ACTIVE_LINK_CLASS, FragmentSource, HEADER_FRAGMENT_ATTR, MENU_OPEN_CLASS, MOBILE_TOGGLE_ID, MenuIcon, MobileMenu,
    NavOutcome, NavigationLoader, active_flags, check_status,
};

/// Fetches fragments relative to the current page with `gloo-net`.
struct HttpSource;

impl FragmentSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<String, SiteError> {
        let resp = gloo_net::http::Request::get(path)
            .send()
            .await
            .map_err(|e| SiteError::Network(e.to_string()))?;
        check_status(resp.status(), &resp.status_text())?;
        resp.text().await.map_err(|e| SiteError::Network(e.to_string()))
    }
}

/// Fetch and inject the fragment into `header`, then run `on_settled`
/// whether or not the fetch succeeded.
pub(crate) async fn load(
    window: &Window,
    document: &Document,
    header: &Element,
    config: &SiteConfig,
    on_settled: impl FnOnce(),
) {
    let path = config
        .fragment_path(header.get_attribute(HEADER_FRAGMENT_ATTR).as_deref())
        .to_owned();
    let on_loaded = |html: &str| {
        header.set_inner_html(html);
        wire(window, document, header, config.mobile_breakpoint_px);
    };
    if let NavOutcome::Loaded(_) = NavigationLoader::new(path).run(&HttpSource, on_loaded, on_settled).await {
        log::debug!("nav: fragment injected");
    }
}

fn wire(window: &Window, document: &Document, header: &Element, breakpoint_px: f64) {
    let current_path = match window.location().pathname() {
        Ok(path) => path,
        Err(e) => {
            log::warn!("nav: cannot read location: {}", dom::describe(&e));
            String::new()
        }
    };

    let links = dom::query_all_within(header, "nav a");
    let hrefs: Vec<String> = links
        .iter()
        .map(|link| link.get_attribute("href").unwrap_or_default())
        .collect();
    for (link, active) in links.iter().zip(active_flags(&current_path, &hrefs)) {
        if active {
            dom::add_class(link, ACTIVE_LINK_CLASS);
        }
    }

    let menu_list = dom::query(header, "nav ul").or_else(|| dom::query(header, ".nav-menu"));
    let toggle = document.get_element_by_id(MOBILE_TOGGLE_ID);
    let menu = Rc::new(Cell::new(MobileMenu::default()));

    for link in &links {
        let menu = Rc::clone(&menu);
        let list = menu_list.clone();
        let toggle = toggle.clone();
        let window = window.clone();
        dom::listen(link, "click", move |_| {
            let mut state = menu.get();
            if let Some(icon) = state.close_after_link(dom::inner_width(&window), breakpoint_px) {
                if let Some(list) = &list {
                    dom::remove_class(list, MENU_OPEN_CLASS);
                }
                if let Some(toggle) = &toggle {
                    show_icon(toggle, icon);
                }
            }
            menu.set(state);
        });
    }

    let (Some(toggle), Some(list)) = (toggle, menu_list) else {
        log::debug!("nav: no mobile menu toggle in fragment");
        return;
    };
    let button = toggle.clone();
    dom::listen(&toggle, "click", move |_| {
        let mut state = menu.get();
        let icon = state.toggle();
        menu.set(state);
        dom::set_class(&list, MENU_OPEN_CLASS, state.is_open());
        show_icon(&button, icon);
    });
}

fn show_icon(toggle: &Element, icon: MenuIcon) {
    dom::remove_class(toggle, icon.other_class());
    dom::add_class(toggle, icon.class());
}
