//! Applies theme state to the root element and toggle button.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, Window};

use super::dom;
use super::storage::BrowserStore;
use crate::theme::{LIGHT_MODE_CLASS, TOGGLE_BUTTON_ID, ThemeAppearance, ThemeController};

pub(crate) fn initialize(window: &Window, document: &Document, storage_key: &str) {
    let Some(root) = document.document_element() else {
        log::warn!("theme: document has no root element");
        return;
    };

    let mut controller = ThemeController::new(BrowserStore::detect(window), storage_key);
    let appearance = controller.initialize(prefers_light(window));
    apply(document, &root, appearance);

    let Some(button) = document.get_element_by_id(TOGGLE_BUTTON_ID) else {
        log::debug!("theme: no #{TOGGLE_BUTTON_ID} on this page");
        return;
    };
    let controller = Rc::new(RefCell::new(controller));
    let document = document.clone();
    dom::listen(&button, "click", move |_| {
        let root_is_light = dom::has_class(&root, LIGHT_MODE_CLASS);
        let appearance = controller.borrow_mut().toggle(root_is_light);
        apply(&document, &root, appearance);
    });
}

fn apply(document: &Document, root: &Element, appearance: ThemeAppearance) {
    dom::set_class(root, LIGHT_MODE_CLASS, appearance.root_light_class);
    // The button may arrive with the nav fragment, so look it up each time.
    if let Some(icon) = toggle_icon(document) {
        icon.set_class_name(appearance.icon_class);
    }
}

fn toggle_icon(document: &Document) -> Option<Element> {
    let button = document.get_element_by_id(TOGGLE_BUTTON_ID)?;
    dom::query(&button, "i")
}

fn prefers_light(window: &Window) -> bool {
    match window.match_media("(prefers-color-scheme: light)") {
        Ok(Some(query)) => query.matches(),
        Ok(None) => false,
        Err(e) => {
            log::debug!("theme: matchMedia failed: {}", dom::describe(&e));
            false
        }
    }
}
