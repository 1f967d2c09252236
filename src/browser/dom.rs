//! Thin web-sys helpers. Lookups return `Option`, writes log failures.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::error::SiteError;

pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

pub(crate) fn js_error(context: &str, value: &JsValue) -> SiteError {
    SiteError::Dom(format!("{context}: {}", describe(value)))
}

pub(crate) fn query(root: &Element, selector: &str) -> Option<Element> {
    match root.query_selector(selector) {
        Ok(found) => found,
        Err(e) => {
            log::warn!("dom: bad selector `{selector}`: {}", describe(&e));
            None
        }
    }
}

pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(e) => {
            log::warn!("dom: bad selector `{selector}`: {}", describe(&e));
            Vec::new()
        }
    }
}

pub(crate) fn query_all_within(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(e) => {
            log::warn!("dom: bad selector `{selector}`: {}", describe(&e));
            Vec::new()
        }
    }
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

pub(crate) fn closest(element: &Element, selector: &str) -> Option<Element> {
    match element.closest(selector) {
        Ok(found) => found,
        Err(e) => {
            log::warn!("dom: bad selector `{selector}`: {}", describe(&e));
            None
        }
    }
}

pub(crate) fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub(crate) fn add_class(element: &Element, class: &str) {
    if let Err(e) = element.class_list().add_1(class) {
        log::warn!("dom: cannot add class `{class}`: {}", describe(&e));
    }
}

pub(crate) fn remove_class(element: &Element, class: &str) {
    if let Err(e) = element.class_list().remove_1(class) {
        log::warn!("dom: cannot remove class `{class}`: {}", describe(&e));
    }
}

pub(crate) fn set_class(element: &Element, class: &str, present: bool) {
    if present {
        add_class(element, class);
    } else {
        remove_class(element, class);
    }
}

pub(crate) fn set_style(element: &Element, property: &str, value: &str) {
    let Some(html) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    if let Err(e) = html.style().set_property(property, value) {
        log::warn!("dom: cannot set {property}: {}", describe(&e));
    }
}

pub(crate) fn inner_width(window: &Window) -> f64 {
    match window.inner_width() {
        Ok(width) => width.as_f64().unwrap_or(0.0),
        Err(_) => 0.0,
    }
}

pub(crate) fn inner_height(window: &Window) -> f64 {
    match window.inner_height() {
        Ok(height) => height.as_f64().unwrap_or(0.0),
        Err(_) => 0.0,
    }
}

/// Attach a listener for the lifetime of the page.
pub(crate) fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("dom: cannot listen for {event}: {}", describe(&e));
        return;
    }
    closure.forget();
}
