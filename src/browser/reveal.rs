//! Scroll reveal wiring: scroll polling or an `IntersectionObserver`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use super::dom;
use crate::config::{RevealConfig, RevealStrategy};
use crate::error::SiteError;
use crate::reveal::{RevealTracker, VISIBLE_CLASS};

pub(crate) fn initialize(window: &Window, document: &Document, config: &RevealConfig) {
    let elements = dom::query_all(document, &config.selector_list());
    if elements.is_empty() {
        log::debug!("reveal: nothing to watch");
        return;
    }
    let tracker = RevealTracker::new(elements.len(), config);
    match tracker.strategy() {
        RevealStrategy::Scroll => watch_scroll(window, elements, tracker),
        RevealStrategy::Observer => {
            if let Err(e) = observe(&elements, tracker.clone()) {
                log::warn!("reveal: {e}; falling back to scroll polling");
                watch_scroll(window, elements, tracker);
            }
        }
    }
}

type Shared = (Rc<Vec<Element>>, Rc<RefCell<RevealTracker>>);

fn watch_scroll(window: &Window, elements: Vec<Element>, tracker: RevealTracker) {
    let shared: Shared = (Rc::new(elements), Rc::new(RefCell::new(tracker)));
    check_scroll(window, &shared);

    let scroll_window = window.clone();
    dom::listen(window, "scroll", move |_| check_scroll(&scroll_window, &shared));
}

fn check_scroll(window: &Window, (elements, tracker): &Shared) {
    let tops: Vec<f64> = elements
        .iter()
        .map(|element| element.get_bounding_client_rect().top())
        .collect();
    let newly = tracker.borrow_mut().on_scroll(dom::inner_height(window), &tops);
    for index in newly {
        if let Some(element) = elements.get(index) {
            dom::add_class(element, VISIBLE_CLASS);
        }
    }
}

fn observe(elements: &[Element], tracker: RevealTracker) -> Result<(), SiteError> {
    let threshold = tracker.threshold();
    let targets = Rc::new(elements.to_vec());
    let tracker = RefCell::new(tracker);

    let callback_targets = Rc::clone(&targets);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = callback_targets.iter().position(|el| *el == target) else {
                    continue;
                };
                let revealed = tracker
                    .borrow_mut()
                    .on_intersection(index, entry.is_intersecting(), entry.intersection_ratio());
                if revealed {
                    dom::add_class(&target, VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|e| dom::js_error("IntersectionObserver unavailable", &e))?;
    for element in targets.iter() {
        observer.observe(element);
    }
    callback.forget();
    Ok(())
}
