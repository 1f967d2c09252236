//! Lightbox overlay: delegated clicks and keys in, [`LightboxAction`]s out.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlImageElement, KeyboardEvent, Window};

use super::dom;
use crate::config::SiteConfig;
use crate::image_path::parse_base;
use crate::lightbox::{
    CAPTION_ID, CLOSE_ATTR, LightboxAction, LightboxCore, LightboxFrame, LightboxKey, MODAL_ID, MODAL_IMAGE_ID,
    OPEN_ATTR, SLIDE_IMAGE_SELECTOR, STEP_ATTR, parse_step,
};

/// The overlay's elements. Only the modal itself is required.
struct Overlay {
    modal: Element,
    image: Option<HtmlImageElement>,
    caption: Option<Element>,
    root: Option<Element>,
}

impl Overlay {
    fn apply(&self, action: LightboxAction) {
        match action {
            LightboxAction::Show(frame) => {
                self.render(&frame);
                dom::set_style(&self.modal, "display", "block");
                if let Some(root) = &self.root {
                    dom::set_style(root, "overflow", "hidden");
                }
            }
            LightboxAction::Update(frame) => self.render(&frame),
            LightboxAction::Hide => {
                dom::set_style(&self.modal, "display", "none");
                if let Some(root) = &self.root {
                    dom::set_style(root, "overflow", "auto");
                }
            }
            LightboxAction::None => {}
        }
    }

    fn render(&self, frame: &LightboxFrame) {
        if let Some(image) = &self.image {
            image.set_src(&frame.src);
        }
        if let Some(caption) = &self.caption {
            caption.set_text_content(Some(frame.caption.as_str()));
        }
    }
}

/// Wire the lightbox if this page has one.
pub(crate) fn attach(window: &Window, document: &Document, config: &SiteConfig) {
    let Some(modal) = document.get_element_by_id(MODAL_ID) else {
        log::debug!("lightbox: no #{MODAL_ID} on this page");
        return;
    };
    let Some(base) = base_url(window, document) else {
        return;
    };

    let overlay = Rc::new(Overlay {
        modal,
        image: document
            .get_element_by_id(MODAL_IMAGE_ID)
            .and_then(|el| el.dyn_ref::<HtmlImageElement>().cloned()),
        caption: document.get_element_by_id(CAPTION_ID),
        root: document.document_element(),
    });
    let core = Rc::new(RefCell::new(LightboxCore::new(base, config.caption_label.clone())));

    {
        let overlay = Rc::clone(&overlay);
        let core = Rc::clone(&core);
        let click_document = document.clone();
        dom::listen(document, "click", move |event: Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_ref::<Element>().cloned()) else {
                return;
            };
            let action = route_click(&click_document, &target, &overlay.modal, &mut core.borrow_mut());
            overlay.apply(action);
        });
    }

    dom::listen(document, "keydown", move |event: Event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let action = core.borrow_mut().handle_key(LightboxKey::from_key(&key_event.key()));
        if action != LightboxAction::None {
            event.prevent_default();
        }
        overlay.apply(action);
    });
}

fn base_url(window: &Window, document: &Document) -> Option<url::Url> {
    let raw = match document.base_uri() {
        Ok(Some(uri)) => uri,
        Ok(None) | Err(_) => match window.location().href() {
            Ok(href) => href,
            Err(e) => {
                log::warn!("lightbox: no document base: {}", dom::describe(&e));
                return None;
            }
        },
    };
    match parse_base(&raw) {
        Ok(base) => Some(base),
        Err(e) => {
            log::warn!("lightbox: {e}");
            None
        }
    }
}

fn route_click(document: &Document, target: &Element, modal: &Element, core: &mut LightboxCore) -> LightboxAction {
    if target == modal {
        return core.handle_overlay_click(true);
    }
    if dom::closest(target, &format!("[{CLOSE_ATTR}]")).is_some() {
        return core.close();
    }
    if let Some(control) = dom::closest(target, &format!("[{STEP_ATTR}]")) {
        return match control.get_attribute(STEP_ATTR).as_deref().and_then(parse_step) {
            Some(step) => core.advance(step),
            None => {
                log::warn!("lightbox: unreadable {STEP_ATTR} value");
                LightboxAction::None
            }
        };
    }
    let Some(trigger) = dom::closest(target, &format!("[{OPEN_ATTR}]")) else {
        return LightboxAction::None;
    };

    let clicked = clicked_source(&trigger);
    if clicked.is_empty() {
        log::warn!("lightbox: trigger has no image source");
        return LightboxAction::None;
    }
    let slider_id = trigger.get_attribute(OPEN_ATTR).unwrap_or_default();
    core.open(&clicked, slider_sources(document, &slider_id))
}

/// The trigger's own `src` when it is an image, else its first inner image.
fn clicked_source(trigger: &Element) -> String {
    let image = match trigger.dyn_ref::<HtmlImageElement>() {
        Some(image) => Some(image.clone()),
        None => dom::query(trigger, "img").and_then(|el| el.dyn_ref::<HtmlImageElement>().cloned()),
    };
    image.map(|image| image.src()).unwrap_or_default()
}

/// Image sources of the slider container, or `None` when it does not exist.
fn slider_sources(document: &Document, slider_id: &str) -> Option<Vec<String>> {
    if slider_id.is_empty() {
        return None;
    }
    let container = document.get_element_by_id(slider_id)?;
    let sources = dom::query_all_within(&container, SLIDE_IMAGE_SELECTOR)
        .iter()
        .filter_map(|el| el.dyn_ref::<HtmlImageElement>().map(HtmlImageElement::src))
        .collect();
    Some(sources)
}
