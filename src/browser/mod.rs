//! Browser entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once per page. The lightbox is wired immediately since it lives in
//! its own DOM region. Theme and reveal setup wait for the navigation fetch
//! to settle because the theme toggle button ships inside the fragment.

mod dom;
mod lightbox;
mod nav;
mod reveal;
mod storage;
mod theme;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::nav::HEADER_ID;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed.
    console_log::init_with_level(log::Level::Info).unwrap_or_default();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        dom::listen(&document, "DOMContentLoaded", |_| boot());
    } else {
        boot();
    }
}

fn boot() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let config = read_config(&document);
    log::info!("folio: page ready");

    if config.scroll_to_top {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }

    lightbox::attach(&window, &document, &config);

    match document.get_element_by_id(HEADER_ID) {
        Some(header) => wasm_bindgen_futures::spawn_local(async move {
            nav::load(&window, &document, &header, &config, || {
                after_navigation(&window, &document, &config);
            })
            .await;
        }),
        None => after_navigation(&window, &document, &config),
    }
}

fn after_navigation(window: &Window, document: &Document, config: &SiteConfig) {
    theme::initialize(window, document, &config.storage_key);
    reveal::initialize(window, document, &config.reveal);
}

fn read_config(document: &Document) -> SiteConfig {
    let Some(block) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&block.text_content().unwrap_or_default()) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("config: {e}; using defaults");
            SiteConfig::default()
        }
    }
}
