//! WebAssembly entry point.

use turntable_core::PageConfig;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::error::WebResult;
use crate::{audio, dom, reveal, vinyl, year};

/// Attribute on `<body>` holding an optional JSON [`PageConfig`].
const CONFIG_ATTRIBUTE: &str = "data-turntable-config";

fn load_config(document: &Document) -> PageConfig {
    let raw = document
        .body()
        .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE));
    PageConfig::from_json_or_default(raw.as_deref())
}

/// Wire every page feature. A failing feature is logged and skipped.
fn mount_page(window: &Window, document: &Document) {
    let config = load_config(document);

    if !year::stamp(document, &config.year_id) {
        log::debug!("No #{} element, skipping year", config.year_id);
    }
    if let Err(e) = audio::mount(document, &config.audio) {
        log::warn!("Audio disabled: {}", e);
    }
    if let Err(e) = vinyl::mount(window, document, &config.vinyl) {
        log::warn!("Vinyl disabled: {}", e);
    }
    if let Err(e) = reveal::mount(window, document, &config.reveal) {
        log::warn!("Reveal disabled: {}", e);
    }
}

fn start() -> WebResult<()> {
    let window = dom::window()?;
    let document = dom::document(&window)?;

    if document.ready_state() == "loading" {
        let doc = document.clone();
        dom::listen_once(&document, &["DOMContentLoaded"], move |_| {
            mount_page(&window, &doc);
        })?;
    } else {
        mount_page(&window, &document);
    }
    Ok(())
}

/// Initialize logging and mount the page behavior.
#[wasm_bindgen(start)]
pub fn run_wasm() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    // Only fails if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("Starting Turntable (WASM)");

    if let Err(e) = start() {
        log::error!("Turntable failed to start: {}", e);
    }
}
