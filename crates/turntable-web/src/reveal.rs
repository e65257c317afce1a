//! Scroll reveal through `IntersectionObserver`.

use std::rc::Rc;

use turntable_core::{RevealConfig, RevealMode, RevealTracker};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Window,
};

use crate::dom;
use crate::error::WebResult;

fn show(item: &Element, class: &str) {
    if let Err(e) = item.class_list().add_1(class) {
        log::warn!("Failed to reveal item: {:?}", e);
    }
}

/// Hide `.reveal` items until they scroll into view. Without observer
/// support every item is shown immediately.
pub fn mount(window: &Window, document: &Document, config: &RevealConfig) -> WebResult<()> {
    let items = dom::query_all(document, &config.selector)?;
    if items.is_empty() {
        return Ok(());
    }
    let mut tracker = RevealTracker::new(items.len());
    let has_observer = dom::has_property(window, "IntersectionObserver");

    let threshold = match RevealMode::detect(has_observer, config.threshold) {
        RevealMode::Immediate => {
            for index in tracker.reveal_all() {
                show(&items[index], &config.visible_class);
            }
            log::info!("IntersectionObserver unavailable, revealed {} items", items.len());
            return Ok(());
        }
        RevealMode::Observe { threshold } => threshold,
    };

    let items = Rc::new(items);
    let observed = items.clone();
    let visible_class = config.visible_class.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let updates = entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let target = entry.target();
                    observed
                        .iter()
                        .position(|item| *item == target)
                        .map(|index| (index, entry.is_intersecting()))
                })
                .collect::<Vec<_>>();

            for index in tracker.on_entries(updates) {
                let item = &observed[index];
                show(item, &visible_class);
                observer.unobserve(item);
            }
            if tracker.is_done() {
                observer.disconnect();
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget(); // Observer keeps calling back for the page lifetime

    for item in items.iter() {
        observer.observe(item);
    }
    log::debug!("Observing {} reveal items", items.len());
    Ok(())
}
