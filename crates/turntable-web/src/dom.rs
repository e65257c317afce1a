//! Small DOM lookup and listener helpers.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, EventTarget, Window};

use crate::error::{WebError, WebResult};

pub fn window() -> WebResult<Window> {
    web_sys::window().ok_or(WebError::NoWindow)
}

pub fn document(window: &Window) -> WebResult<Document> {
    window.document().ok_or(WebError::NoDocument)
}

/// Element with the given id, cast to `T`.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> WebResult<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| WebError::Missing(format!("#{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| WebError::WrongType(format!("#{}", id)))
}

/// First element matching `selector`, cast to `T`.
pub fn query<T: JsCast>(document: &Document, selector: &str) -> WebResult<T> {
    document
        .query_selector(selector)?
        .ok_or_else(|| WebError::Missing(selector.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| WebError::WrongType(selector.to_string()))
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> WebResult<Vec<Element>> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Whether `name` exists as a property on `target` (feature detection).
pub fn has_property(target: &JsValue, name: &str) -> bool {
    js_sys::Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

/// Attach a listener for the lifetime of the page.
pub fn listen(
    target: &EventTarget,
    event_type: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> WebResult<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget(); // Listener lives as long as the page
    Ok(())
}

/// Attach one handler to several event types, each firing at most once.
pub fn listen_once(
    target: &EventTarget,
    event_types: &[&str],
    handler: impl FnMut(web_sys::Event) + 'static,
) -> WebResult<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    for event_type in event_types {
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
    }
    closure.forget();
    Ok(())
}
