//! Errors raised while wiring the page.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("No global window")]
    NoWindow,
    #[error("No document")]
    NoDocument,
    #[error("Element not found: {0}")]
    Missing(String),
    #[error("Element {0} has an unexpected type")]
    WrongType(String),
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Result type for DOM wiring.
pub type WebResult<T> = Result<T, WebError>;
