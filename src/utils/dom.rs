//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

use dropstage_core::SetupError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the current document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Look up a required element by id and cast it to `T`.
///
/// `expected` names the element kind for the error message.
pub fn required_element<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> Result<T, SetupError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SetupError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| SetupError::WrongElement {
            id: id.to_string(),
            expected,
        })
}

/// Look up an optional element by id.
///
/// A blank id, a missing element, or an element of the wrong type all
/// yield `None`.
pub fn optional_element<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    if id.trim().is_empty() {
        return None;
    }
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Show or hide an element through its inline `display` style.
///
/// Showing uses `block`, matching how the prompt is laid out by the page.
pub fn set_visible(element: &HtmlElement, visible: bool) {
    let display = if visible { "block" } else { "none" };
    let _ = element.style().set_property("display", display);
}

/// Add or remove a CSS class.
pub fn toggle_class(element: &HtmlElement, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

/// Extract a human-readable message from a thrown JS value.
///
/// Handles plain strings and `Error`-like objects with a `message`
/// property, falling back to the debug representation.
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    Reflect::get(value, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
