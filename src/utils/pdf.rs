//! First-page PDF rendering through PDF.js.
//!
//! PDF.js is loaded by the page as a regular script; this module reaches it
//! through `Reflect`, the same way other page globals are accessed.

use js_sys::{Array, Function, Object, Promise, Reflect, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlCanvasElement;

use dropstage_core::PreviewError;

use super::dom::{self, describe_js_error};
use crate::config::PDFJS_GLOBALS;

/// Get the PDF.js library object exposed on `window`.
fn pdfjs() -> Result<Object, PreviewError> {
    let window = dom::window().ok_or(PreviewError::NoWindow)?;
    PDFJS_GLOBALS
        .iter()
        .filter_map(|name| Reflect::get(&window, &(*name).into()).ok())
        .find(|v| v.is_object())
        .map(|v| v.unchecked_into::<Object>())
        .ok_or(PreviewError::PdfLibraryUnavailable)
}

/// Call `target[name](...args)`.
fn call_method(target: &JsValue, name: &str, args: &Array) -> Result<JsValue, JsValue> {
    let method = Reflect::get(target, &name.into())?.dyn_into::<Function>()?;
    method.apply(target, args)
}

/// Await a promise-like value: either a `Promise` or an object with a
/// `promise` property (PDF.js loading and render tasks).
async fn settle(value: JsValue) -> Result<JsValue, JsValue> {
    let promise = if value.is_instance_of::<Promise>() {
        value.unchecked_into::<Promise>()
    } else {
        Reflect::get(&value, &"promise".into())?.dyn_into::<Promise>()?
    };
    JsFuture::from(promise).await
}

/// Build a plain JS object from key/value pairs.
fn js_object(entries: &[(&str, &JsValue)]) -> Result<Object, JsValue> {
    let object = Object::new();
    for (key, value) in entries {
        Reflect::set(&object, &(*key).into(), value)?;
    }
    Ok(object)
}

/// Render page 1 of a PDF onto a new, detached canvas.
///
/// The canvas is returned only after PDF.js finished drawing, so callers
/// never mount a partially rendered page.
pub async fn render_first_page(bytes: &[u8], scale: f64) -> Result<HtmlCanvasElement, PreviewError> {
    let lib = pdfjs()?;
    let data = Uint8Array::from(bytes);

    let loading = call_method(&lib, "getDocument", &Array::of1(&data))
        .map_err(|e| PreviewError::PdfLoad(describe_js_error(&e)))?;
    let document = settle(loading)
        .await
        .map_err(|e| PreviewError::PdfLoad(describe_js_error(&e)))?;

    let page = call_method(&document, "getPage", &Array::of1(&JsValue::from(1)))
        .map_err(|e| PreviewError::PdfLoad(describe_js_error(&e)))?;
    let page = settle(page)
        .await
        .map_err(|e| PreviewError::PdfLoad(describe_js_error(&e)))?;

    let render_err = |e: JsValue| PreviewError::PdfRender(describe_js_error(&e));

    let options = js_object(&[("scale", &JsValue::from(scale))]).map_err(render_err)?;
    let viewport = call_method(&page, "getViewport", &Array::of1(&options)).map_err(render_err)?;
    let width = Reflect::get(&viewport, &"width".into())
        .map_err(render_err)?
        .as_f64()
        .unwrap_or_default();
    let height = Reflect::get(&viewport, &"height".into())
        .map_err(render_err)?
        .as_f64()
        .unwrap_or_default();

    let canvas = dom::document()
        .ok_or(PreviewError::NoWindow)?
        .create_element("canvas")
        .map_err(|_| PreviewError::Canvas)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| PreviewError::Canvas)?;
    canvas.set_width(width.ceil() as u32);
    canvas.set_height(height.ceil() as u32);

    let context: JsValue = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .ok_or(PreviewError::Canvas)?
        .into();

    let render_context = js_object(&[("canvasContext", &context), ("viewport", &viewport)])
        .map_err(render_err)?;
    let task = call_method(&page, "render", &Array::of1(&render_context)).map_err(render_err)?;
    settle(task).await.map_err(render_err)?;

    Ok(canvas)
}
