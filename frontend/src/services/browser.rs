//! Browser helpers: clipboard writes and client-side file downloads.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::types::{AppError, AppResult};

fn js_error(context: &str, err: JsValue) -> AppError {
    let detail = js_sys::Reflect::get(&err, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));
    AppError::Browser(format!("{}: {}", context, detail))
}

/// Write `text` to the system clipboard via `navigator.clipboard.writeText`.
pub async fn copy_to_clipboard(text: &str) -> AppResult<()> {
    let window = web_sys::window().ok_or_else(|| AppError::Browser("no global window".to_string()))?;
    let navigator = window.navigator();

    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|e| js_error("clipboard unavailable", e))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(AppError::Browser("clipboard API not available".to_string()));
    }

    let write_text: js_sys::Function = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|e| js_error("writeText unavailable", e))?
        .dyn_into()
        .map_err(|e| js_error("writeText is not a function", e))?;

    let promise: js_sys::Promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| js_error("writeText failed", e))?
        .dyn_into()
        .map_err(|e| js_error("writeText did not return a promise", e))?;

    JsFuture::from(promise)
        .await
        .map_err(|e| js_error("clipboard write rejected", e))?;
    Ok(())
}

/// Offer `contents` as a file download named `filename`.
pub fn download_text(contents: &str, filename: &str, mime_type: &str) -> AppResult<()> {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| js_error("failed to create Blob", e))?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| js_error("failed to create object URL", e))?;

    let document = gloo_utils::document();
    let result = (|| -> AppResult<()> {
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|e| js_error("failed to create anchor", e))?
            .dyn_into()
            .map_err(|_| AppError::Browser("anchor is not an HtmlAnchorElement".to_string()))?;
        anchor.set_href(&url);
        anchor.set_download(filename);

        let body = gloo_utils::body();
        body.append_child(&anchor)
            .map_err(|e| js_error("failed to attach anchor", e))?;
        anchor.click();
        body.remove_child(&anchor)
            .map_err(|e| js_error("failed to detach anchor", e))?;
        Ok(())
    })();

    // Always release the blob, even if the click failed.
    let _ = Url::revoke_object_url(&url);
    result
}
