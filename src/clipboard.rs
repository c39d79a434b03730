//! Clipboard write with a legacy fallback.
//!
//! The async clipboard API needs permission and a secure context, so a
//! rejection is expected on some hosts. The fallback routes through a
//! transient offscreen `<textarea>` and `document.execCommand("copy")`;
//! the element is removed again on every path.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlDocument, HtmlTextAreaElement};

use crate::render::describe_js;

/// Both copy strategies failed.
#[derive(Debug, Error)]
#[error("copy failed: {0}")]
pub struct CopyError(String);

/// Write `text` to the clipboard, trying the async API first.
pub async fn copy_text(document: &Document, text: &str) -> Result<(), CopyError> {
    match clipboard_write(document, text).await {
        Ok(()) => Ok(()),
        Err(err) => {
            log::warn!(
                "clipboard API copy failed, attempting fallback: {}",
                describe_js(&err)
            );
            fallback_copy(document, text)
        }
    }
}

async fn clipboard_write(document: &Document, text: &str) -> Result<(), JsValue> {
    let window = document
        .default_view()
        .ok_or_else(|| JsValue::from_str("document is not attached to a window"))?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await.map(drop)
}

fn fallback_copy(document: &Document, text: &str) -> Result<(), CopyError> {
    let body = document
        .body()
        .ok_or_else(|| CopyError("document has no body".into()))?;
    let area: HtmlTextAreaElement = document
        .create_element("textarea")
        .map_err(|err| CopyError(describe_js(&err)))?
        .dyn_into()
        .map_err(|_| CopyError("textarea element has an unexpected type".into()))?;
    area.set_value(text);
    let style = area.style();
    for (property, value) in [("position", "fixed"), ("top", "-9999px"), ("left", "-9999px")] {
        if let Err(err) = style.set_property(property, value) {
            log::warn!("failed to style fallback textarea: {}", describe_js(&err));
        }
    }
    body.append_child(&area)
        .map_err(|err| CopyError(describe_js(&err)))?;
    area.select();
    let copied = document.unchecked_ref::<HtmlDocument>().exec_command("copy");
    // The transient element must not survive the attempt on any path.
    if let Err(err) = body.remove_child(&area) {
        log::warn!("failed to remove fallback textarea: {}", describe_js(&err));
    }
    match copied {
        Ok(true) => Ok(()),
        Ok(false) => Err(CopyError("execCommand copy was refused".into())),
        Err(err) => Err(CopyError(describe_js(&err))),
    }
}
