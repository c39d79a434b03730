//! Bridge to the host page's Mermaid renderer.
//!
//! The renderer is a page-level global loaded by the host, not a Rust
//! dependency. Both entry points are declared `catch` so a missing library
//! or a failed render comes back as an error value instead of an uncaught
//! throw; the viewer replaces the diagram with an inline message and the
//! rest of the page is unaffected.

use js_sys::{Array, Object, Promise, Reflect};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = mermaid, js_name = initialize)]
    fn mermaid_initialize(config: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = mermaid, js_name = run)]
    fn mermaid_run(config: &JsValue) -> Result<Promise, JsValue>;
}

/// Failure modes of the render handoff.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The Mermaid global is missing or rejected its configuration.
    #[error("diagram renderer unavailable: {0}")]
    Unavailable(String),
    /// The renderer ran and reported a failure for this diagram.
    #[error("diagram render failed: {0}")]
    Render(String),
}

/// Markup shown in place of a diagram that failed to render.
pub const RENDER_ERROR_HTML: &str =
    r#"<p style="color: var(--color-neg); padding: 10px;">Error rendering diagram. Check browser console for details.</p>"#;

/// Human-readable form of a JS exception value.
pub(crate) fn describe_js(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn set_field(target: &Object, key: &str, value: &JsValue) -> Result<(), RenderError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(drop)
        .map_err(|err| RenderError::Unavailable(describe_js(&err)))
}

/// Configure the renderer once at boot.
///
/// `startOnLoad` is disabled — discovery decides what renders — and the
/// theme follows the host page's dark-mode signal.
pub fn initialize(dark: bool) -> Result<(), RenderError> {
    let config = Object::new();
    set_field(&config, "startOnLoad", &JsValue::FALSE)?;
    set_field(&config, "securityLevel", &JsValue::from_str("loose"))?;
    let theme = if dark { "dark" } else { "default" };
    set_field(&config, "theme", &JsValue::from_str(theme))?;
    mermaid_initialize(&config).map_err(|err| RenderError::Unavailable(describe_js(&err)))
}

/// Render the diagram source held by `node` in place.
///
/// Resolves when the renderer has replaced the node's text with a graphic;
/// any rejection (parse error, renderer missing) is mapped to a
/// [`RenderError`].
pub async fn run(node: &Element) -> Result<(), RenderError> {
    let nodes = Array::new();
    nodes.push(node.as_ref());
    let config = Object::new();
    set_field(&config, "nodes", nodes.as_ref())?;
    let promise = mermaid_run(&config).map_err(|err| RenderError::Unavailable(describe_js(&err)))?;
    JsFuture::from(promise)
        .await
        .map(drop)
        .map_err(|err| RenderError::Render(describe_js(&err)))
}
