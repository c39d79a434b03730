//! Page discovery: swap Mermaid code blocks for interactive viewers.
//!
//! The mount layer owns the page-wide concerns: finding un-initialized
//! diagram blocks, sizing a placeholder container so the swap causes no
//! layout jump, keeping the registry of live viewers, and recentering all
//! of them on window load and resize.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::config::{ThemeOverride, ViewerOptions};
use crate::consts::{
    CONFIG_SELECTOR, DARK_MODE_CLASS, DIAGRAM_BLOCK_SELECTOR, INITIALIZED_MARKER,
    LOAD_RECENTER_DELAY_MS,
};
use crate::events::EventBindings;
use crate::registry::Registry;
use crate::render::{self, describe_js};
use crate::viewer::Viewer;

thread_local! {
    /// Live viewers on this page. Inserted on mount, drained on teardown.
    static VIEWERS: RefCell<Registry<Viewer>> = RefCell::new(Registry::new());
    /// Listener registrations owned by the mount layer itself.
    static PAGE_BINDINGS: RefCell<Option<EventBindings>> = const { RefCell::new(None) };
}

/// Wire the page: read the embedded config, configure the renderer from the
/// host theme signal, mount existing diagram blocks, and keep every viewer
/// centered across load/resize.
pub fn boot() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let options = read_options(&document);
    let dark = match options.theme {
        Some(ThemeOverride::Dark) => true,
        Some(ThemeOverride::Default) => false,
        None => page_prefers_dark(&document),
    };
    if let Err(err) = render::initialize(dark) {
        // Keep mounting: each viewer will surface its own inline error.
        log::error!("{err}");
    }

    let mut bindings = EventBindings::new()?;
    if document.ready_state() == "loading" {
        let doc = document.clone();
        let opts = options.clone();
        bindings.listen(&document, "DOMContentLoaded", move |_| {
            mount_all(&doc, &opts);
        })?;
    } else {
        mount_all(&document, &options);
    }
    bindings.listen(&window, "load", move |_| {
        Timeout::new(LOAD_RECENTER_DELAY_MS, recenter_all).forget();
    })?;
    bindings.listen(&window, "resize", move |_| recenter_all())?;
    PAGE_BINDINGS.with_borrow_mut(|slot| *slot = Some(bindings));
    Ok(())
}

/// Recenter every live viewer against its current viewport geometry.
pub fn recenter_all() {
    VIEWERS.with_borrow(|live| {
        for viewer in live.iter() {
            viewer.recenter();
        }
    });
}

/// Destroy every live viewer and release the mount layer's own bindings.
///
/// Each viewer leaves the registry as it is destroyed, so a later
/// [`recenter_all`] touches nothing stale.
pub fn teardown() {
    VIEWERS.with_borrow_mut(|live| {
        for viewer in live.drain() {
            viewer.destroy();
        }
    });
    PAGE_BINDINGS.with_borrow_mut(|slot| {
        slot.take();
    });
}

fn read_options(document: &Document) -> ViewerOptions {
    let element = match document.query_selector(CONFIG_SELECTOR) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("config lookup failed: {}", describe_js(&err));
            None
        }
    };
    match element.and_then(|el| el.text_content()) {
        Some(text) if !text.trim().is_empty() => ViewerOptions::from_json(&text),
        _ => ViewerOptions::default(),
    }
}

/// The host theme signal, read once at boot.
fn page_prefers_dark(document: &Document) -> bool {
    document
        .document_element()
        .is_some_and(|root| root.class_list().contains(DARK_MODE_CLASS))
}

/// Find un-initialized diagram code blocks and swap in viewers.
fn mount_all(document: &Document, options: &ViewerOptions) {
    let blocks = match document.query_selector_all(DIAGRAM_BLOCK_SELECTOR) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("diagram discovery failed: {}", describe_js(&err));
            return;
        }
    };
    for index in 0..blocks.length() {
        let Some(node) = blocks.item(index) else {
            continue;
        };
        let Ok(code) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        if let Err(err) = mount_block(document, &code, options) {
            log::warn!("failed to mount diagram block: {}", describe_js(&err));
        }
    }
}

/// Replace one code block with a viewer container sized to the block's
/// measured height, so the swap does not shift the page.
fn mount_block(document: &Document, code: &HtmlElement, options: &ViewerOptions) -> Result<(), JsValue> {
    if code.dataset().get(INITIALIZED_MARKER).is_some() {
        return Ok(());
    }
    let source = code.text_content().unwrap_or_default();

    let target: HtmlElement = if code.tag_name() == "CODE" {
        match code.parent_element() {
            Some(parent) => parent.dyn_into().map_err(JsValue::from)?,
            None => code.clone(),
        }
    } else {
        code.clone()
    };
    if target.class_list().contains(crate::consts::css::CONTAINER) {
        return Ok(());
    }

    let container: HtmlElement = document
        .create_element("div")?
        .dyn_into()
        .map_err(JsValue::from)?;
    container.set_class_name(crate::consts::css::CONTAINER);
    let height = target.get_bounding_client_rect().height();
    container.style().set_property("height", &format!("{height}px"))?;

    target.after_with_node_1(&container)?;
    target.remove();

    let viewer = Viewer::new(&container, source, options)?;
    VIEWERS.with_borrow_mut(|live| live.insert(viewer));
    code.dataset().set(INITIALIZED_MARKER, "true")?;
    Ok(())
}
