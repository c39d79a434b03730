//! Interactive pan/zoom viewer for Mermaid diagrams embedded in wiki pages.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It scans
//! a server-rendered page for fenced Mermaid code blocks, swaps each one
//! for a bounded viewport, hands the source text to the host page's Mermaid
//! library for rendering, and then owns everything interactive: discrete
//! zoom stepping anchored to the cursor, drag panning with a click-safe
//! threshold, centering, the interaction lock, copy-to-clipboard, and
//! teardown of every event binding per instance.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`viewer`] | Per-diagram [`viewer::ViewerCore`] state and the DOM shell |
//! | [`zoom`] | Discrete zoom level table |
//! | [`transform`] | Translation/scale math: anchored zoom and centering |
//! | [`drag`] | Pan gesture state machine |
//! | [`controls`] | Control buttons and the lock/unlock affordance |
//! | [`events`] | Listener registration with atomic teardown |
//! | [`registry`] | Registry of live instances for global recentering |
//! | [`render`] | Bridge to the host page's Mermaid renderer |
//! | [`clipboard`] | Clipboard write with a legacy fallback |
//! | [`notify`] | Host toast hook with a console fallback |
//! | [`mount`] | Block discovery and page-level wiring |
//! | [`config`] | Page-embedded options |
//! | [`consts`] | Shared constants and the CSS class contract |

pub mod clipboard;
pub mod config;
pub mod consts;
pub mod controls;
pub mod drag;
pub mod events;
pub mod mount;
pub mod notify;
pub mod registry;
pub mod render;
pub mod transform;
pub mod viewer;
pub mod zoom;

use wasm_bindgen::prelude::*;

/// Module entry point: set up logging and wire the page.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("merview: logger already initialized"));
    }
    mount::boot()
}

/// Destroy every mounted viewer, for hosts that replace page content
/// without a full navigation.
#[wasm_bindgen]
pub fn teardown() {
    mount::teardown();
}
