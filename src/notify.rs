//! User-facing notifications via the host page's event bus.
//!
//! The wiki exposes a global `$events.emit(kind, message)` toast hook. The
//! hook is optional; when it is absent the message goes to the console log
//! instead.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// Notification severity, mapped to the host bus event name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Success,
    Error,
}

impl Kind {
    fn event_name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Show `message` to the user through `window.$events`, falling back to the
/// console log when the host bus is missing.
pub fn notify(kind: Kind, message: &str) {
    if emit_to_host(kind, message) {
        return;
    }
    match kind {
        Kind::Success => log::info!("{message}"),
        Kind::Error => log::error!("{message}"),
    }
}

fn emit_to_host(kind: Kind, message: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(bus) = Reflect::get(window.as_ref(), &JsValue::from_str("$events")) else {
        return false;
    };
    if bus.is_undefined() || bus.is_null() {
        return false;
    }
    let Ok(emit) = Reflect::get(&bus, &JsValue::from_str("emit")) else {
        return false;
    };
    let Some(emit) = emit.dyn_ref::<Function>() else {
        return false;
    };
    emit.call2(
        &bus,
        &JsValue::from_str(kind.event_name()),
        &JsValue::from_str(message),
    )
    .is_ok()
}
