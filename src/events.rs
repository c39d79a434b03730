//! Event subscriptions with atomic teardown.
//!
//! Every listener a viewer owns is registered against one `AbortSignal`,
//! and the backing closure is retained here so it outlives the registration.
//! Aborting the controller revokes all bindings in one step, so no listener
//! fires once teardown has begun; dropping the handle aborts as well.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AbortController, AddEventListenerOptions, Event, EventTarget};

/// Registration options beyond the defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListenOptions {
    /// Register in the capture phase.
    pub capture: bool,
    /// Override the platform's passive default. Wheel listeners need
    /// `Some(false)` to be allowed to call `preventDefault`.
    pub passive: Option<bool>,
}

impl ListenOptions {
    /// Capture-phase registration.
    #[must_use]
    pub fn capture() -> Self {
        Self { capture: true, passive: None }
    }

    /// Explicitly non-passive registration.
    #[must_use]
    pub fn active() -> Self {
        Self { capture: false, passive: Some(false) }
    }
}

type Handler = Closure<dyn FnMut(Event)>;

/// Owner of one instance's event listener registrations.
pub struct EventBindings {
    controller: AbortController,
    handlers: Vec<Handler>,
}

impl EventBindings {
    pub fn new() -> Result<Self, JsValue> {
        Ok(Self {
            controller: AbortController::new()?,
            handlers: Vec::new(),
        })
    }

    /// Attach `handler` to `target` until [`abort`](Self::abort).
    pub fn listen(
        &mut self,
        target: &EventTarget,
        kind: &str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), JsValue> {
        self.listen_with(target, kind, ListenOptions::default(), handler)
    }

    /// [`listen`](Self::listen) with explicit phase/passivity options.
    pub fn listen_with(
        &mut self,
        target: &EventTarget,
        kind: &str,
        options: ListenOptions,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), JsValue> {
        let closure: Handler = Closure::new(handler);
        let registration = AddEventListenerOptions::new();
        registration.set_signal(&self.controller.signal());
        if options.capture {
            registration.set_capture(true);
        }
        if let Some(passive) = options.passive {
            registration.set_passive(passive);
        }
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &registration,
        )?;
        self.handlers.push(closure);
        Ok(())
    }

    /// Revoke every registration at once. Idempotent.
    pub fn abort(&self) {
        self.controller.abort();
    }
}

impl Drop for EventBindings {
    fn drop(&mut self) {
        self.abort();
    }
}
