//! Per-diagram viewer: transform state plus the DOM shell around it.
//!
//! [`ViewerCore`] owns every piece of interactive state — the zoom table,
//! the content transform, the pan gesture, and the interaction lock — and
//! is separated from [`Viewer`] so it can be tested without WASM/browser
//! dependencies. [`Viewer`] owns the elements, the event bindings, and the
//! asynchronous render handoff.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::{Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Element, HtmlElement, MouseEvent, SvgsvgElement, WheelEvent};

use crate::clipboard;
use crate::config::ViewerOptions;
use crate::consts::{css, ZOOM_CLASS_TIMEOUT_MS};
use crate::controls::{create_button, LockState};
use crate::drag::DragState;
use crate::events::{EventBindings, ListenOptions};
use crate::notify;
use crate::render::{self, describe_js};
use crate::transform::{Point, Rect, Size, Transform};
use crate::zoom::{ZoomDirection, ZoomTable};

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

/// Interactive state of one diagram, independent of the DOM.
#[derive(Debug, Clone)]
pub struct ViewerCore {
    zoom: ZoomTable,
    zoom_index: usize,
    /// Current content-layer transform.
    pub transform: Transform,
    drag: DragState,
    interaction_enabled: bool,
    /// The content layer's untransformed offset within the viewport,
    /// captured once after render.
    pub initial_offset: Point,
    /// Intrinsic size of the rendered graphic; `None` until a render
    /// succeeds, which makes centering a no-op.
    graphic: Option<Size>,
}

impl ViewerCore {
    #[must_use]
    pub fn new(zoom: ZoomTable) -> Self {
        let zoom_index = zoom.default_index();
        let scale = zoom.value(zoom_index);
        Self {
            zoom,
            zoom_index,
            transform: Transform { scale, x: 0.0, y: 0.0 },
            drag: DragState::default(),
            interaction_enabled: false,
            initial_offset: Point::default(),
            graphic: None,
        }
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale
    }

    #[must_use]
    pub fn zoom_index(&self) -> usize {
        self.zoom_index
    }

    #[must_use]
    pub fn interaction_enabled(&self) -> bool {
        self.interaction_enabled
    }

    #[must_use]
    pub fn drag(&self) -> DragState {
        self.drag
    }

    #[must_use]
    pub fn graphic(&self) -> Option<Size> {
        self.graphic
    }

    /// Record the rendered graphic's intrinsic size; enables centering.
    pub fn set_graphic(&mut self, size: Size) {
        self.graphic = Some(size);
    }

    /// Step one zoom level, re-anchoring the translation so the content
    /// under `anchor` stays put. Out-of-range steps are ignored.
    ///
    /// Returns whether the transform changed.
    pub fn step_zoom(&mut self, direction: ZoomDirection, anchor: Point, viewport: Rect) -> bool {
        let Some(next) = self.zoom.step(self.zoom_index, direction) else {
            return false;
        };
        self.zoom_index = next;
        let new_scale = self.zoom.value(next);
        self.transform = self.transform.rescaled_about(new_scale, anchor, viewport.origin());
        true
    }

    /// Return to the default zoom level. Translation is left alone; callers
    /// recenter separately once layout has settled.
    pub fn reset_scale(&mut self) {
        self.zoom_index = self.zoom.default_index();
        self.transform.scale = self.zoom.value(self.zoom_index);
    }

    /// Center the rendered graphic in `viewport`; no-op without a graphic.
    ///
    /// Returns whether a translation was computed.
    pub fn center(&mut self, viewport: Size) -> bool {
        let Some(graphic) = self.graphic else {
            return false;
        };
        let translation =
            Transform::centered(viewport, graphic, self.transform.scale, self.initial_offset);
        self.transform.x = translation.x;
        self.transform.y = translation.y;
        true
    }

    /// Primary-button press at `pointer`; refused while interaction is
    /// locked.
    pub fn pointer_down(&mut self, pointer: Point) -> bool {
        if !self.interaction_enabled {
            return false;
        }
        self.drag.press(pointer, Point::new(self.transform.x, self.transform.y));
        true
    }

    /// Pointer motion; returns whether the translation changed.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        match self.drag.motion(pointer) {
            Some(translation) => {
                self.transform.x = translation.x;
                self.transform.y = translation.y;
                true
            }
            None => false,
        }
    }

    /// Pointer release, wherever it lands; returns whether a pan session
    /// had actually started.
    pub fn pointer_up(&mut self) -> bool {
        self.drag.release()
    }

    /// Enable or disable wheel/drag interaction; disabling cancels any
    /// in-flight pan. Button-driven zoom is unaffected by this flag.
    pub fn set_interaction(&mut self, enabled: bool) {
        self.interaction_enabled = enabled;
        if !enabled {
            self.drag.cancel();
        }
    }
}

/// State shared between the viewer and its event closures.
struct ViewerShared {
    core: RefCell<ViewerCore>,
    source: String,
    document: Document,
    container: HtmlElement,
    viewport: HtmlElement,
    content: HtmlElement,
    diagram: HtmlElement,
    toggle_btn: HtmlElement,
    toggle_icon: Element,
    lock: Cell<LockState>,
    zoom_timer: RefCell<Option<Timeout>>,
}

impl ViewerShared {
    fn viewport_rect(&self) -> Rect {
        let rect = self.viewport.get_bounding_client_rect();
        Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    fn apply_transform(&self) -> Result<(), JsValue> {
        let value = self.core.borrow().transform.to_css();
        self.content.style().set_property("transform", &value)
    }

    /// Put the transition class on the content layer for a short window.
    /// Every call restarts the timer; the class comes off once, after the
    /// last zoom.
    fn flash_zoom_class(&self) {
        if let Err(err) = self.content.class_list().add_1(css::ZOOMING) {
            log::warn!("failed to add zooming class: {}", describe_js(&err));
        }
        let content = self.content.clone();
        let timer = Timeout::new(ZOOM_CLASS_TIMEOUT_MS, move || {
            if let Err(err) = content.class_list().remove_1(css::ZOOMING) {
                log::warn!("failed to remove zooming class: {}", describe_js(&err));
            }
        });
        *self.zoom_timer.borrow_mut() = Some(timer);
    }

    fn zoom_at(&self, direction: ZoomDirection, anchor: Point) -> Result<(), JsValue> {
        self.flash_zoom_class();
        let viewport = self.viewport_rect();
        let changed = self.core.borrow_mut().step_zoom(direction, anchor, viewport);
        if changed {
            self.apply_transform()?;
        }
        Ok(())
    }

    /// Button zoom: anchored at the viewport's geometric center, live even
    /// while interaction is locked.
    fn handle_zoom_click(&self, direction: ZoomDirection) -> Result<(), JsValue> {
        let anchor = self.viewport_rect().center();
        self.zoom_at(direction, anchor)
    }

    /// Wheel zoom: anchored at the cursor, gated on the interaction lock.
    fn handle_wheel(&self, event: &WheelEvent) -> Result<(), JsValue> {
        if !self.core.borrow().interaction_enabled() {
            return Ok(());
        }
        event.prevent_default();
        let direction = if event.delta_y() > 0.0 { ZoomDirection::Out } else { ZoomDirection::In };
        let anchor = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
        self.zoom_at(direction, anchor)
    }

    fn handle_mouse_down(&self, event: &MouseEvent) -> Result<(), JsValue> {
        if event.button() != 0 {
            return Ok(());
        }
        let pointer = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
        if !self.core.borrow_mut().pointer_down(pointer) {
            return Ok(());
        }
        event.prevent_default();
        let classes = self.viewport.class_list();
        classes.add_1(css::DRAGGING)?;
        classes.remove_1(css::INTERACTIVE_HOVER)?;
        classes.add_1(css::INTERACTIVE_PAN)?;
        self.content.class_list().remove_1(css::ZOOMING)?;
        Ok(())
    }

    fn handle_mouse_move(&self, event: &MouseEvent) -> Result<(), JsValue> {
        let pointer = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
        let moved = self.core.borrow_mut().pointer_move(pointer);
        if moved {
            event.prevent_default();
            self.apply_transform()?;
        }
        Ok(())
    }

    /// Observed at window scope so a release outside the viewport still ends
    /// the session. The transform is reapplied once more with the final
    /// values even when move events were throttled.
    fn handle_mouse_up(&self) -> Result<(), JsValue> {
        let (was_active, interactive) = {
            let mut core = self.core.borrow_mut();
            let was_active = core.drag().is_active();
            core.pointer_up();
            (was_active, core.interaction_enabled())
        };
        if was_active {
            let classes = self.viewport.class_list();
            classes.remove_1(css::DRAGGING)?;
            classes.remove_1(css::INTERACTIVE_PAN)?;
            if interactive {
                classes.add_1(css::INTERACTIVE_HOVER)?;
            }
        }
        self.apply_transform()
    }

    fn toggle_interaction(&self) -> Result<(), JsValue> {
        let state = self.lock.get().toggled();
        self.lock.set(state);
        let unlocked = state.is_unlocked();
        self.core.borrow_mut().set_interaction(unlocked);
        self.toggle_icon.set_class_name(state.icon_class());
        self.toggle_btn.set_title(state.button_title());
        self.toggle_btn.set_attribute("aria-pressed", state.aria_pressed())?;
        let classes = self.viewport.class_list();
        if unlocked {
            classes.add_1(css::INTERACTION_ENABLED)?;
            classes.add_1(css::INTERACTIVE_HOVER)?;
            classes.remove_1(css::INTERACTIVE_PAN)?;
        } else {
            classes.remove_1(css::INTERACTION_ENABLED)?;
            classes.remove_1(css::INTERACTIVE_HOVER)?;
            classes.remove_1(css::INTERACTIVE_PAN)?;
            classes.remove_1(css::DRAGGING)?;
        }
        Ok(())
    }

    fn should_block_selection(&self) -> bool {
        let core = self.core.borrow();
        core.drag().is_active() || core.interaction_enabled()
    }

    /// Reset to the default level, then recenter on the next tick once
    /// layout has settled.
    fn handle_reset(shared: &Rc<Self>) {
        shared.flash_zoom_class();
        shared.core.borrow_mut().reset_scale();
        let shared = Rc::clone(shared);
        Timeout::new(0, move || {
            if let Err(err) = shared.recenter() {
                log::warn!("recenter after reset failed: {}", describe_js(&err));
            }
        })
        .forget();
    }

    fn copy_code(shared: &Rc<Self>) {
        let shared = Rc::clone(shared);
        spawn_local(async move {
            match clipboard::copy_text(&shared.document, &shared.source).await {
                Ok(()) => notify::notify(notify::Kind::Success, "Copied!"),
                Err(err) => {
                    log::error!("{err}");
                    notify::notify(notify::Kind::Error, "Copy failed.");
                }
            }
        });
    }

    /// Recenter the graphic; skipped entirely while no graphic exists.
    fn recenter(&self) -> Result<(), JsValue> {
        let viewport = self.viewport_rect().size();
        let centered = self.core.borrow_mut().center(viewport);
        if centered {
            self.apply_transform()?;
        }
        Ok(())
    }

    fn spawn_render(shared: &Rc<Self>) {
        let shared = Rc::clone(shared);
        spawn_local(async move {
            wait_for_icon_font(&shared.document).await;
            match render::run(&shared.diagram).await {
                Ok(()) => {
                    if let Err(err) = shared.finish_render() {
                        log::warn!("diagram layout after render failed: {}", describe_js(&err));
                    }
                }
                Err(err) => {
                    log::error!("mermaid rendering error for diagram: {}: {err}", shared.source);
                    shared.diagram.set_inner_html(render::RENDER_ERROR_HTML);
                }
            }
        });
    }

    fn finish_render(&self) -> Result<(), JsValue> {
        self.adjust_container_height()?;
        self.capture_initial_offset()?;
        if let Some(size) = self.measure_graphic()? {
            self.core.borrow_mut().set_graphic(size);
        }
        self.recenter()
    }

    /// Let the viewport take over from the placeholder height the mount
    /// layer put on the container, one frame later to avoid a visible jump.
    fn adjust_container_height(&self) -> Result<(), JsValue> {
        if self.content.query_selector("svg")?.is_some() {
            self.viewport.style().set_property("height", "100%")?;
        }
        let container = self.container.clone();
        Timeout::new(0, move || {
            if let Err(err) = container.style().remove_property("height") {
                log::warn!("failed to release container height: {}", describe_js(&err));
            }
        })
        .forget();
        Ok(())
    }

    /// Measure the content layer's natural position with the transform
    /// temporarily cleared, so the reference frame is untransformed.
    fn capture_initial_offset(&self) -> Result<(), JsValue> {
        let style = self.content.style();
        let original = style.get_property_value("transform")?;
        style.set_property("transform", "")?;
        let content_rect = self.content.get_bounding_client_rect();
        let viewport_rect = self.viewport.get_bounding_client_rect();
        let offset = Point::new(
            content_rect.left() - viewport_rect.left(),
            content_rect.top() - viewport_rect.top(),
        );
        style.set_property("transform", &original)?;
        self.core.borrow_mut().initial_offset = offset;
        Ok(())
    }

    /// Intrinsic size of the rendered graphic, from its own coordinate
    /// system when available, falling back to the rendered pixel size.
    fn measure_graphic(&self) -> Result<Option<Size>, JsValue> {
        let Some(svg) = self.content.query_selector("svg")? else {
            return Ok(None);
        };
        let mut width = 0.0;
        let mut height = 0.0;
        if let Some(svg_element) = svg.dyn_ref::<SvgsvgElement>() {
            if let Some(view_box) = svg_element.view_box().base_val() {
                width = f64::from(view_box.width());
                height = f64::from(view_box.height());
            }
        }
        if width <= 0.0 {
            width = f64::from(svg.client_width());
        }
        if height <= 0.0 {
            height = f64::from(svg.client_height());
        }
        Ok(Some(Size::new(width, height)))
    }
}

/// Wait for the icon font before first render so glyph metrics are stable.
///
/// Feature-detected like the host page does it: when the Font Loading API
/// or its `ready` promise is unavailable, render immediately.
async fn wait_for_icon_font(document: &Document) {
    let fonts = document.fonts();
    if let Ok(true) = fonts.check("1em \"Font Awesome 6 Free\"") {
        return;
    }
    let Ok(ready) = Reflect::get(fonts.as_ref(), &JsValue::from_str("ready")) else {
        return;
    };
    let Ok(promise) = ready.dyn_into::<Promise>() else {
        return;
    };
    if JsFuture::from(promise).await.is_err() {
        log::debug!("font readiness wait failed; rendering anyway");
    }
}

/// One interactive diagram mounted in a container element.
pub struct Viewer {
    shared: Rc<ViewerShared>,
    bindings: EventBindings,
}

impl Viewer {
    /// Build the viewer chrome inside `container` and start rendering
    /// `source`.
    ///
    /// Returns before the render completes; the diagram is measured and
    /// centered once the renderer yields a graphic, and replaced with an
    /// inline error message when it fails.
    pub fn new(container: &HtmlElement, source: String, options: &ViewerOptions) -> Result<Self, JsValue> {
        let document = container
            .owner_document()
            .ok_or_else(|| JsValue::from_str("container is not attached to a document"))?;

        let toggle_btn = create_button(
            &document,
            "Toggle interaction",
            LockState::Locked.icon_class(),
            &[css::BUTTON, css::TOGGLE_BUTTON],
        )?;
        let copy_btn = create_button(&document, "Copy code", css::COPY_ICON, &[css::BUTTON])?;
        let controls = new_div(&document, css::CONTROLS)?;
        controls.append_child(&toggle_btn)?;
        controls.append_child(&copy_btn)?;

        let zoom_in_btn = create_button(
            &document,
            "Zoom in",
            css::ZOOM_IN_ICON,
            &[css::ZOOM_BUTTON, css::ZOOM_IN_BUTTON],
        )?;
        let zoom_out_btn = create_button(
            &document,
            "Zoom out",
            css::ZOOM_OUT_ICON,
            &[css::ZOOM_BUTTON, css::ZOOM_OUT_BUTTON],
        )?;
        let zoom_reset_btn = create_button(
            &document,
            "Reset",
            css::ZOOM_RESET_ICON,
            &[css::ZOOM_BUTTON, css::ZOOM_RESET_BUTTON],
        )?;
        let zoom_controls = new_div(&document, css::ZOOM_CONTROLS)?;
        zoom_controls.append_child(&zoom_in_btn)?;
        zoom_controls.append_child(&zoom_out_btn)?;
        zoom_controls.append_child(&zoom_reset_btn)?;

        let diagram = new_div(&document, css::DIAGRAM)?;
        diagram.set_text_content(Some(&source));
        let content = new_div(&document, css::CONTENT)?;
        content.append_child(&diagram)?;
        let viewport = new_div(&document, css::VIEWPORT)?;
        viewport.append_child(&content)?;

        container.set_inner_html("");
        container.append_child(&controls)?;
        container.append_child(&zoom_controls)?;
        container.append_child(&viewport)?;

        let toggle_icon = toggle_btn
            .query_selector("i")?
            .ok_or_else(|| JsValue::from_str("toggle button has no icon"))?;

        let core = ViewerCore::new(options.zoom_table().unwrap_or_default());
        let shared = Rc::new(ViewerShared {
            core: RefCell::new(core),
            source,
            document,
            container: container.clone(),
            viewport,
            content,
            diagram,
            toggle_btn,
            toggle_icon,
            lock: Cell::new(LockState::Locked),
            zoom_timer: RefCell::new(None),
        });

        let mut bindings = EventBindings::new()?;
        bind_events(&mut bindings, &shared, &copy_btn, &zoom_in_btn, &zoom_out_btn, &zoom_reset_btn)?;
        ViewerShared::spawn_render(&shared);

        Ok(Self { shared, bindings })
    }

    /// Re-run centering against the current viewport geometry.
    pub fn recenter(&self) {
        if let Err(err) = self.shared.recenter() {
            log::warn!("recenter failed: {}", describe_js(&err));
        }
    }

    /// Tear the viewer down: revoke every event binding through the shared
    /// cancellation token, drop pending timers, and empty the container.
    pub fn destroy(self) {
        self.bindings.abort();
        self.shared.zoom_timer.borrow_mut().take();
        self.shared.container.set_inner_html("");
    }
}

fn new_div(document: &Document, class: &str) -> Result<HtmlElement, JsValue> {
    let element: HtmlElement = document
        .create_element("div")?
        .dyn_into()
        .map_err(JsValue::from)?;
    element.set_class_name(class);
    Ok(element)
}

fn bind_events(
    bindings: &mut EventBindings,
    shared: &Rc<ViewerShared>,
    copy_btn: &HtmlElement,
    zoom_in_btn: &HtmlElement,
    zoom_out_btn: &HtmlElement,
    zoom_reset_btn: &HtmlElement,
) -> Result<(), JsValue> {
    let window = shared
        .document
        .default_view()
        .ok_or_else(|| JsValue::from_str("document is not attached to a window"))?;

    {
        let s = Rc::clone(shared);
        bindings.listen(&shared.toggle_btn, "click", move |_| {
            if let Err(err) = s.toggle_interaction() {
                log::warn!("interaction toggle failed: {}", describe_js(&err));
            }
        })?;
    }
    {
        let s = Rc::clone(shared);
        bindings.listen(copy_btn, "click", move |_| ViewerShared::copy_code(&s))?;
    }
    {
        let s = Rc::clone(shared);
        bindings.listen(zoom_in_btn, "click", move |_| {
            if let Err(err) = s.handle_zoom_click(ZoomDirection::In) {
                log::warn!("zoom in failed: {}", describe_js(&err));
            }
        })?;
    }
    {
        let s = Rc::clone(shared);
        bindings.listen(zoom_out_btn, "click", move |_| {
            if let Err(err) = s.handle_zoom_click(ZoomDirection::Out) {
                log::warn!("zoom out failed: {}", describe_js(&err));
            }
        })?;
    }
    {
        let s = Rc::clone(shared);
        bindings.listen(zoom_reset_btn, "click", move |_| ViewerShared::handle_reset(&s))?;
    }
    {
        let s = Rc::clone(shared);
        bindings.listen_with(&shared.viewport, "wheel", ListenOptions::active(), move |event| {
            let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                return;
            };
            if let Err(err) = s.handle_wheel(wheel) {
                log::warn!("wheel zoom failed: {}", describe_js(&err));
            }
        })?;
    }
    {
        let s = Rc::clone(shared);
        bindings.listen(&shared.viewport, "mousedown", move |event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            if let Err(err) = s.handle_mouse_down(mouse) {
                log::warn!("drag start failed: {}", describe_js(&err));
            }
        })?;
    }
    {
        let s = Rc::clone(shared);
        bindings.listen(&shared.document, "mousemove", move |event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            if let Err(err) = s.handle_mouse_move(mouse) {
                log::warn!("drag move failed: {}", describe_js(&err));
            }
        })?;
    }
    {
        let s = Rc::clone(shared);
        bindings.listen_with(&window, "mouseup", ListenOptions::capture(), move |_| {
            if let Err(err) = s.handle_mouse_up() {
                log::warn!("drag end failed: {}", describe_js(&err));
            }
        })?;
    }
    bindings.listen(&shared.viewport, "contextmenu", |event| {
        event.prevent_default();
    })?;
    {
        let s = Rc::clone(shared);
        bindings.listen(&shared.viewport, "selectstart", move |event| {
            if s.should_block_selection() {
                event.prevent_default();
            }
        })?;
    }
    Ok(())
}
