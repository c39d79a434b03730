//! Shared numeric constants and the CSS class contract for the viewer.

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest allowed scale factor.
pub const ZOOM_MIN: f64 = 0.5;

/// Largest allowed scale factor.
pub const ZOOM_MAX: f64 = 2.0;

/// Distance between adjacent zoom levels.
pub const ZOOM_INCREMENT: f64 = 0.1;

/// Scale the viewer starts at and returns to on reset.
pub const DEFAULT_SCALE: f64 = 1.0;

/// Tolerance used to locate [`DEFAULT_SCALE`] in the level table.
pub const DEFAULT_SCALE_EPSILON: f64 = 1e-9;

// ── Interaction ─────────────────────────────────────────────────

/// Pointer displacement (either axis, strictly greater) that turns a press
/// into a pan instead of a click.
pub const DRAG_THRESHOLD_PX: f64 = 3.0;

// ── Timing ──────────────────────────────────────────────────────

/// How long the `zooming` transition class stays on the content layer.
pub const ZOOM_CLASS_TIMEOUT_MS: u32 = 200;

/// Settle delay before the post-load recenter pass.
pub const LOAD_RECENTER_DELAY_MS: u32 = 100;

// ── Discovery ───────────────────────────────────────────────────

/// Where diagram source blocks live in the host page.
pub const DIAGRAM_BLOCK_SELECTOR: &str = ".content-wrap > .page-content pre code.language-mermaid";

/// Dataset key marking a code block that already has a viewer.
pub const INITIALIZED_MARKER: &str = "mermaidViewerInitialized";

/// Optional embedded configuration block.
pub const CONFIG_SELECTOR: &str = "script[type=\"application/json\"][data-merview-config]";

/// Host page class signalling dark mode, read once at boot.
pub const DARK_MODE_CLASS: &str = "dark-mode";

// ── CSS contract ────────────────────────────────────────────────
//
// These names are the only coupling to the paired stylesheet and must stay
// exactly as written.

pub mod css {
    pub const CONTAINER: &str = "mermaid-container";
    pub const VIEWPORT: &str = "mermaid-viewport";
    pub const CONTENT: &str = "mermaid-content";
    pub const DIAGRAM: &str = "mermaid-diagram";
    pub const CONTROLS: &str = "mermaid-controls";
    pub const ZOOM_CONTROLS: &str = "mermaid-zoom-controls";
    pub const INTERACTION_ENABLED: &str = "interaction-enabled";
    pub const DRAGGING: &str = "dragging";
    pub const ZOOMING: &str = "zooming";
    pub const INTERACTIVE_HOVER: &str = "interactive-hover";
    pub const INTERACTIVE_PAN: &str = "interactive-pan";
    pub const BUTTON_BASE: &str = "mermaid-viewer-button-base";
    pub const BUTTON: &str = "mermaid-btn";
    pub const TOGGLE_BUTTON: &str = "toggle-interaction";
    pub const ZOOM_BUTTON: &str = "mermaid-zoom-btn";
    pub const ZOOM_IN_BUTTON: &str = "zoom-in";
    pub const ZOOM_OUT_BUTTON: &str = "zoom-out";
    pub const ZOOM_RESET_BUTTON: &str = "zoom-reset";
    pub const LOCK_ICON: &str = "fa fa-lock";
    pub const UNLOCK_ICON: &str = "fa fa-unlock";
    pub const COPY_ICON: &str = "fa fa-copy";
    pub const ZOOM_IN_ICON: &str = "fa fa-search-plus";
    pub const ZOOM_OUT_ICON: &str = "fa fa-search-minus";
    pub const ZOOM_RESET_ICON: &str = "fa fa-refresh";
}
