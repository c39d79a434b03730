//! Viewer control buttons and the interaction lock affordance.

#[cfg(test)]
#[path = "controls_test.rs"]
mod controls_test;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::consts::css;

/// Whether manual pan/zoom input is accepted.
///
/// Buttons keep working in either state; the lock only gates wheel and drag
/// input. Each state carries the presentation the toggle button shows while
/// it is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockState {
    /// Wheel and drag input ignored.
    #[default]
    Locked,
    /// Full manual interaction.
    Unlocked,
}

impl LockState {
    /// The opposite state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Locked => Self::Unlocked,
            Self::Unlocked => Self::Locked,
        }
    }

    /// Icon class shown on the toggle button in this state.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Locked => css::LOCK_ICON,
            Self::Unlocked => css::UNLOCK_ICON,
        }
    }

    /// Toggle button tooltip in this state.
    #[must_use]
    pub fn button_title(self) -> &'static str {
        match self {
            Self::Locked => "Enable manual interaction",
            Self::Unlocked => "Disable manual interaction",
        }
    }

    /// `aria-pressed` value for the toggle button.
    #[must_use]
    pub fn aria_pressed(self) -> &'static str {
        match self {
            Self::Locked => "false",
            Self::Unlocked => "true",
        }
    }

    #[must_use]
    pub fn is_unlocked(self) -> bool {
        matches!(self, Self::Unlocked)
    }
}

/// Build one control button with an `aria-hidden` icon child.
pub fn create_button(
    document: &Document,
    title: &str,
    icon_class: &str,
    extra_classes: &[&str],
) -> Result<HtmlElement, JsValue> {
    let button: HtmlElement = document
        .create_element("button")?
        .dyn_into()
        .map_err(JsValue::from)?;
    button.set_attribute("type", "button")?;
    let mut class = String::from(css::BUTTON_BASE);
    for extra in extra_classes {
        class.push(' ');
        class.push_str(extra);
    }
    button.set_class_name(&class);
    button.set_title(title);
    let icon = document.create_element("i")?;
    icon.set_class_name(icon_class);
    icon.set_attribute("aria-hidden", "true")?;
    button.append_child(&icon)?;
    Ok(button)
}
