//! Page-embedded viewer options.
//!
//! A page can tune the zoom range by embedding a JSON block next to its
//! content (see [`crate::consts::CONFIG_SELECTOR`]). Anything malformed or
//! out of range is logged and replaced with the built-in defaults; a broken
//! config block must never take the viewers down with it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{ZOOM_INCREMENT, ZOOM_MAX, ZOOM_MIN};
use crate::zoom::ZoomTable;

/// Render theme forced by configuration instead of the page signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeOverride {
    /// Light renderer theme.
    Default,
    /// Dark renderer theme.
    Dark,
}

/// Options read from the optional embedded config block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewerOptions {
    /// Smallest allowed scale factor.
    pub min_zoom: f64,
    /// Largest allowed scale factor.
    pub max_zoom: f64,
    /// Distance between adjacent zoom levels.
    pub zoom_increment: f64,
    /// Force a render theme instead of following the page's dark-mode class.
    pub theme: Option<ThemeOverride>,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            min_zoom: ZOOM_MIN,
            max_zoom: ZOOM_MAX,
            zoom_increment: ZOOM_INCREMENT,
            theme: None,
        }
    }
}

impl ViewerOptions {
    /// Parse options from embedded JSON, falling back to the defaults on
    /// malformed input or a zoom range [`ZoomTable::new`] rejects.
    #[must_use]
    pub fn from_json(text: &str) -> Self {
        match serde_json::from_str::<Self>(text) {
            Ok(options) if options.zoom_table().is_some() => options,
            Ok(options) => {
                log::warn!("ignoring viewer config with invalid zoom range: {options:?}");
                Self::default()
            }
            Err(err) => {
                log::warn!("ignoring malformed viewer config: {err}");
                Self::default()
            }
        }
    }

    /// The zoom table these options describe.
    #[must_use]
    pub fn zoom_table(&self) -> Option<ZoomTable> {
        ZoomTable::new(self.min_zoom, self.max_zoom, self.zoom_increment)
    }
}
