//! Content-layer transform: translation plus uniform scale.
//!
//! The coordinate frames in play:
//!
//! - **client** — page coordinates as reported by pointer events.
//! - **viewport** — client coordinates relative to the viewport's top-left
//!   corner.
//! - **content** — untransformed coordinates inside the content layer.
//!
//! The transform maps content space into viewport space by scaling about
//! the content origin and then translating.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

/// A point in client space, or a translation in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width/height pair in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A bounding rectangle in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Top-left corner in client space.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Geometric center in client space.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// The transform applied to the content layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Uniform scale factor.
    pub scale: f64,
    /// Horizontal translation in CSS pixels.
    pub x: f64,
    /// Vertical translation in CSS pixels.
    pub y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self { scale: 1.0, x: 0.0, y: 0.0 }
    }
}

impl Transform {
    /// Map a client-space point into untransformed content coordinates.
    #[must_use]
    pub fn client_to_content(&self, client: Point, viewport_origin: Point) -> Point {
        Point::new(
            (client.x - viewport_origin.x - self.x) / self.scale,
            (client.y - viewport_origin.y - self.y) / self.scale,
        )
    }

    /// Rescale about `anchor` so the content point currently under it keeps
    /// its screen position.
    #[must_use]
    pub fn rescaled_about(&self, new_scale: f64, anchor: Point, viewport_origin: Point) -> Self {
        let fixed = self.client_to_content(anchor, viewport_origin);
        Self {
            scale: new_scale,
            x: (anchor.x - viewport_origin.x) - fixed.x * new_scale,
            y: (anchor.y - viewport_origin.y) - fixed.y * new_scale,
        }
    }

    /// Translation placing the scaled graphic's center at the viewport's
    /// center, relative to the content layer's natural offset.
    ///
    /// Both components are floored at zero: centering never pulls content to
    /// a negative offset, only growth beyond the viewport extends it.
    #[must_use]
    pub fn centered(viewport: Size, graphic: Size, scale: f64, natural_offset: Point) -> Point {
        let x = (viewport.width - graphic.width * scale) / 2.0 - natural_offset.x;
        let y = (viewport.height - graphic.height * scale) / 2.0 - natural_offset.y;
        Point::new(x.max(0.0), y.max(0.0))
    }

    /// CSS `transform` property value for the content layer.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.x, self.y, self.scale)
    }
}
