//! Pan gesture state machine.
//!
//! A press does not start a pan by itself: the pointer has to travel past a
//! small threshold first, so ordinary clicks on the diagram never nudge the
//! content. Each active variant carries the context needed to compute the
//! translation on every subsequent move.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::consts::DRAG_THRESHOLD_PX;
use crate::transform::Point;

/// State of a pan session between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No press in progress.
    #[default]
    Idle,
    /// Pressed, not yet past the movement threshold.
    Pressed {
        /// Client position of the press.
        origin: Point,
        /// Content translation at press time.
        base: Point,
    },
    /// Actively panning; translation follows the pointer.
    Dragging {
        /// Client position of the press.
        origin: Point,
        /// Content translation at press time.
        base: Point,
    },
}

impl DragState {
    /// Begin a session at `origin` with the translation at press time.
    /// Ignored while a session is already active.
    pub fn press(&mut self, origin: Point, base: Point) {
        if matches!(self, Self::Idle) {
            *self = Self::Pressed { origin, base };
        }
    }

    /// Feed a pointer position; returns the translation to apply once the
    /// pointer has crossed the threshold (strictly greater, either axis).
    ///
    /// The first crossing switches the session into [`DragState::Dragging`];
    /// moves below the threshold return `None` and leave everything as-is.
    pub fn motion(&mut self, pointer: Point) -> Option<Point> {
        let (origin, base) = match *self {
            Self::Idle => return None,
            Self::Pressed { origin, base } | Self::Dragging { origin, base } => (origin, base),
        };
        let dx = pointer.x - origin.x;
        let dy = pointer.y - origin.y;
        if matches!(self, Self::Pressed { .. }) {
            if dx.abs() <= DRAG_THRESHOLD_PX && dy.abs() <= DRAG_THRESHOLD_PX {
                return None;
            }
            *self = Self::Dragging { origin, base };
        }
        Some(Point::new(base.x + dx, base.y + dy))
    }

    /// End the session; true when a pan had actually started.
    pub fn release(&mut self) -> bool {
        let started = matches!(self, Self::Dragging { .. });
        *self = Self::Idle;
        started
    }

    /// Abandon the session unconditionally.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// A press is being tracked, panning or not.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// The pointer crossed the threshold and content follows it.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}
