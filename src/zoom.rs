//! Discrete zoom level table.
//!
//! Zoom operates over a fixed ascending set of scale factors rather than a
//! continuous range. Levels are stored as integers scaled to the decimal
//! precision of the configured increment, so adjacent levels differ by
//! exactly one increment with no floating-point drift; conversion back to
//! `f64` happens only at the boundary.

#[cfg(test)]
#[path = "zoom_test.rs"]
mod zoom_test;

use crate::consts::{DEFAULT_SCALE, DEFAULT_SCALE_EPSILON};

/// Direction of a single zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Toward the next larger scale.
    In,
    /// Toward the next smaller scale.
    Out,
}

/// Fixed ascending table of allowed scale factors.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomTable {
    /// Levels in scaled-integer units, strictly ascending.
    levels: Vec<i64>,
    /// Denominator turning a scaled integer back into a scale factor.
    denom: f64,
}

/// Decimal places in the shortest display form of `value` (`0.25` → 2).
fn decimal_places(value: f64) -> u32 {
    let text = format!("{value}");
    match text.split_once('.') {
        Some((_, fraction)) => u32::try_from(fraction.len()).unwrap_or(0),
        None => 0,
    }
}

/// Upper bound on table size; guards against degenerate configurations.
const MAX_LEVELS: f64 = 10_000.0;

impl ZoomTable {
    /// Build the table `min + i * increment` for
    /// `i = 0 ..= floor((max - min) / increment)`.
    ///
    /// Returns `None` when the range is degenerate: a non-positive or
    /// non-finite increment, `max < min`, or a range describing more levels
    /// than the table cap.
    #[must_use]
    pub fn new(min: f64, max: f64, increment: f64) -> Option<Self> {
        if !increment.is_finite() || increment <= 0.0 || !min.is_finite() || max < min {
            return None;
        }
        let precision = decimal_places(increment).min(9);
        let denom = 10f64.powi(i32::try_from(precision).unwrap_or(9));
        let to_units = |value: f64| (value * denom).round() as i64;
        let step_units = to_units(increment);
        if step_units <= 0 {
            return None;
        }
        let steps = ((max - min) / increment).floor();
        if !steps.is_finite() || steps > MAX_LEVELS {
            return None;
        }
        let min_units = to_units(min);
        let levels = (0..=steps as i64).map(|i| min_units + i * step_units).collect();
        Some(Self { levels, denom })
    }

    /// Number of levels; at least 1 for any table [`new`](Self::new) yields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Scale factor at `index`. Panics when `index >= len()`.
    #[must_use]
    pub fn value(&self, index: usize) -> f64 {
        self.levels[index] as f64 / self.denom
    }

    /// Index of the default scale, located by tolerance match; a table that
    /// cannot represent the default degrades to its middle index.
    #[must_use]
    pub fn default_index(&self) -> usize {
        self.levels
            .iter()
            .position(|&units| (units as f64 / self.denom - DEFAULT_SCALE).abs() < DEFAULT_SCALE_EPSILON)
            .unwrap_or(self.levels.len() / 2)
    }

    /// Neighboring index in `direction`, or `None` at the table's edge.
    #[must_use]
    pub fn step(&self, index: usize, direction: ZoomDirection) -> Option<usize> {
        match direction {
            ZoomDirection::In => {
                let next = index + 1;
                (next < self.levels.len()).then_some(next)
            }
            ZoomDirection::Out => index.checked_sub(1),
        }
    }
}

impl Default for ZoomTable {
    fn default() -> Self {
        use crate::consts::{ZOOM_INCREMENT, ZOOM_MAX, ZOOM_MIN};
        Self::new(ZOOM_MIN, ZOOM_MAX, ZOOM_INCREMENT).unwrap_or(Self {
            levels: vec![10],
            denom: 10.0,
        })
    }
}
