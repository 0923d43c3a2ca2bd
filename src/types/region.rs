//! Screen geometry.

use serde::{Deserialize, Serialize};

/// A rectangle in absolute (root-relative) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DisplayRegion {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl DisplayRegion {
    /// Create a new region.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Translate a parent-relative region into this region's frame.
    ///
    /// Only the offset is accumulated; width and height are the child's own.
    pub fn offset(&self, local: DisplayRegion) -> DisplayRegion {
        DisplayRegion {
            x: self.x + local.x,
            y: self.y + local.y,
            width: local.width,
            height: local.height,
        }
    }

    /// Center point, e.g. for a click target.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}
