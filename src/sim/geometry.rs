//! Axis-aligned rectangles in screen pixels
//!
//! Screen space has its origin at the top-left corner with y growing downward.
//! Containment is half-open: the left and top edges are inside, the right and
//! bottom edges are not.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (buildings, hit-boxes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle whose bottom edge is centred on `anchor`
    pub fn bottom_centered(anchor: IVec2, width: i32, height: i32) -> Self {
        Self::new(anchor.x - width / 2, anchor.y - height, width, height)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Midpoint of the top edge (where an actor stands)
    pub fn top_center(&self) -> IVec2 {
        IVec2::new(self.x + self.width / 2, self.y)
    }

    /// Check if a pixel lies inside the rectangle
    #[inline]
    pub fn contains(&self, p: IVec2) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }
}
