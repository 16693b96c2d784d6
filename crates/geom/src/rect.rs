use super::{Expanse, Point};

/// A rectangle in terminal-cell coordinates. The right and bottom edges are
/// exclusive, so a rect of width 1 covers exactly one column.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub tl: Point,
    /// Width in cells.
    pub w: u32,
    /// Height in cells.
    pub h: u32,
}

impl Rect {
    /// Construct a rect from a location and dimensions.
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            tl: Point { x, y },
            w,
            h,
        }
    }

    /// A rect with zero location and size.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Does this rect have zero area?
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// The column one past the right edge.
    pub fn right(&self) -> u32 {
        self.tl.x + self.w
    }

    /// The row one past the bottom edge.
    pub fn bottom(&self) -> u32 {
        self.tl.y + self.h
    }

    /// Does this rect contain the point? Empty rects contain nothing.
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.tl.x && p.x < self.right() && p.y >= self.tl.y && p.y < self.bottom()
    }

    /// Return the same rect translated to a new location.
    pub fn at(&self, tl: Point) -> Self {
        Self {
            tl,
            w: self.w,
            h: self.h,
        }
    }

    /// The dimensions of this rect.
    pub fn expanse(&self) -> Expanse {
        (*self).into()
    }
}

impl From<(Point, Expanse)> for Rect {
    fn from(v: (Point, Expanse)) -> Self {
        Self {
            tl: v.0,
            w: v.1.w,
            h: v.1.h,
        }
    }
}
