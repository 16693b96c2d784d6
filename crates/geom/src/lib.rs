//! Geometry primitives used across trellis.

/// Width/height size type.
mod expanse;
/// Point helpers.
mod point;
/// Rectangle operations.
mod rect;

pub use expanse::Expanse;
pub use point::Point;
pub use rect::Rect;
