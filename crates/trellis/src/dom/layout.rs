//! Natural-size layout for element trees.
//!
//! Components run this over their own subtree at render time so that every
//! `reflect` handle is populated before the element is returned, and before
//! any animation retarget decision for the frame.

use geom::{Expanse, Point, Rect};
use unicode_width::UnicodeWidthStr;

use super::{Element, Kind};

/// Lay out an element tree at `origin`, assigning every node its natural
/// size, and record rectangles into all `reflect` handles. Horizontal stacks
/// place children left to right at their natural widths; vertical stacks
/// place children top to bottom, stretched to the stack's width. Returns the
/// tree's overall dimensions.
pub fn solve(el: &Element, origin: Point) -> Expanse {
    let size = measure(el);
    place(el, (origin, size).into());
    size
}

/// Bottom-up natural size.
fn measure(el: &Element) -> Expanse {
    match el.kind() {
        Kind::Empty => Expanse::new(0, 0),
        Kind::Text(s) => Expanse::new(s.width() as u32, 1),
        Kind::Separator => Expanse::new(1, 1),
        Kind::HBox(children) => children.iter().map(measure).fold(Expanse::new(0, 0), |a, m| {
            Expanse::new(a.w + m.w, a.h.max(m.h))
        }),
        Kind::VBox(children) => children.iter().map(measure).fold(Expanse::new(0, 0), |a, m| {
            Expanse::new(a.w.max(m.w), a.h + m.h)
        }),
        Kind::Styled(_, child) | Kind::Reflect(_, child) => measure(child),
        // The bar stretches to whatever row it is given.
        Kind::Underline(_) => Expanse::new(0, 1),
    }
}

/// Top-down placement into assigned rectangles.
fn place(el: &Element, rect: Rect) {
    match el.kind() {
        Kind::Empty | Kind::Text(_) | Kind::Separator | Kind::Underline(_) => {}
        Kind::HBox(children) => {
            let mut x = rect.tl.x;
            for child in children {
                let m = measure(child);
                place(child, Rect::new(x, rect.tl.y, m.w, m.h.min(rect.h)));
                x += m.w;
            }
        }
        Kind::VBox(children) => {
            let mut y = rect.tl.y;
            for child in children {
                let m = measure(child);
                place(child, Rect::new(rect.tl.x, y, rect.w, m.h));
                y += m.h;
            }
        }
        Kind::Styled(_, child) => place(child, rect),
        Kind::Reflect(boxref, child) => {
            boxref.set(rect);
            place(child, rect);
        }
    }
}
