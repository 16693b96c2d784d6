//! The narrow element interface consumed from the layout/rendering engine.
//!
//! Components produce an opaque [`Element`] tree: text fragments, horizontal
//! and vertical stacks, separators, style decorations, and `reflect` markers
//! that record final on-screen rectangles at layout time. How text beyond
//! display width is measured, or how the tree becomes terminal bytes, is the
//! rendering engine's concern.

mod layout;

use std::{cell::Cell, rc::Rc};

use geom::Rect;

pub use layout::solve;

use crate::style::{Color, Style};

/// A cheap cloneable handle to a rectangle captured during layout. The
/// component owning the handle reads it for hit-testing; it is stale until
/// the first layout pass and between passes.
#[derive(Debug, Clone, Default)]
pub struct BoxRef {
    /// Shared rectangle cell, written by layout.
    rect: Rc<Cell<Rect>>,
}

impl BoxRef {
    /// A handle holding the zero rect.
    pub fn new() -> Self {
        Self::default()
    }

    /// The rectangle recorded by the most recent layout pass.
    pub fn get(&self) -> Rect {
        self.rect.get()
    }

    /// Record a rectangle. Called by layout only.
    pub(crate) fn set(&self, r: Rect) {
        self.rect.set(r);
    }
}

/// The animated underline bar fragment: a single row whose columns in
/// `[round(left), round(right))` are filled with the active color and the
/// remainder with the inactive color. Offsets are relative to the bar's own
/// left edge.
#[derive(Debug, Clone, Copy)]
pub struct Underline {
    /// Left edge offset of the active span.
    pub left: f32,
    /// Right edge offset (exclusive) of the active span.
    pub right: f32,
    /// Color of the active span.
    pub active: Color,
    /// Color of the rest of the bar.
    pub inactive: Color,
}

impl Underline {
    /// The active column span after rounding, as `(start, end)` with `end`
    /// exclusive. Negative offsets clamp to the bar's left edge.
    pub fn span(&self) -> (u32, u32) {
        let start = self.left.round().max(0.0) as u32;
        let end = self.right.round().max(0.0) as u32;
        (start, end.max(start))
    }
}

/// An element of the render tree. Opaque to components beyond the
/// constructors and decorator methods below.
#[derive(Debug, Clone)]
pub struct Element {
    /// The element's content.
    kind: Kind,
}

/// Element content variants.
#[derive(Debug, Clone)]
enum Kind {
    /// Renders nothing, occupies nothing.
    Empty,
    /// A single-line text fragment.
    Text(String),
    /// A one-cell divider between siblings.
    Separator,
    /// Children stacked left to right.
    HBox(Vec<Element>),
    /// Children stacked top to bottom.
    VBox(Vec<Element>),
    /// A style decoration around a child.
    Styled(Style, Box<Element>),
    /// Records the child's laid-out rectangle into the handle.
    Reflect(BoxRef, Box<Element>),
    /// The animated underline bar.
    Underline(Underline),
}

/// A single-line text element.
pub fn text(content: impl Into<String>) -> Element {
    Element {
        kind: Kind::Text(content.into()),
    }
}

/// An element that renders nothing and occupies no cells.
pub fn empty() -> Element {
    Element { kind: Kind::Empty }
}

/// A one-cell divider between siblings.
pub fn separator() -> Element {
    Element {
        kind: Kind::Separator,
    }
}

/// Stack children left to right.
pub fn hbox(children: Vec<Element>) -> Element {
    Element {
        kind: Kind::HBox(children),
    }
}

/// Stack children top to bottom. Children stretch to the stack's width.
pub fn vbox(children: Vec<Element>) -> Element {
    Element {
        kind: Kind::VBox(children),
    }
}

/// The animated underline bar fragment.
pub fn underline(left: f32, right: f32, active: Color, inactive: Color) -> Element {
    Element {
        kind: Kind::Underline(Underline {
            left,
            right,
            active,
            inactive,
        }),
    }
}

impl Element {
    /// Decorate this element with a style. Empty styles are not recorded.
    pub fn styled(self, style: Style) -> Self {
        if style.is_empty() {
            return self;
        }
        Self {
            kind: Kind::Styled(style, Box::new(self)),
        }
    }

    /// Record this element's laid-out rectangle into `boxref` as a side
    /// effect of layout.
    pub fn reflect(self, boxref: &BoxRef) -> Self {
        Self {
            kind: Kind::Reflect(boxref.clone(), Box::new(self)),
        }
    }

    /// Borrow the element's content. Layout-internal.
    fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Walk the tree depth-first, visiting every element.
    pub fn walk(&self, f: &mut impl FnMut(&Self)) {
        f(self);
        match self.kind() {
            Kind::HBox(children) | Kind::VBox(children) => {
                for c in children {
                    c.walk(f);
                }
            }
            Kind::Styled(_, child) | Kind::Reflect(_, child) => child.walk(f),
            Kind::Empty | Kind::Text(_) | Kind::Separator | Kind::Underline(_) => {}
        }
    }

    /// Find the first underline bar in the tree, if any.
    pub fn find_underline(&self) -> Option<Underline> {
        let mut found = None;
        self.walk(&mut |el| {
            if found.is_none()
                && let Kind::Underline(u) = el.kind()
            {
                found = Some(*u);
            }
        });
        found
    }
}
