//! Text styling carried on rendered elements.

mod color;

pub use color::Color;

/// A text attribute.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Attr {
    /// Bold text.
    Bold,
    /// Dim text.
    Dim,
    /// Italic text.
    Italic,
    /// Reversed foreground and background.
    Reverse,
    /// Underlined text.
    Underline,
}

/// A set of active text attributes.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct AttrSet {
    /// Bold text.
    pub bold: bool,
    /// Dim text.
    pub dim: bool,
    /// Italic text.
    pub italic: bool,
    /// Reversed foreground and background.
    pub reverse: bool,
    /// Underlined text.
    pub underline: bool,
}

impl AttrSet {
    /// Construct a set with a single attribute turned on.
    pub fn new(attr: Attr) -> Self {
        Self::default().with(attr)
    }

    /// Is this attribute set empty?
    pub fn is_empty(&self) -> bool {
        !(self.bold || self.dim || self.italic || self.reverse || self.underline)
    }

    /// A helper for progressive construction of attribute sets.
    pub fn with(mut self, attr: Attr) -> Self {
        match attr {
            Attr::Bold => self.bold = true,
            Attr::Dim => self.dim = true,
            Attr::Italic => self.italic = true,
            Attr::Reverse => self.reverse = true,
            Attr::Underline => self.underline = true,
        };
        self
    }
}

/// A style decoration applied to a rendered element: optional foreground and
/// background colors plus a set of text attributes. Unset fields inherit
/// from the enclosing element.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Style {
    /// Foreground color, if set.
    pub fg: Option<Color>,
    /// Background color, if set.
    pub bg: Option<Color>,
    /// Active text attributes.
    pub attrs: AttrSet,
}

impl Style {
    /// A style with a single attribute set.
    pub fn attr(attr: Attr) -> Self {
        Self {
            attrs: AttrSet::new(attr),
            ..Self::default()
        }
    }

    /// Set the foreground color.
    pub fn with_fg(mut self, fg: Color) -> Self {
        self.fg = Some(fg);
        self
    }

    /// Set the background color.
    pub fn with_bg(mut self, bg: Color) -> Self {
        self.bg = Some(bg);
        self
    }

    /// Add an attribute.
    pub fn with_attr(mut self, attr: Attr) -> Self {
        self.attrs = self.attrs.with(attr);
        self
    }

    /// Does this style change anything?
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }
}
