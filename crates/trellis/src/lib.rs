//! Trellis: the interactive component layer of a terminal UI toolkit.
//!
//! Trellis provides stateful, composable widgets that route keyboard and
//! mouse events, arbitrate focus and mouse capture, and drive time-based
//! visual transitions synchronized with rendering. The layout engine that
//! turns elements into a styled text grid and the terminal backend that
//! produces bytes are external collaborators, consumed through the narrow
//! [`dom::Element`] interface and the [`Context`] calls.
//!
//! The main entry points are:
//! - [`Context`] - focus and mouse-capture arbitration shared by a component tree
//! - [`Component`] - the trait implemented by all widgets
//! - [`widgets::Toggle`] / [`widgets::UnderlineToggle`] - the selectable-list family

pub mod animation;
mod component;
mod context;
pub mod dom;
pub mod error;
pub mod event;
mod options;
mod refs;
pub mod state;
pub mod style;
pub mod widgets;

pub use component::{Component, EventOutcome};
pub use context::Context;
pub use error::{Error, Result};
pub use geom;
pub use options::{SelectOptions, Timing, ToggleOption, UnderlineOption};
pub use refs::{Ref, StringListRef};
pub use state::{ComponentState, NodeName};

// Export commonly used geometry types at the root
pub use geom::{Expanse, Point, Rect};
