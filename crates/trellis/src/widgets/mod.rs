//! Built-in widget implementations.

mod select;
mod toggle;
mod underline;

pub use select::SelectCore;
pub use toggle::Toggle;
pub use underline::UnderlineToggle;
