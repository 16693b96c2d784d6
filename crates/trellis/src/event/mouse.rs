//! Mouse input types.

use geom::Point;

use crate::event::key;

/// Mouse button codes.
#[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Button {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button.
    Middle,
    /// No button (for move/scroll).
    None,
}

/// Mouse action kinds.
#[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Action {
    /// Button press.
    Down,
    /// Button release.
    Up,
    /// Mouse drag with button held.
    Drag,
    /// Mouse moved without button.
    Moved,
    /// Scroll wheel down.
    ScrollDown,
    /// Scroll wheel up.
    ScrollUp,
}

impl Action {
    /// Is this a button-driven action?
    pub fn is_button(&self) -> bool {
        matches!(self, Self::Down | Self::Up | Self::Drag)
    }
}

/// A mouse input event: an action plus a location in screen space.
#[derive(Debug, Clone, Copy)]
pub struct MouseEvent {
    /// Mouse action type.
    pub action: Action,
    /// Mouse button.
    pub button: Button,
    /// Keyboard modifiers.
    pub modifiers: key::Mods,
    /// Cursor location in screen space.
    pub location: Point,
}

impl MouseEvent {
    /// A left-button press at the given location, with no modifiers.
    pub fn press(location: impl Into<Point>) -> Self {
        Self {
            action: Action::Down,
            button: Button::Left,
            modifiers: key::Mods::default(),
            location: location.into(),
        }
    }

    /// A motion event (no button) at the given location.
    pub fn moved(location: impl Into<Point>) -> Self {
        Self {
            action: Action::Moved,
            button: Button::None,
            modifiers: key::Mods::default(),
            location: location.into(),
        }
    }

    /// Is this a primary-button press?
    pub fn is_press(&self) -> bool {
        self.button == Button::Left && self.action == Action::Down
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_shape() {
        let m = MouseEvent::press((3, 1));
        assert!(m.is_press());
        assert!(m.action.is_button());
        assert_eq!(m.location, (3, 1).into());
    }

    #[test]
    fn motion_is_not_press() {
        let m = MouseEvent::moved((3, 1));
        assert!(!m.is_press());
        assert!(!m.action.is_button());
    }
}
