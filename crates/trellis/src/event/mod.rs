//! Input events delivered to components.
//!
//! The terminal backend is an external collaborator; it hands this layer
//! already-serialized events, one at a time, in occurrence order. The
//! `from_crossterm` constructor translates the backend's raw event type.

pub mod key;
pub mod mouse;

use crossterm::event as cevent;
use geom::Point;

/// An input event routed through the component tree.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// A keystroke.
    Key(key::Key),
    /// A mouse action.
    Mouse(mouse::MouseEvent),
}

impl Event {
    /// Is this a mouse event?
    pub fn is_mouse(&self) -> bool {
        matches!(self, Self::Mouse(_))
    }

    /// Translate a crossterm event. Returns `None` for event kinds this
    /// layer does not route (resize, paste, terminal focus).
    pub fn from_crossterm(e: cevent::Event) -> Option<Self> {
        match e {
            cevent::Event::Key(k) => Some(Self::Key(key::Key {
                mods: translate_key_modifiers(k.modifiers),
                code: translate_key_code(k.code),
            })),
            cevent::Event::Mouse(m) => {
                let mut button = mouse::Button::None;
                let action = match m.kind {
                    cevent::MouseEventKind::Down(b) => {
                        button = translate_button(b);
                        mouse::Action::Down
                    }
                    cevent::MouseEventKind::Up(b) => {
                        button = translate_button(b);
                        mouse::Action::Up
                    }
                    cevent::MouseEventKind::Drag(b) => {
                        button = translate_button(b);
                        mouse::Action::Drag
                    }
                    cevent::MouseEventKind::Moved => mouse::Action::Moved,
                    cevent::MouseEventKind::ScrollDown => mouse::Action::ScrollDown,
                    cevent::MouseEventKind::ScrollUp => mouse::Action::ScrollUp,
                    // Horizontal scroll has no binding in this layer.
                    cevent::MouseEventKind::ScrollLeft | cevent::MouseEventKind::ScrollRight => {
                        return None;
                    }
                };
                Some(Self::Mouse(mouse::MouseEvent {
                    button,
                    action,
                    modifiers: translate_key_modifiers(m.modifiers),
                    location: Point {
                        x: m.column as u32,
                        y: m.row as u32,
                    },
                }))
            }
            _ => None,
        }
    }
}

impl From<key::Key> for Event {
    fn from(k: key::Key) -> Self {
        Self::Key(k)
    }
}

impl From<key::KeyCode> for Event {
    fn from(code: key::KeyCode) -> Self {
        Self::Key(code.into())
    }
}

impl From<mouse::MouseEvent> for Event {
    fn from(m: mouse::MouseEvent) -> Self {
        Self::Mouse(m)
    }
}

/// Translate crossterm key modifiers.
fn translate_key_modifiers(mods: cevent::KeyModifiers) -> key::Mods {
    key::Mods {
        shift: mods.contains(cevent::KeyModifiers::SHIFT),
        ctrl: mods.contains(cevent::KeyModifiers::CONTROL),
        alt: mods.contains(cevent::KeyModifiers::ALT),
    }
}

/// Translate a crossterm mouse button.
fn translate_button(b: cevent::MouseButton) -> mouse::Button {
    match b {
        cevent::MouseButton::Left => mouse::Button::Left,
        cevent::MouseButton::Right => mouse::Button::Right,
        cevent::MouseButton::Middle => mouse::Button::Middle,
    }
}

/// Translate a crossterm key code. Keys this layer does not route map to
/// `Null`.
fn translate_key_code(code: cevent::KeyCode) -> key::KeyCode {
    match code {
        cevent::KeyCode::Backspace => key::KeyCode::Backspace,
        cevent::KeyCode::Enter => key::KeyCode::Enter,
        cevent::KeyCode::Left => key::KeyCode::Left,
        cevent::KeyCode::Right => key::KeyCode::Right,
        cevent::KeyCode::Up => key::KeyCode::Up,
        cevent::KeyCode::Down => key::KeyCode::Down,
        cevent::KeyCode::Home => key::KeyCode::Home,
        cevent::KeyCode::End => key::KeyCode::End,
        cevent::KeyCode::PageUp => key::KeyCode::PageUp,
        cevent::KeyCode::PageDown => key::KeyCode::PageDown,
        cevent::KeyCode::Tab => key::KeyCode::Tab,
        cevent::KeyCode::BackTab => key::KeyCode::BackTab,
        cevent::KeyCode::Delete => key::KeyCode::Delete,
        cevent::KeyCode::Char(c) => key::KeyCode::Char(c),
        cevent::KeyCode::Esc => key::KeyCode::Esc,
        _ => key::KeyCode::Null,
    }
}
