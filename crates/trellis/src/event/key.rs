//! Keyboard input types.

/// Active keyboard modifiers.
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy)]
pub struct Mods {
    /// Shift key held.
    pub shift: bool,
    /// Control key held.
    pub ctrl: bool,
    /// Alt key held.
    pub alt: bool,
}

impl Mods {
    /// Are no modifiers held?
    pub fn is_empty(&self) -> bool {
        !(self.shift || self.ctrl || self.alt)
    }
}

/// A key, along with any active modifiers.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Key {
    /// Modifiers held when the key was pressed.
    pub mods: Mods,
    /// The key itself.
    pub code: KeyCode,
}

impl Key {
    /// Construct a key with no modifiers.
    pub fn new(code: KeyCode) -> Self {
        Self {
            mods: Mods::default(),
            code,
        }
    }
}

/// Key codes routed by this layer. Input the components don't bind arrives
/// as `Null`.
#[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy)]
pub enum KeyCode {
    /// Backspace key.
    Backspace,
    /// Enter key.
    Enter,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Tab key.
    Tab,
    /// Shift + Tab key.
    BackTab,
    /// Delete key.
    Delete,
    /// A character.
    ///
    /// `KeyCode::Char('c')` represents the `c` character, etc.
    Char(char),
    /// Escape key.
    Esc,
    /// A key this layer does not route.
    Null,
}

impl From<char> for KeyCode {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        Self::new(code)
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Self::new(c.into())
    }
}

/// A key matches a bare key code if the code is equal and no modifiers
/// beyond shift are held; shifted characters compare by their uppercase
/// form, so `Key` from `shift+c` equals `KeyCode::Char('C')`.
impl PartialEq<KeyCode> for Key {
    fn eq(&self, code: &KeyCode) -> bool {
        if self.mods.ctrl || self.mods.alt {
            return false;
        }
        if self.mods.shift {
            if let (KeyCode::Char(a), KeyCode::Char(b)) = (self.code, *code) {
                return a.to_ascii_uppercase() == b;
            }
        }
        self.code == *code
    }
}
