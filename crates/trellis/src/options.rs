//! Declarative configuration records for the selectable-list widgets.
//!
//! An option record is created once by the host and read by the component
//! every frame. The component never mutates it, except through the
//! explicitly bindable focused-entry slot.

use std::time::Duration;

use crate::{
    animation::easing,
    refs::Ref,
    style::{Attr, Color, Style},
};

/// A host callback slot.
pub type Callback = Box<dyn FnMut()>;

/// The capability set the shared list state machine needs from a concrete
/// widget's option record: callbacks and the bindable focused-entry slot.
/// Implementing this once per option record keeps the event state machine
/// itself shared.
pub trait SelectOptions {
    /// Invoked when the selected entry changes. At most once per event.
    fn on_change(&mut self);
    /// Invoked when the user confirms with enter.
    fn on_enter(&mut self);
    /// The bindable focused-entry slot.
    fn focused_entry(&self) -> &Ref<usize>;
    /// Style for an entry in the {selected} x {focused} matrix.
    fn style(&self, selected: bool, focused: bool) -> Style;
}

/// Configuration for [`Toggle`](crate::widgets::Toggle).
pub struct ToggleOption {
    /// Style for an unselected, unfocused entry.
    pub style_normal: Style,
    /// Style for the focused entry, when the component holds focus.
    pub style_focused: Style,
    /// Style for the selected entry.
    pub style_selected: Style,
    /// Style for an entry that is both selected and focused.
    pub style_selected_focused: Style,
    /// Called when the selected entry changes.
    on_change: Callback,
    /// Called when the user presses enter.
    on_enter: Callback,
    /// Which entry would receive keyboard input if the component holds
    /// focus. Hosts may bind their own slot here.
    focused_entry: Ref<usize>,
}

impl Default for ToggleOption {
    fn default() -> Self {
        Self {
            style_normal: Style::default(),
            style_focused: Style::attr(Attr::Reverse),
            style_selected: Style::attr(Attr::Bold),
            style_selected_focused: Style::attr(Attr::Reverse).with_attr(Attr::Bold),
            on_change: Box::new(|| {}),
            on_enter: Box::new(|| {}),
            focused_entry: Ref::new(0),
        }
    }
}

impl ToggleOption {
    /// Set the callback invoked when the selected entry changes.
    pub fn with_on_change(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_change = Box::new(f);
        self
    }

    /// Set the callback invoked when the user presses enter.
    pub fn with_on_enter(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_enter = Box::new(f);
        self
    }

    /// Bind the focused-entry slot to host-owned storage.
    pub fn with_focused_entry(mut self, slot: Ref<usize>) -> Self {
        self.focused_entry = slot;
        self
    }
}

impl SelectOptions for ToggleOption {
    fn on_change(&mut self) {
        (self.on_change)();
    }

    fn on_enter(&mut self) {
        (self.on_enter)();
    }

    fn focused_entry(&self) -> &Ref<usize> {
        &self.focused_entry
    }

    fn style(&self, selected: bool, focused: bool) -> Style {
        match (selected, focused) {
            (true, true) => self.style_selected_focused,
            (true, false) => self.style_selected,
            (false, true) => self.style_focused,
            (false, false) => self.style_normal,
        }
    }
}

/// Timing for one animation channel: how long the run takes, how progress is
/// shaped, and how long the channel waits before moving.
#[derive(Debug, Clone, Copy)]
pub struct Timing {
    /// Run length.
    pub duration: Duration,
    /// Progress shaping function.
    pub easing: easing::Function,
    /// Hold before the run starts.
    pub delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(200),
            easing: easing::quadratic_in_out,
            delay: Duration::ZERO,
        }
    }
}

/// Configuration for [`UnderlineToggle`](crate::widgets::UnderlineToggle):
/// everything in [`ToggleOption`], plus the underline bar's colors and the
/// asymmetric leader/follower animation timing.
pub struct UnderlineOption {
    /// The shared selectable-list configuration.
    pub toggle: ToggleOption,
    /// Color of the bar span under the selected entry.
    pub color_active: Color,
    /// Color of the rest of the bar.
    pub color_inactive: Color,
    /// Timing for the edge leading in the direction of travel.
    pub leader: Timing,
    /// Timing for the trailing edge that catches up.
    pub follower: Timing,
    /// Text placed between consecutive entries.
    pub gap: String,
}

impl Default for UnderlineOption {
    fn default() -> Self {
        Self {
            toggle: ToggleOption::default(),
            color_active: Color::White,
            color_inactive: Color::DarkGrey,
            leader: Timing::default(),
            follower: Timing::default(),
            gap: " ".to_string(),
        }
    }
}

impl UnderlineOption {
    /// Set the run length of both animation channels.
    pub fn with_animation_duration(mut self, d: Duration) -> Self {
        self.leader.duration = d;
        self.follower.duration = d;
        self
    }

    /// Set the easing function of both animation channels.
    pub fn with_animation_easing(mut self, f: easing::Function) -> Self {
        self.leader.easing = f;
        self.follower.easing = f;
        self
    }

    /// Set leader and follower easing independently.
    pub fn with_animation_easing_split(
        mut self,
        leader: easing::Function,
        follower: easing::Function,
    ) -> Self {
        self.leader.easing = leader;
        self.follower.easing = follower;
        self
    }

    /// Set the color of the bar span under the selected entry.
    pub fn with_active_color(mut self, c: Color) -> Self {
        self.color_active = c;
        self
    }

    /// Set the color of the rest of the bar.
    pub fn with_inactive_color(mut self, c: Color) -> Self {
        self.color_inactive = c;
        self
    }

    /// Set the callback invoked when the selected entry changes.
    pub fn with_on_change(mut self, f: impl FnMut() + 'static) -> Self {
        self.toggle = self.toggle.with_on_change(f);
        self
    }

    /// Set the callback invoked when the user presses enter.
    pub fn with_on_enter(mut self, f: impl FnMut() + 'static) -> Self {
        self.toggle = self.toggle.with_on_enter(f);
        self
    }

    /// Bind the focused-entry slot to host-owned storage.
    pub fn with_focused_entry(mut self, slot: Ref<usize>) -> Self {
        self.toggle = self.toggle.with_focused_entry(slot);
        self
    }
}

impl SelectOptions for UnderlineOption {
    fn on_change(&mut self) {
        self.toggle.on_change();
    }

    fn on_enter(&mut self) {
        self.toggle.on_enter();
    }

    fn focused_entry(&self) -> &Ref<usize> {
        self.toggle.focused_entry()
    }

    fn style(&self, selected: bool, focused: bool) -> Style {
        self.toggle.style(selected, focused)
    }
}
