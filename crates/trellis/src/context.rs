//! Focus and mouse-capture arbitration shared by a component tree.

use tracing::trace;

use crate::{
    Result,
    component::{Component, EventOutcome},
    event::Event,
    state::ComponentState,
};

/// A `Context` is shared by all components in one top-level tree. It owns the
/// focus generation counter and the per-event mouse capture flag; components
/// participate by calling [`Context::take_focus`] and reading
/// [`Context::is_focused`].
#[derive(Debug)]
pub struct Context {
    /// A counter that is incremented every time focus changes. The component
    /// holding focus has a state `focus_gen` equal to this.
    focus_gen: u64,
    /// Has a component captured the mouse event currently being delivered?
    mouse_captured: bool,
}

impl Context {
    /// Construct a context with no focused component.
    pub fn new() -> Self {
        Self {
            // Start above the ComponentState default so nothing is focused
            // until take_focus is called.
            focus_gen: 1,
            mouse_captured: false,
        }
    }

    /// Give focus to the component owning `state`. A no-op if the component
    /// is already focused.
    pub fn take_focus(&mut self, state: &mut ComponentState) {
        if self.is_focused(state) {
            return;
        }
        self.focus_gen += 1;
        state.focus_gen = self.focus_gen;
        trace!(id = state.id(), "focus taken");
    }

    /// Does the component owning `state` currently hold focus?
    pub fn is_focused(&self, state: &ComponentState) -> bool {
        state.focus_gen == self.focus_gen
    }

    /// Start delivery of a new event, resetting mouse-capture arbitration.
    /// Hosts call this once per event before offering it to components.
    pub fn begin_event(&mut self) {
        self.mouse_captured = false;
    }

    /// Request exclusive capture of the mouse event currently being
    /// delivered. Capture is first-come-first-served: the call fails if
    /// another component has already captured this event, and the requester
    /// must then treat the event as not consumed by itself.
    pub fn capture_mouse(&mut self) -> bool {
        if self.mouse_captured {
            trace!("mouse capture denied");
            return false;
        }
        self.mouse_captured = true;
        true
    }

    /// Deliver one event to a component: resets capture arbitration, then
    /// invokes the component's handler. Hosts offering one event to several
    /// overlapping components should call [`Context::begin_event`] once and
    /// then each component's `handle_event` directly.
    pub fn dispatch(
        &mut self,
        component: &mut dyn Component,
        event: &Event,
    ) -> Result<EventOutcome> {
        self.begin_event();
        component.handle_event(event, self)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
