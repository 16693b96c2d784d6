//! The component trait and event outcome types.

use crate::{
    Result,
    animation::Params,
    context::Context,
    dom::Element,
    event::Event,
    state::NodeName,
};

/// The result of an event handler.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EventOutcome {
    /// The event was consumed and propagation stops.
    Handle,
    /// The event was not consumed and may be offered elsewhere.
    Ignore,
}

impl EventOutcome {
    /// Was the event consumed?
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handle)
    }
}

/// The behavior contract for interactive components.
///
/// All calls arrive on one logical thread, one at a time: the host delivers
/// at most one event between frames, advances animations once per frame,
/// then renders. Nothing here blocks or suspends.
pub trait Component {
    /// Handle one input event, possibly mutating component and host state.
    /// Any state mutation and callback invocation happens before the event
    /// is reported consumed.
    fn handle_event(&mut self, event: &Event, ctx: &mut Context) -> Result<EventOutcome>;

    /// Produce this component's element tree. Geometry for hit-testing is
    /// recorded as a side effect, and is complete by the time the element is
    /// returned.
    fn render(&mut self, ctx: &Context) -> Result<Element>;

    /// Can this component receive focus?
    fn accept_focus(&self) -> bool {
        false
    }

    /// Advance time-based visual state by one frame. Called once per frame,
    /// before [`Component::render`].
    fn on_animation(&mut self, _params: &Params) {}

    /// Name used for tracing and diagnostics.
    fn name(&self) -> NodeName;
}
