//! Toggle widget with a continuously animated underline indicator.

use geom::Point;

use crate::{
    Result,
    animation::{Animator, Params},
    component::{Component, EventOutcome},
    context::Context,
    dom::{self, BoxRef, Element},
    event::Event,
    options::{Timing, UnderlineOption},
    refs::{Ref, StringListRef},
    state::NodeName,
    widgets::SelectCore,
};

/// A [`Toggle`](crate::widgets::Toggle) variant drawing a single-row bar
/// beneath the entries, with the active span tracking the selected entry's
/// screen position. The two bar edges are independent animation channels
/// with asymmetric timing: the edge leading in the direction of travel
/// moves on the leader timing, the trailing edge catches up on the follower
/// timing, producing a stretch-then-catch-up motion.
pub struct UnderlineToggle {
    /// Shared selectable-list behavior.
    core: SelectCore,
    /// Host-supplied configuration.
    options: UnderlineOption,
    /// Left bar edge, as a column offset from the bar's left edge.
    left: Animator,
    /// Right bar edge (exclusive), same coordinates.
    right: Animator,
    /// The bar's own rectangle, captured for diagnostics; not interactive.
    bar: BoxRef,
}

impl UnderlineToggle {
    /// Construct an underline toggle over host-owned entries and selection.
    pub fn new(entries: StringListRef, selected: Ref<usize>, options: UnderlineOption) -> Self {
        Self {
            core: SelectCore::new(entries, selected),
            options,
            left: Animator::resting(0.0),
            right: Animator::resting(0.0),
            bar: BoxRef::new(),
        }
    }

    /// The current interpolated bar edges, as `(left, right)` column offsets.
    pub fn edges(&self) -> (f32, f32) {
        (self.left.value(), self.right.value())
    }

    /// The two edge animators, `(left, right)`. Read-only introspection.
    pub fn animators(&self) -> (&Animator, &Animator) {
        (&self.left, &self.right)
    }

    /// Bar edge targets for the current geometry, relative to the bar's own
    /// left edge.
    fn targets(&self) -> (f32, f32) {
        let entry = self.core.entry_box(self.core.selected_index());
        let bar = self.bar.get();
        (
            entry.tl.x as f32 - bar.tl.x as f32,
            entry.right() as f32 - bar.tl.x as f32,
        )
    }

    /// If either edge target moved, replace both animators, assigning leader
    /// timing to the edge leading in the direction of travel. Each
    /// replacement is seeded with the edge's current interpolated value, so
    /// redirection never jumps.
    fn retarget(&mut self) {
        if self.core.is_empty() {
            return;
        }
        let (lt, rt) = self.targets();
        if lt == self.left.to() && rt == self.right.to() {
            return;
        }
        let (leader, follower) = (self.options.leader, self.options.follower);
        if lt >= self.left.to() {
            // Moving rightward: the right edge leads, the left edge follows.
            retarget_with(&mut self.left, lt, follower);
            retarget_with(&mut self.right, rt, leader);
        } else {
            retarget_with(&mut self.left, lt, leader);
            retarget_with(&mut self.right, rt, follower);
        }
    }
}

/// Replace an animator, heading to `target` on the given timing.
fn retarget_with(animator: &mut Animator, target: f32, timing: Timing) {
    animator.retarget(target, timing.duration, timing.easing, timing.delay);
}

impl Component for UnderlineToggle {
    fn handle_event(&mut self, event: &Event, ctx: &mut Context) -> Result<EventOutcome> {
        self.core.handle_event(event, ctx, &mut self.options)
    }

    fn on_animation(&mut self, params: &Params) {
        self.left.advance(params.frame());
        self.right.advance(params.frame());
    }

    fn render(&mut self, ctx: &Context) -> Result<Element> {
        self.core.clamp(&self.options);
        let row = self
            .core
            .entry_row(ctx, &self.options, &|| dom::text(self.options.gap.clone()));
        let bar = dom::underline(
            self.left.value(),
            self.right.value(),
            self.options.color_active,
            self.options.color_inactive,
        )
        .reflect(&self.bar);
        let el = dom::vbox(vec![row, bar]);
        // Boxes must be fresh before the retarget decision for this frame.
        dom::solve(&el, Point::zero());
        self.retarget();
        Ok(el)
    }

    fn accept_focus(&self) -> bool {
        self.core.accept_focus()
    }

    fn name(&self) -> NodeName {
        NodeName::convert("underline_toggle")
    }
}
