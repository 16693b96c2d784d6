//! Toggle widget: a horizontal list of entries the user can move through.

use geom::{Point, Rect};

use crate::{
    Result,
    component::{Component, EventOutcome},
    context::Context,
    dom::{self, Element},
    event::Event,
    options::ToggleOption,
    refs::{Ref, StringListRef},
    state::NodeName,
    widgets::SelectCore,
};

/// A horizontal list of entries rendered inline with separators. One entry
/// is selected; the selected index is owned by the host and mutated only by
/// this component's event handling.
pub struct Toggle {
    /// Shared selectable-list behavior.
    core: SelectCore,
    /// Host-supplied configuration.
    options: ToggleOption,
}

impl Toggle {
    /// Construct a toggle over host-owned entries and selection.
    pub fn new(entries: StringListRef, selected: Ref<usize>, options: ToggleOption) -> Self {
        Self {
            core: SelectCore::new(entries, selected),
            options,
        }
    }

    /// The hit-test box captured for entry `i` at the last render.
    pub fn entry_box(&self, i: usize) -> Rect {
        self.core.entry_box(i)
    }
}

impl Component for Toggle {
    fn handle_event(&mut self, event: &Event, ctx: &mut Context) -> Result<EventOutcome> {
        self.core.handle_event(event, ctx, &mut self.options)
    }

    fn render(&mut self, ctx: &Context) -> Result<Element> {
        self.core.clamp(&self.options);
        let el = self.core.entry_row(ctx, &self.options, &dom::separator);
        dom::solve(&el, Point::zero());
        Ok(el)
    }

    fn accept_focus(&self) -> bool {
        self.core.accept_focus()
    }

    fn name(&self) -> NodeName {
        NodeName::convert("toggle")
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::event::{key::KeyCode, mouse::MouseEvent};

    /// A toggle over the given entries, with counters observing the
    /// callbacks.
    fn fixture(entries: &[&str]) -> (Toggle, Ref<usize>, Rc<Cell<usize>>, Rc<Cell<usize>>) {
        let selected = Ref::new(0usize);
        let changes = Rc::new(Cell::new(0));
        let enters = Rc::new(Cell::new(0));
        let c = Rc::clone(&changes);
        let e = Rc::clone(&enters);
        let toggle = Toggle::new(
            StringListRef::from_strs(entries),
            selected.clone(),
            ToggleOption::default()
                .with_on_change(move || c.set(c.get() + 1))
                .with_on_enter(move || e.set(e.get() + 1)),
        );
        (toggle, selected, changes, enters)
    }

    fn send(ctx: &mut Context, t: &mut Toggle, code: KeyCode) -> EventOutcome {
        ctx.dispatch(t, &code.into()).unwrap()
    }

    #[test]
    fn next_moves_and_clamps() {
        let mut ctx = Context::new();
        let (mut t, selected, changes, _) = fixture(&["a", "b", "c"]);
        assert!(send(&mut ctx, &mut t, KeyCode::Right).is_handled());
        assert_eq!(selected.get(), 1);
        assert!(send(&mut ctx, &mut t, KeyCode::Right).is_handled());
        assert_eq!(selected.get(), 2);
        // Already at the end: clamped, unchanged, not consumed.
        assert!(!send(&mut ctx, &mut t, KeyCode::Right).is_handled());
        assert_eq!(selected.get(), 2);
        assert_eq!(changes.get(), 2);
    }

    #[test]
    fn prev_saturates_at_zero() {
        let mut ctx = Context::new();
        let (mut t, selected, changes, _) = fixture(&["a", "b"]);
        assert!(!send(&mut ctx, &mut t, KeyCode::Left).is_handled());
        assert_eq!(selected.get(), 0);
        assert_eq!(changes.get(), 0);
    }

    #[test]
    fn hl_aliases_move_selection() {
        let mut ctx = Context::new();
        let (mut t, selected, _, _) = fixture(&["a", "b"]);
        assert!(send(&mut ctx, &mut t, KeyCode::Char('l')).is_handled());
        assert_eq!(selected.get(), 1);
        assert!(send(&mut ctx, &mut t, KeyCode::Char('h')).is_handled());
        assert_eq!(selected.get(), 0);
    }

    #[test]
    fn tab_wraps_forward_and_back() {
        let mut ctx = Context::new();
        let (mut t, selected, _, _) = fixture(&["a", "b", "c"]);
        // n presses of tab return to the start.
        for _ in 0..3 {
            send(&mut ctx, &mut t, KeyCode::Tab);
        }
        assert_eq!(selected.get(), 0);
        send(&mut ctx, &mut t, KeyCode::BackTab);
        assert_eq!(selected.get(), 2);
    }

    #[test]
    fn enter_confirms_without_moving() {
        let mut ctx = Context::new();
        let (mut t, selected, changes, enters) = fixture(&["a", "b", "c"]);
        assert!(send(&mut ctx, &mut t, KeyCode::Enter).is_handled());
        assert_eq!(enters.get(), 1);
        assert_eq!(changes.get(), 0);
        assert_eq!(selected.get(), 0);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut ctx = Context::new();
        let (mut t, _, changes, enters) = fixture(&["a", "b"]);
        assert!(!send(&mut ctx, &mut t, KeyCode::Up).is_handled());
        assert!(!send(&mut ctx, &mut t, KeyCode::Char('x')).is_handled());
        assert_eq!(changes.get(), 0);
        assert_eq!(enters.get(), 0);
    }

    #[test]
    fn empty_list_is_inert() {
        let mut ctx = Context::new();
        let (mut t, selected, changes, enters) = fixture(&[]);
        assert!(!t.accept_focus());
        for code in [KeyCode::Right, KeyCode::Tab, KeyCode::Enter] {
            assert!(!send(&mut ctx, &mut t, code).is_handled());
        }
        assert_eq!(selected.get(), 0);
        assert_eq!(changes.get(), 0);
        assert_eq!(enters.get(), 0);
        // Mouse events are equally inert.
        let press = Event::Mouse(MouseEvent::press((0, 0)));
        assert!(!ctx.dispatch(&mut t, &press).unwrap().is_handled());
    }

    #[test]
    fn focused_entry_tracks_selection() {
        let mut ctx = Context::new();
        let focused = Ref::new(0usize);
        let selected = Ref::new(0usize);
        let mut t = Toggle::new(
            StringListRef::from_strs(&["a", "b"]),
            selected.clone(),
            ToggleOption::default().with_focused_entry(focused.clone()),
        );
        ctx.dispatch(&mut t, &KeyCode::Right.into()).unwrap();
        assert_eq!(selected.get(), 1);
        assert_eq!(focused.get(), 1);
    }

    #[test]
    fn host_shrinking_entries_reclamps() {
        let mut ctx = Context::new();
        let entries = StringListRef::from_strs(&["a", "b", "c"]);
        let selected = Ref::new(0usize);
        let mut t = Toggle::new(entries.clone(), selected.clone(), ToggleOption::default());
        send(&mut ctx, &mut t, KeyCode::Right);
        send(&mut ctx, &mut t, KeyCode::Right);
        assert_eq!(selected.get(), 2);

        // The host drops an entry between frames; the next event re-clamps
        // before acting.
        entries.with_mut(|e| {
            e.pop();
        });
        assert!(!send(&mut ctx, &mut t, KeyCode::Right).is_handled());
        assert_eq!(selected.get(), 1);
    }

    #[test]
    fn render_captures_entry_boxes() {
        let ctx = Context::new();
        let (mut t, _, _, _) = fixture(&["ab", "cde", "f"]);
        t.render(&ctx).unwrap();
        // "ab|cde|f" with one-cell separators.
        assert_eq!(t.entry_box(0), Rect::new(0, 0, 2, 1));
        assert_eq!(t.entry_box(1), Rect::new(3, 0, 3, 1));
        assert_eq!(t.entry_box(2), Rect::new(7, 0, 1, 1));
    }

    #[test]
    fn click_selects_and_takes_focus() {
        let mut ctx = Context::new();
        let (mut t, selected, changes, _) = fixture(&["ab", "cde", "f"]);
        t.render(&ctx).unwrap();

        let press = Event::Mouse(MouseEvent::press((4, 0)));
        assert!(ctx.dispatch(&mut t, &press).unwrap().is_handled());
        assert_eq!(selected.get(), 1);
        assert_eq!(changes.get(), 1);
        assert!(ctx.is_focused(t.core.state()));
    }

    #[test]
    fn click_on_selected_entry_does_not_fire_on_change() {
        let mut ctx = Context::new();
        let (mut t, selected, changes, _) = fixture(&["ab", "cde"]);
        t.render(&ctx).unwrap();

        let press = Event::Mouse(MouseEvent::press((0, 0)));
        assert!(ctx.dispatch(&mut t, &press).unwrap().is_handled());
        assert_eq!(selected.get(), 0);
        assert_eq!(changes.get(), 0);
        // Focus was still claimed.
        assert!(ctx.is_focused(t.core.state()));
    }

    #[test]
    fn click_outside_boxes_is_ignored() {
        let mut ctx = Context::new();
        let (mut t, _, changes, _) = fixture(&["ab", "cde"]);
        t.render(&ctx).unwrap();
        let press = Event::Mouse(MouseEvent::press((20, 5)));
        assert!(!ctx.dispatch(&mut t, &press).unwrap().is_handled());
        assert_eq!(changes.get(), 0);
    }

    #[test]
    fn hover_moves_focus_without_selecting() {
        let mut ctx = Context::new();
        let focused = Ref::new(0usize);
        let selected = Ref::new(0usize);
        let mut t = Toggle::new(
            StringListRef::from_strs(&["ab", "cde"]),
            selected.clone(),
            ToggleOption::default().with_focused_entry(focused.clone()),
        );
        t.render(&ctx).unwrap();

        // Motion over entry 1: focus follows hover, selection stays, and the
        // event is reported unconsumed.
        let hover = Event::Mouse(MouseEvent::moved((4, 0)));
        assert!(!ctx.dispatch(&mut t, &hover).unwrap().is_handled());
        assert_eq!(focused.get(), 1);
        assert_eq!(selected.get(), 0);
        assert!(ctx.is_focused(t.core.state()));
    }
}
