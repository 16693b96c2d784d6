//! Shared event/state behavior for selectable lists.

use geom::Rect;
use tracing::debug;

use crate::{
    Result,
    component::EventOutcome,
    context::Context,
    dom::{self, BoxRef, Element},
    event::{Event, key::KeyCode, mouse::MouseEvent},
    options::SelectOptions,
    refs::{Ref, StringListRef},
    state::ComponentState,
};

/// The shared behavior of a list of entries with one selected and one
/// focused entry, consumed by both the plain and animated toggles. The entry
/// list and the selected index are borrowed from the host; the core
/// re-clamps both against the current entry count before every use, so the
/// host may change the list between calls.
pub struct SelectCore {
    /// Host-owned entry list.
    entries: StringListRef,
    /// Host-owned selected index.
    selected: Ref<usize>,
    /// One hit-test box per visible entry, captured at render time.
    boxes: Vec<BoxRef>,
    /// Focus state.
    state: ComponentState,
}

impl SelectCore {
    /// Construct the core over host-owned entries and selection.
    pub fn new(entries: StringListRef, selected: Ref<usize>) -> Self {
        Self {
            entries,
            selected,
            boxes: Vec::new(),
            state: ComponentState::default(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the entry list empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A component with no entries cannot take focus.
    pub fn accept_focus(&self) -> bool {
        !self.is_empty()
    }

    /// The focus state offered up to [`Context`] calls.
    pub fn state(&self) -> &ComponentState {
        &self.state
    }

    /// The selected index, as last clamped.
    pub fn selected_index(&self) -> usize {
        self.selected.get()
    }

    /// The hit-test box captured for entry `i` at the last render. Stale
    /// before the first render.
    pub fn entry_box(&self, i: usize) -> Rect {
        self.boxes.get(i).map(BoxRef::get).unwrap_or_default()
    }

    /// Defensive resync against host mutation between frames: size the box
    /// array to the current entry count and clamp both indices into range.
    /// Out-of-range values are corrected silently, never surfaced as errors.
    pub fn clamp(&mut self, opts: &dyn SelectOptions) {
        let n = self.len();
        self.boxes.resize_with(n, BoxRef::new);
        if n == 0 {
            return;
        }
        self.selected.set(self.selected.get().min(n - 1));
        let focused = opts.focused_entry();
        focused.set(focused.get().min(n - 1));
    }

    /// Handle one event against the shared state machine. Mouse events are
    /// delegated to capture-then-hit-test handling; keys move the selection
    /// with left/right (`h`/`l`), wrap with tab/back-tab, and confirm with
    /// enter.
    pub fn handle_event(
        &mut self,
        event: &Event,
        ctx: &mut Context,
        opts: &mut dyn SelectOptions,
    ) -> Result<EventOutcome> {
        self.clamp(opts);
        let key = match event {
            Event::Mouse(m) => return self.handle_mouse(m, ctx, opts),
            Event::Key(key) => *key,
        };
        let n = self.len();
        if n == 0 {
            return Ok(EventOutcome::Ignore);
        }

        let old = self.selected.get();
        let mut sel = old;
        if key == KeyCode::Left || key == KeyCode::Char('h') {
            sel = sel.saturating_sub(1);
        }
        if key == KeyCode::Right || key == KeyCode::Char('l') {
            sel += 1;
        }
        if key == KeyCode::Tab {
            sel = (sel + 1) % n;
        }
        if key == KeyCode::BackTab {
            sel = (sel + n - 1) % n;
        }
        sel = sel.min(n - 1);

        if sel != old {
            self.selected.set(sel);
            opts.focused_entry().set(sel);
            debug!(id = self.state.id(), from = old, to = sel, "selection changed");
            opts.on_change();
            return Ok(EventOutcome::Handle);
        }

        if key == KeyCode::Enter {
            opts.on_enter();
            return Ok(EventOutcome::Handle);
        }

        Ok(EventOutcome::Ignore)
    }

    /// Capture-then-hit-test mouse handling. A captured event whose
    /// coordinates hit an entry box takes component focus and moves the
    /// focused entry there whether or not a button is involved; only a
    /// primary-button press commits the entry as selected.
    fn handle_mouse(
        &mut self,
        m: &MouseEvent,
        ctx: &mut Context,
        opts: &mut dyn SelectOptions,
    ) -> Result<EventOutcome> {
        if !ctx.capture_mouse() {
            return Ok(EventOutcome::Ignore);
        }
        for i in 0..self.len() {
            if !self.boxes[i].get().contains_point(m.location) {
                continue;
            }
            ctx.take_focus(&mut self.state);
            opts.focused_entry().set(i);
            if m.is_press() {
                if self.selected.get() != i {
                    self.selected.set(i);
                    debug!(id = self.state.id(), to = i, "selection changed by mouse");
                    opts.on_change();
                }
                return Ok(EventOutcome::Handle);
            }
        }
        Ok(EventOutcome::Ignore)
    }

    /// Build the entry row: one styled text fragment per entry with `gap`
    /// between consecutive entries, each fragment reflecting its hit-test
    /// box. Call [`SelectCore::clamp`] first.
    pub fn entry_row(
        &self,
        ctx: &Context,
        opts: &dyn SelectOptions,
        gap: &dyn Fn() -> Element,
    ) -> Element {
        let has_focus = ctx.is_focused(&self.state);
        let selected = self.selected.get();
        let focused_entry = opts.focused_entry().get();
        let mut children = Vec::with_capacity(self.len() * 2);
        self.entries.with(|entries| {
            for (i, entry) in entries.iter().enumerate() {
                if i != 0 {
                    children.push(gap());
                }
                let is_focused = focused_entry == i && has_focus;
                let is_selected = selected == i;
                children.push(
                    dom::text(entry)
                        .styled(opts.style(is_selected, is_focused))
                        .reflect(&self.boxes[i]),
                );
            }
        });
        dom::hbox(children)
    }
}
