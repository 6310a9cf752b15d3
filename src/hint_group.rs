use crate::util::revert_style;
use crate::{WindowHint, WINDOW_HINTS};
use log::debug;
use rat_event::{ct_event, ConsumedEvent, HandleEvent, MouseOnly, Outcome, Regular};
use rat_focus::{FocusFlag, HasFocusFlag};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::prelude::BlockExt;
use ratatui::style::Style;
use ratatui::widgets::{Block, StatefulWidget, Widget};

/// Checkbox list over the window hint catalog.
///
/// Every entry toggles independently, any subset may be active.
/// Arrow keys move the cursor, space flips the entry under it,
/// a mouse click flips the clicked entry.
#[derive(Debug, Default)]
pub struct HintGroup<'a> {
    block: Option<Block<'a>>,
    style: Style,
    focus_style: Option<Style>,
}

/// State for [HintGroup].
#[derive(Debug)]
pub struct HintGroupState {
    /// Widget area, available after render.
    /// __read only__
    pub area: Rect,
    /// Area per catalog entry, available after render.
    /// __read only__
    pub item_areas: Vec<Rect>,

    /// Keyboard cursor into the hint catalog.
    /// __read+write__
    pub lead: usize,
    /// Checked state per catalog entry.
    /// __read+write__
    pub checked: [bool; WINDOW_HINTS.len()],

    /// Focus.
    pub focus: FocusFlag,
}

impl<'a> HintGroup<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block for the group.
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Base style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Style for the cursor entry when the group has focus.
    pub fn focus_style(mut self, style: Style) -> Self {
        self.focus_style = Some(style);
        self
    }
}

impl<'a> StatefulWidget for HintGroup<'a> {
    type State = HintGroupState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.area = area;
        let inner = self.block.inner_if_some(area);

        buf.set_style(area, self.style);
        if let Some(block) = &self.block {
            block.render(area, buf);
        }

        let focus_style = self.focus_style.unwrap_or(revert_style(self.style));

        state.item_areas.clear();
        for (i, hint) in WINDOW_HINTS.iter().enumerate() {
            let row = Rect::new(inner.x, inner.y.saturating_add(i as u16), inner.width, 1)
                .intersection(inner);
            state.item_areas.push(row);
            if row.is_empty() {
                continue;
            }

            let style = if state.lead == i && state.focus.get() {
                focus_style
            } else {
                self.style
            };

            let marker = if state.checked[i] { "[x] " } else { "[ ] " };
            let text = format!("{}{}", marker, hint.label());
            buf.set_stringn(row.x, row.y, text, row.width as usize, style);
        }
    }
}

impl Default for HintGroupState {
    fn default() -> Self {
        Self {
            area: Default::default(),
            item_areas: Default::default(),
            lead: 0,
            checked: [false; WINDOW_HINTS.len()],
            focus: Default::default(),
        }
    }
}

impl HintGroupState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Is the hint at idx checked?
    pub fn hint_active(&self, idx: usize) -> bool {
        self.checked[idx]
    }

    /// Check/uncheck the hint at idx. Idempotent.
    pub fn set_hint(&mut self, idx: usize, active: bool) -> bool {
        if idx < WINDOW_HINTS.len() && self.checked[idx] != active {
            self.checked[idx] = active;
            true
        } else {
            false
        }
    }

    /// Flip the hint at idx.
    pub fn flip_hint(&mut self, idx: usize) -> bool {
        self.set_hint(idx, !self.checked[idx])
    }

    /// Move the cursor.
    pub fn move_to(&mut self, idx: usize) -> bool {
        if idx < WINDOW_HINTS.len() && idx != self.lead {
            self.lead = idx;
            true
        } else {
            false
        }
    }

    /// Iterator over the active hints, in catalog order.
    pub fn active_hints(&self) -> impl Iterator<Item = WindowHint> + '_ {
        WINDOW_HINTS
            .into_iter()
            .enumerate()
            .filter(|(i, _)| self.checked[*i])
            .map(|(_, h)| h)
    }

    fn item_at(&self, pos: Position) -> Option<usize> {
        self.item_areas.iter().position(|v| v.contains(pos))
    }
}

impl HasFocusFlag for HintGroupState {
    fn focus(&self) -> FocusFlag {
        self.focus.clone()
    }

    fn area(&self) -> Rect {
        self.area
    }
}

impl HandleEvent<crossterm::event::Event, Regular, Outcome> for HintGroupState {
    fn handle(&mut self, event: &crossterm::event::Event, _qualifier: Regular) -> Outcome {
        let r = if self.focus.get() {
            match event {
                ct_event!(keycode press Up) => self.move_to(self.lead.saturating_sub(1)).into(),
                ct_event!(keycode press Down) => self.move_to(self.lead + 1).into(),
                ct_event!(keycode press Home) => self.move_to(0).into(),
                ct_event!(keycode press End) => self.move_to(WINDOW_HINTS.len() - 1).into(),
                ct_event!(key press ' ') => {
                    debug!("flip hint {:?}", WINDOW_HINTS[self.lead]);
                    self.flip_hint(self.lead).into()
                }
                _ => Outcome::Continue,
            }
        } else {
            Outcome::Continue
        };

        r.or_else(|| self.handle(event, MouseOnly))
    }
}

impl HandleEvent<crossterm::event::Event, MouseOnly, Outcome> for HintGroupState {
    fn handle(&mut self, event: &crossterm::event::Event, _qualifier: MouseOnly) -> Outcome {
        match event {
            ct_event!(mouse down Left for x,y) => {
                if let Some(idx) = self.item_at(Position::new(*x, *y)) {
                    self.lead = idx;
                    debug!("flip hint {:?}", WINDOW_HINTS[idx]);
                    self.flip_hint(idx);
                    // moving the cursor is a change on its own.
                    Outcome::Changed
                } else {
                    Outcome::Continue
                }
            }
            _ => Outcome::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{HintGroup, HintGroupState};
    use crate::{WindowHint, WINDOW_HINTS};
    use crossterm::event::{
        Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use rat_event::{HandleEvent, Outcome, Regular};
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::widgets::StatefulWidget;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    #[test]
    fn test_default_has_no_active_hints() {
        let state = HintGroupState::new();
        assert_eq!(state.active_hints().count(), 0);
    }

    #[test]
    fn test_space_flips_the_cursor_entry() {
        let mut state = HintGroupState::new();
        state.focus.set(true);

        assert_eq!(state.handle(&key(KeyCode::Down), Regular), Outcome::Changed);
        assert_eq!(
            state.handle(&key(KeyCode::Char(' ')), Regular),
            Outcome::Changed
        );
        assert!(state.hint_active(1));
        assert_eq!(
            state.active_hints().collect::<Vec<_>>(),
            vec![WindowHint::X11BypassWindowManager]
        );

        assert_eq!(
            state.handle(&key(KeyCode::Char(' ')), Regular),
            Outcome::Changed
        );
        assert!(!state.hint_active(1));
    }

    #[test]
    fn test_set_hint_is_idempotent() {
        let mut state = HintGroupState::new();
        assert!(state.set_hint(3, true));
        assert!(!state.set_hint(3, true));
        assert!(state.hint_active(3));
        assert!(state.set_hint(3, false));
        assert!(!state.set_hint(3, false));
    }

    #[test]
    fn test_keys_ignored_without_focus() {
        let mut state = HintGroupState::new();
        assert_eq!(
            state.handle(&key(KeyCode::Char(' ')), Regular),
            Outcome::Continue
        );
        assert_eq!(state.active_hints().count(), 0);
    }

    #[test]
    fn test_click_flips_the_clicked_entry() {
        let mut state = HintGroupState::new();
        let area = Rect::new(0, 0, 32, 16);
        let mut buf = Buffer::empty(area);
        HintGroup::new().render(area, &mut buf, &mut state);
        assert_eq!(state.item_areas.len(), WINDOW_HINTS.len());

        let click = |row: u16| {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: 1,
                row,
                modifiers: KeyModifiers::empty(),
            })
        };
        assert_eq!(state.handle(&click(4), Regular), Outcome::Changed);
        assert!(state.hint_active(4));
        assert_eq!(state.lead, 4);

        assert_eq!(state.handle(&click(4), Regular), Outcome::Changed);
        assert!(!state.hint_active(4));
    }
}
