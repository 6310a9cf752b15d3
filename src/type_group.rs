use crate::util::revert_style;
use crate::{WindowType, WINDOW_TYPES};
use log::debug;
use rat_event::{ct_event, ConsumedEvent, HandleEvent, MouseOnly, Outcome, Regular};
use rat_focus::{FocusFlag, HasFocusFlag};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::prelude::BlockExt;
use ratatui::style::Style;
use ratatui::widgets::{Block, StatefulWidget, Widget};

/// Radio-button list over the window type catalog.
///
/// Exactly one entry is active at any time, there is no "none"
/// selection. Arrow keys move the active entry, a mouse click
/// activates the clicked entry.
#[derive(Debug, Default)]
pub struct TypeGroup<'a> {
    block: Option<Block<'a>>,
    style: Style,
    select_style: Option<Style>,
    focus_style: Option<Style>,
}

/// State for [TypeGroup].
#[derive(Debug)]
pub struct TypeGroupState {
    /// Widget area, available after render.
    /// __read only__
    pub area: Rect,
    /// Area per catalog entry, available after render.
    /// __read only__
    pub item_areas: Vec<Rect>,

    /// Index of the active entry into the type catalog.
    /// __read+write__
    pub selected: usize,

    /// Focus.
    pub focus: FocusFlag,
}

impl<'a> TypeGroup<'a> {
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

    /// Style for the active entry.
    pub fn select_style(mut self, style: Style) -> Self {
        self.select_style = Some(style);
        self
    }

    /// Style for the active entry when the group has focus.
    pub fn focus_style(mut self, style: Style) -> Self {
        self.focus_style = Some(style);
        self
    }
}

impl<'a> StatefulWidget for TypeGroup<'a> {
    type State = TypeGroupState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.area = area;
        let inner = self.block.inner_if_some(area);

        buf.set_style(area, self.style);
        if let Some(block) = &self.block {
            block.render(area, buf);
        }

        let select_style = self.select_style.unwrap_or(revert_style(self.style));
        let focus_style = self.focus_style.unwrap_or(select_style);

        state.item_areas.clear();
        for (i, window_type) in WINDOW_TYPES.iter().enumerate() {
            let row = Rect::new(inner.x, inner.y.saturating_add(i as u16), inner.width, 1)
                .intersection(inner);
            state.item_areas.push(row);
            if row.is_empty() {
                continue;
            }

            let style = if state.selected == i {
                if state.focus.get() {
                    focus_style
                } else {
                    select_style
                }
            } else {
                self.style
            };

            let marker = if state.selected == i { "(x) " } else { "( ) " };
            let text = format!("{}{}", marker, window_type.label());
            buf.set_stringn(row.x, row.y, text, row.width as usize, style);
        }
    }
}

impl Default for TypeGroupState {
    fn default() -> Self {
        Self {
            area: Default::default(),
            item_areas: Default::default(),
            selected: 0,
            focus: Default::default(),
        }
    }
}

impl TypeGroupState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active window type.
    pub fn window_type(&self) -> WindowType {
        WINDOW_TYPES[self.selected]
    }

    /// Activate the entry at idx. Out-of-range values are ignored.
    pub fn select(&mut self, idx: usize) -> bool {
        if idx < WINDOW_TYPES.len() && idx != self.selected {
            self.selected = idx;
            true
        } else {
            false
        }
    }

    /// Activate the previous entry.
    pub fn select_prev(&mut self) -> bool {
        self.select(self.selected.saturating_sub(1))
    }

    /// Activate the next entry.
    pub fn select_next(&mut self) -> bool {
        self.select(self.selected + 1)
    }

    fn item_at(&self, pos: Position) -> Option<usize> {
        self.item_areas.iter().position(|v| v.contains(pos))
    }
}

impl HasFocusFlag for TypeGroupState {
    fn focus(&self) -> FocusFlag {
        self.focus.clone()
    }

    fn area(&self) -> Rect {
        self.area
    }
}

impl HandleEvent<crossterm::event::Event, Regular, Outcome> for TypeGroupState {
    fn handle(&mut self, event: &crossterm::event::Event, _qualifier: Regular) -> Outcome {
        let r = if self.focus.get() {
            match event {
                ct_event!(keycode press Up) => self.select_prev().into(),
                ct_event!(keycode press Down) => self.select_next().into(),
                ct_event!(keycode press Home) => self.select(0).into(),
                ct_event!(keycode press End) => self.select(WINDOW_TYPES.len() - 1).into(),
                _ => Outcome::Continue,
            }
        } else {
            Outcome::Continue
        };

        r.or_else(|| self.handle(event, MouseOnly))
    }
}

impl HandleEvent<crossterm::event::Event, MouseOnly, Outcome> for TypeGroupState {
    fn handle(&mut self, event: &crossterm::event::Event, _qualifier: MouseOnly) -> Outcome {
        match event {
            ct_event!(mouse down Left for x,y) => {
                if let Some(idx) = self.item_at(Position::new(*x, *y)) {
                    debug!("select type {:?}", WINDOW_TYPES[idx]);
                    self.select(idx).into()
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
    use super::{TypeGroup, TypeGroupState};
    use crate::{WindowType, WINDOW_TYPES};
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
    fn test_default_selects_first_entry() {
        let state = TypeGroupState::new();
        assert_eq!(state.window_type(), WindowType::Window);
    }

    #[test]
    fn test_keys_move_the_selection() {
        let mut state = TypeGroupState::new();
        state.focus.set(true);

        assert_eq!(state.handle(&key(KeyCode::Down), Regular), Outcome::Changed);
        assert_eq!(state.window_type(), WindowType::Dialog);

        assert_eq!(state.handle(&key(KeyCode::Up), Regular), Outcome::Changed);
        assert_eq!(state.window_type(), WindowType::Window);

        // already at the top
        assert_eq!(state.handle(&key(KeyCode::Up), Regular), Outcome::Unchanged);

        assert_eq!(state.handle(&key(KeyCode::End), Regular), Outcome::Changed);
        assert_eq!(state.window_type(), WindowType::SplashScreen);
        assert_eq!(
            state.handle(&key(KeyCode::Down), Regular),
            Outcome::Unchanged
        );
    }

    #[test]
    fn test_keys_ignored_without_focus() {
        let mut state = TypeGroupState::new();
        assert_eq!(state.handle(&key(KeyCode::Down), Regular), Outcome::Continue);
        assert_eq!(state.window_type(), WindowType::Window);
    }

    #[test]
    fn test_click_selects_the_clicked_entry() {
        let mut state = TypeGroupState::new();
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        TypeGroup::new().render(area, &mut buf, &mut state);
        assert_eq!(state.item_areas.len(), WINDOW_TYPES.len());

        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 2,
            row: 4,
            modifiers: KeyModifiers::empty(),
        });
        assert_eq!(state.handle(&click, Regular), Outcome::Changed);
        assert_eq!(state.window_type(), WINDOW_TYPES[4]);
    }
}
