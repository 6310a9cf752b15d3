use crate::render::render_flags;
use crate::{Error, WindowFlags};
use log::debug;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Span, Text};
use ratatui::widgets::{Block, StatefulWidget, Widget};

/// Preview window.
///
/// Takes the combined flag value and restyles itself with it, as far
/// as a terminal pane can: the frame goes away for
/// [WindowFlags::FRAMELESS_WINDOW_HINT], the title line and the
/// title-bar buttons follow their hints, the stacking hints show up as
/// markers. The body displays the rendered flag summary.
#[derive(Debug, Default)]
pub struct Preview {
    style: Style,
    border_style: Style,
    title_style: Style,
}

/// State for [Preview].
#[derive(Debug)]
pub struct PreviewState {
    /// Widget area, available after render.
    /// __read only__
    pub area: Rect,

    /// Combined flags driving the presentation.
    flags: WindowFlags,
    /// Flag summary for the body, recomputed by [set_flags](Self::set_flags).
    text: String,
}

impl Preview {
    pub fn new() -> Self {
        Self::default()
    }

    /// Base style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Border style.
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Title style.
    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }
}

impl StatefulWidget for Preview {
    type State = PreviewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.area = area;

        buf.set_style(area, self.style);

        let flags = state.flags;
        let inner = if flags.contains(WindowFlags::FRAMELESS_WINDOW_HINT) {
            area
        } else {
            let block = Block::bordered().border_style(self.border_style);
            let inner = block.inner(area);
            (&block).render(area, buf);

            self.render_title_bar(flags, area, buf);
            inner
        };

        Text::from(state.text.as_str()).render(inner, buf);
    }
}

impl Preview {
    fn render_title_bar(&self, flags: WindowFlags, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 1 {
            return;
        }

        if flags.contains(WindowFlags::WINDOW_TITLE_HINT) {
            let mut title = String::new();
            if flags.contains(WindowFlags::WINDOW_SYSTEM_MENU_HINT) {
                title.push_str("≡ ");
            }
            if flags.contains(WindowFlags::WINDOW_STAYS_ON_TOP_HINT) {
                title.push_str("▲ ");
            }
            if flags.contains(WindowFlags::WINDOW_STAYS_ON_BOTTOM_HINT) {
                title.push_str("▼ ");
            }
            title.push_str("Preview");

            let title_area = Rect::new(
                area.x + 2,
                area.y,
                area.width.saturating_sub(4).min(title.chars().count() as u16),
                1,
            );
            Span::from(title.as_str())
                .style(self.title_style)
                .render(title_area, buf);
        }

        let mut buttons = String::new();
        if flags.contains(WindowFlags::WINDOW_SHADE_BUTTON_HINT) {
            buttons.push('˄');
        }
        if flags.contains(WindowFlags::WINDOW_MINIMIZE_BUTTON_HINT) {
            buttons.push('_');
        }
        if flags.contains(WindowFlags::WINDOW_MAXIMIZE_BUTTON_HINT) {
            buttons.push('□');
        }
        if flags.contains(WindowFlags::WINDOW_CONTEXT_HELP_BUTTON_HINT) {
            buttons.push('?');
        }
        if flags.contains(WindowFlags::WINDOW_CLOSE_BUTTON_HINT) {
            buttons.push('\u{2A2F}');
        }

        if !buttons.is_empty() {
            let width = (buttons.chars().count() as u16).min(area.width.saturating_sub(4));
            let buttons_area = Rect::new(
                area.right().saturating_sub(width + 2),
                area.y,
                width,
                1,
            );
            Span::from(buttons.as_str())
                .style(self.title_style)
                .render(buttons_area, buf);
        }
    }
}

impl Default for PreviewState {
    fn default() -> Self {
        Self {
            area: Default::default(),
            flags: WindowFlags::empty(),
            text: Default::default(),
        }
    }
}

impl PreviewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current flags.
    pub fn flags(&self) -> WindowFlags {
        self.flags
    }

    /// The flag summary displayed in the body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Apply a combined flag value and recompute the displayed summary.
    ///
    /// Fails if the type sub-range matches no cataloged window type.
    /// The previous flags stay in place then.
    pub fn set_flags(&mut self, flags: WindowFlags) -> Result<(), Error> {
        debug!("set preview flags {:?}", flags);
        self.text = render_flags(flags)?;
        self.flags = flags;
        Ok(())
    }
}
