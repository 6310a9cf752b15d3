//! Terminal port of the classic window-flags demo.
//!
//! The left two panes compose a window type and a set of window hints,
//! the preview pane on the right is restyled with the combined flags
//! and shows the textual flag summary.

use anyhow::Error;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use log::{debug, error};
use rat_event::{ct_event, ConsumedEvent, HandleEvent, Outcome, Regular};
use rat_focus::{Focus, FocusBuilder, HasFocus};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, StatefulWidget, Widget};
use ratatui::{Frame, Terminal};
use std::cmp::max;
use std::fs;
use std::io;
use std::io::Stdout;
use winflags::{
    FlagSelection, HintGroup, HintGroupState, Preview, PreviewState, TypeGroup, TypeGroupState,
    WINDOW_HINTS,
};

fn main() -> Result<(), Error> {
    setup_logging()?;

    let mut state = ControllerState::new();
    state.update_preview()?;

    run_ui(&mut state)
}

/// Application state: the two option groups, the selection model
/// and the preview.
struct ControllerState {
    focus: Option<Focus>,
    selection: FlagSelection,
    type_group: TypeGroupState,
    hint_group: HintGroupState,
    preview: PreviewState,
}

impl ControllerState {
    fn new() -> Self {
        Self {
            focus: None,
            selection: FlagSelection::new(),
            type_group: TypeGroupState::new(),
            hint_group: HintGroupState::new(),
            preview: PreviewState::new(),
        }
    }

    /// Rebuild the selection from the widget states, combine it and
    /// push the result to the preview. Runs after every change, there
    /// is no incremental path.
    fn update_preview(&mut self) -> Result<(), winflags::Error> {
        self.selection.set_type(self.type_group.window_type());
        for (i, hint) in WINDOW_HINTS.into_iter().enumerate() {
            self.selection
                .toggle_hint(hint, self.hint_group.hint_active(i));
        }

        let flags = self.selection.combined_flags();
        debug!("combined flags {:?}", flags);
        self.preview.set_flags(flags)
    }
}

impl HasFocus for ControllerState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.widget(&self.type_group);
        builder.widget(&self.hint_group);
    }
}

fn run_ui(state: &mut ControllerState) -> Result<(), Error> {
    io::stdout().execute(EnterAlternateScreen)?;
    io::stdout().execute(EnableMouseCapture)?;
    io::stdout().execute(Hide)?;
    enable_raw_mode()?;

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let r = event_loop(&mut terminal, state);

    disable_raw_mode()?;
    io::stdout().execute(Show)?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;

    if let Err(e) = &r {
        error!("{:?}", e);
    }
    r
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state: &mut ControllerState,
) -> Result<(), Error> {
    // initial focus
    let mut focus = FocusBuilder::rebuild(state, None);
    focus.first();
    state.focus = Some(focus);

    repaint(terminal, state)?;

    loop {
        let event = crossterm::event::read()?;

        if matches!(
            &event,
            ct_event!(key press CONTROL-'q') | ct_event!(keycode press Esc)
        ) {
            break Ok(());
        }

        if handle(&event, state)?.is_consumed() {
            repaint(terminal, state)?;
        }
    }
}

fn repaint(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state: &mut ControllerState,
) -> Result<(), Error> {
    terminal.draw(|frame| render_app(frame, state))?;
    Ok(())
}

fn render_app(frame: &mut Frame<'_>, state: &mut ControllerState) {
    let area = frame.area();

    let layout = Layout::vertical([
        Constraint::Fill(1), //
        Constraint::Length(1),
    ])
    .split(area);

    let columns = Layout::horizontal([
        Constraint::Length(20),
        Constraint::Length(34),
        Constraint::Fill(1),
    ])
    .split(layout[0]);

    TypeGroup::new()
        .block(Block::bordered().title("Type"))
        .style(Style::new().white().on_black())
        .select_style(Style::new().light_yellow().on_black())
        .focus_style(Style::new().black().on_cyan())
        .render(columns[0], frame.buffer_mut(), &mut state.type_group);

    HintGroup::new()
        .block(Block::bordered().title("Hints"))
        .style(Style::new().white().on_black())
        .focus_style(Style::new().black().on_cyan())
        .render(columns[1], frame.buffer_mut(), &mut state.hint_group);

    Preview::new()
        .style(Style::new().white().on_dark_gray())
        .border_style(Style::new().light_blue())
        .title_style(Style::new().light_blue())
        .render(columns[2], frame.buffer_mut(), &mut state.preview);

    Line::from("Tab: focus | ↑/↓: move | Space: toggle | Ctrl-Q: quit")
        .style(Style::new().dark_gray().on_black())
        .render(layout[1], frame.buffer_mut());
}

fn handle(event: &crossterm::event::Event, state: &mut ControllerState) -> Result<Outcome, Error> {
    let old_focus = state.focus.take();
    let mut focus = FocusBuilder::rebuild(state, old_focus);
    let f = focus.handle(event, Regular);
    state.focus = Some(focus);

    let mut r = match event {
        ct_event!(resized) => Outcome::Changed,
        _ => Outcome::Continue,
    };
    r = r.or_else(|| state.type_group.handle(event, Regular));
    r = r.or_else(|| state.hint_group.handle(event, Regular));

    if r.is_consumed() {
        state.update_preview()?;
    }

    Ok(max(f, r))
}

fn setup_logging() -> Result<(), Error> {
    _ = fs::remove_file("log.log");
    fern::Dispatch::new()
        .format(|out, message, _record| out.finish(format_args!("{}", message)))
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file("log.log")?)
        .apply()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::ControllerState;

    #[test]
    fn test_default_preview_is_plain_window() {
        let mut state = ControllerState::new();
        state.update_preview().unwrap();
        assert_eq!(state.preview.text(), "Window");
    }

    #[test]
    fn test_update_preview_combines_widget_states() {
        let mut state = ControllerState::new();
        state.type_group.select(1); // Dialog
        state.hint_group.set_hint(4, true); // WindowTitleHint
        state.hint_group.set_hint(11, true); // WindowStaysOnTopHint
        state.update_preview().unwrap();
        assert_eq!(
            state.preview.text(),
            "Dialog\n| WindowTitleHint\n| WindowStaysOnTopHint"
        );
    }

    #[test]
    fn test_unchecking_removes_the_hint_line() {
        let mut state = ControllerState::new();
        state.hint_group.set_hint(2, true); // FramelessWindowHint
        state.update_preview().unwrap();
        assert_eq!(state.preview.text(), "Window\n| FramelessWindowHint");

        state.hint_group.set_hint(2, false);
        state.update_preview().unwrap();
        assert_eq!(state.preview.text(), "Window");
    }
}
