//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! ```text
//! TuiEvent ─▶ dispatch()
//!               ├─ Ctrl+C              → Action::Quit
//!               ├─ dialog open?        → DialogState (continuation → update)
//!               ├─ Ctrl+T              → toggle selected row
//!               ├─ Tab / click         → move focus
//!               ├─ Focus::Input        → TodoInput  (Submit → AddTask)
//!               └─ Focus::List         → TasksListState (row presses → Action)
//! ```
//!
//! Every action goes through `core::action::update`, after which the list
//! adopts the new snapshot and the returned `Effect` is applied.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms in `poll` and only
//! redraws after an event arrived. All pending events are drained before
//! the next frame.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

pub mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::layout::{Position, Rect};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::Home;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    DialogEvent, DialogState, InputEvent, TasksListState, TodoInput,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// Which pane receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Typing goes to the new-task field.
    Input,
    /// Arrow keys move through rows; row buttons have shortcuts.
    List,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub todo_input: TodoInput,
    pub tasks_list: TasksListState,
    /// Open modal (None = hidden)
    pub dialog: Option<DialogState>,
    pub focus: Focus,
    /// Header title from `[ui] title`
    pub title: String,
    /// Where the input was drawn last frame (for click-to-focus)
    pub input_area: Rect,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        let mut tasks_list = TasksListState::new();
        tasks_list.striped = config.striped_rows;
        Self {
            todo_input: TodoInput::new(),
            tasks_list,
            dialog: None,
            focus: Focus::Input, // User expects to type immediately
            title: config.title.clone(),
            input_area: Rect::default(),
        }
    }

    fn focus_input(&mut self) {
        self.focus = Focus::Input;
        self.tasks_list.blur_all();
    }

    fn focus_list(&mut self) {
        self.focus = Focus::List;
        self.tasks_list.ensure_selection();
    }
}

struct TerminalModeGuard {
    mouse: bool,
}

impl TerminalModeGuard {
    fn new(mouse: bool) -> std::io::Result<Self> {
        // Kitty keyboard protocol is harmlessly ignored by terminals without it
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        if mouse {
            execute!(stdout(), EnableMouseCapture)?;
        }
        info!(
            "Terminal modes enabled (bracketed paste, steady block cursor, keyboard enhancement, mouse: {})",
            mouse
        );
        Ok(Self { mouse })
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        if self.mouse {
            let _ = execute!(stdout(), DisableMouseCapture);
        }
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableBracketedPaste,
            Hide
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut home = Home::new();
    let mut tui = TuiState::new(&config);

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new(config.mouse)
        .inspect_err(|e| warn!("Failed to enable terminal modes: {}", e))
        .ok();

    let result = (|| -> std::io::Result<()> {
        let mut needs_redraw = true; // Force first frame
        loop {
            if needs_redraw {
                terminal.draw(|f| ui::draw_ui(f, &home, &mut tui))?;
                needs_redraw = false;
            }

            let first_event = poll_event_timeout(IDLE_POLL);
            if first_event.is_some() {
                needs_redraw = true;
            }

            // Process first event + drain ALL pending events before next draw
            for event in first_event
                .into_iter()
                .chain(std::iter::from_fn(poll_event_immediate))
            {
                if dispatch(&mut home, &mut tui, event) {
                    return Ok(());
                }
            }
        }
    })();

    drop(terminal_mode_guard);
    ratatui::restore();
    info!("Exiting with {} task(s)", home.task_count());
    result
}

/// Route one event. Returns `true` when the app should quit.
pub fn dispatch(home: &mut Home, tui: &mut TuiState, event: TuiEvent) -> bool {
    debug!("Event: {:?}", event);
    match event {
        // Resize just needs a redraw (the loop already flagged one)
        TuiEvent::Resize => false,
        // Ctrl+C always quits, dialog or not
        TuiEvent::ForceQuit => apply(home, tui, Action::Quit),
        _ if tui.dialog.is_some() => dispatch_dialog(home, tui, &event),
        // Acts on the highlighted row, so the list takes focus first
        TuiEvent::ToggleDone => {
            if tui.tasks_list.selected.is_none() {
                return false;
            }
            tui.focus = Focus::List;
            match tui.tasks_list.toggle_selected() {
                Some(action) => apply(home, tui, action),
                None => false,
            }
        }
        TuiEvent::Tab => {
            match tui.focus {
                Focus::Input => tui.focus_list(),
                Focus::List => tui.focus_input(),
            }
            false
        }
        TuiEvent::ScrollUp => {
            tui.tasks_list.scroll_up();
            false
        }
        TuiEvent::ScrollDown => {
            tui.tasks_list.scroll_down();
            false
        }
        TuiEvent::MouseClick(column, row) => click(home, tui, column, row),
        _ => match tui.focus {
            Focus::Input => dispatch_input(home, tui, &event),
            Focus::List => dispatch_list(home, tui, &event),
        },
    }
}

fn dispatch_dialog(home: &mut Home, tui: &mut TuiState, event: &TuiEvent) -> bool {
    let Some(dialog) = tui.dialog.as_mut() else {
        return false;
    };
    match dialog.handle_event(event) {
        Some(DialogEvent::Pressed(continuation)) => {
            tui.dialog = None;
            match continuation {
                Some(action) => apply(home, tui, action),
                None => false,
            }
        }
        Some(DialogEvent::Dismissed) => {
            tui.dialog = None;
            false
        }
        None => false,
    }
}

fn dispatch_input(home: &mut Home, tui: &mut TuiState, event: &TuiEvent) -> bool {
    if matches!(event, TuiEvent::Escape) {
        tui.focus_list();
        return false;
    }
    match tui.todo_input.handle_event(event) {
        Some(InputEvent::Submit(title)) => apply(home, tui, Action::AddTask(title)),
        Some(InputEvent::ContentChanged) | None => false,
    }
}

fn dispatch_list(home: &mut Home, tui: &mut TuiState, event: &TuiEvent) -> bool {
    // Row fields get every key while one of them holds focus
    if tui.tasks_list.focused_row().is_none() {
        match event {
            TuiEvent::InputChar('q') => return apply(home, tui, Action::Quit),
            TuiEvent::Escape => {
                tui.focus_input();
                return false;
            }
            _ => {}
        }
    }
    match tui.tasks_list.handle_event(event) {
        Some(action) => apply(home, tui, action),
        None => false,
    }
}

fn click(home: &mut Home, tui: &mut TuiState, column: u16, row: u16) -> bool {
    if tui.input_area.contains(Position { x: column, y: row }) {
        tui.focus_input();
        return false;
    }
    if !tui.tasks_list.last_area.contains(Position { x: column, y: row }) {
        return false;
    }
    tui.focus = Focus::List;
    match tui.tasks_list.click(column, row) {
        Some(action) => apply(home, tui, action),
        None => false,
    }
}

/// Run `action` through the core and carry out the resulting effect.
fn apply(home: &mut Home, tui: &mut TuiState, action: Action) -> bool {
    let effect = update(home, action);
    tui.tasks_list.sync(home.tasks());
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::ShowNotice(notice) => {
            tui.dialog = Some(DialogState::notice(notice));
            false
        }
        Effect::ConfirmRemoval(id) => {
            tui.dialog = Some(DialogState::confirm_removal(id));
            false
        }
    }
}
