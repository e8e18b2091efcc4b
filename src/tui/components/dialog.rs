//! # Dialog Component
//!
//! Centered modal for the two user-facing prompts: the duplicate-title
//! notice and the remove confirmation.
//!
//! Each button carries its own continuation, an `Option<Action>` handed
//! back to the event loop when the button is pressed. Opening the dialog
//! doesn't block anything; the continuation fires later as its own event.
//! Esc dismisses without firing any continuation.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `DialogState` lives in `TuiState` while the dialog is open
//! - `Dialog` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph, Wrap};

use crate::core::action::{Action, Notice, REMOVE_MESSAGE, REMOVE_TITLE};
use crate::core::task::TaskId;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const MAX_WIDTH: u16 = 56;
/// Borders (2) + horizontal padding (2)
const HORIZONTAL_OVERHEAD: u16 = 4;
/// Borders (2) + blank line + button row
const VERTICAL_OVERHEAD: u16 = 4;

pub struct DialogButton {
    pub label: &'static str,
    pub on_press: Option<Action>,
}

pub struct DialogState {
    pub title: String,
    pub message: String,
    pub buttons: Vec<DialogButton>,
    pub selected: usize,
}

/// Events emitted by the dialog. Both close it.
#[derive(Debug, PartialEq, Eq)]
pub enum DialogEvent {
    /// A button was pressed; carries its continuation.
    Pressed(Option<Action>),
    /// Closed without choosing.
    Dismissed,
}

impl DialogState {
    /// Informational prompt with a single dismiss button.
    pub fn notice(notice: Notice) -> Self {
        Self {
            title: notice.title,
            message: notice.message,
            buttons: vec![DialogButton {
                label: "OK",
                on_press: None,
            }],
            selected: 0,
        }
    }

    /// Remove confirmation. "No" is pre-selected.
    pub fn confirm_removal(id: TaskId) -> Self {
        Self {
            title: REMOVE_TITLE.to_string(),
            message: REMOVE_MESSAGE.to_string(),
            buttons: vec![
                DialogButton {
                    label: "Yes",
                    on_press: Some(Action::ConfirmRemoveTask(id)),
                },
                DialogButton {
                    label: "No",
                    on_press: None,
                },
            ],
            selected: 1,
        }
    }

    fn press(&mut self, index: usize) -> Option<DialogEvent> {
        let button = self.buttons.get_mut(index)?;
        Some(DialogEvent::Pressed(button.on_press.take()))
    }

    /// Rendered height for a dialog `width` columns wide.
    pub fn calculate_height(&self, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            return VERTICAL_OVERHEAD + 1;
        }
        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);
        let lines = textwrap::wrap(&self.message, options);
        (lines.len() as u16).max(1) + VERTICAL_OVERHEAD
    }
}

impl EventHandler for DialogState {
    type Event = DialogEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Escape => Some(DialogEvent::Dismissed),
            TuiEvent::CursorLeft | TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorRight | TuiEvent::CursorDown | TuiEvent::Tab => {
                self.selected = (self.selected + 1) % self.buttons.len().max(1);
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar(' ') => self.press(self.selected),
            // First letter of a label picks that button: y / n / o
            TuiEvent::InputChar(c) => {
                let index = self.buttons.iter().position(|b| {
                    b.label
                        .chars()
                        .next()
                        .is_some_and(|first| first.eq_ignore_ascii_case(c))
                })?;
                self.press(index)
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the dialog overlay.
pub struct Dialog<'a> {
    state: &'a DialogState,
}

impl<'a> Dialog<'a> {
    pub fn new(state: &'a DialogState) -> Self {
        Self { state }
    }
}

impl Component for Dialog<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = MAX_WIDTH.min(area.width.saturating_sub(4));
        let height = self.state.calculate_height(width).min(area.height);
        let overlay = centered_rect(width, height, area);

        frame.render_widget(Clear, overlay);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Yellow))
            .title(format!(" {} ", self.state.title))
            .title_alignment(Alignment::Left)
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let [message_area, _, buttons_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let message = Paragraph::new(self.state.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true });
        frame.render_widget(message, message_area);

        let mut spans = Vec::new();
        for (i, button) in self.state.buttons.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let style = if i == self.state.selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!("[ {} ]", button.label), style));
        }
        frame.render_widget(Line::from(spans).right_aligned(), buttons_area);
    }
}

/// Center a `width` x `height` rect inside `outer`.
fn centered_rect(width: u16, height: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(center_v);
    center
}
