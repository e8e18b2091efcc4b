//! # TodoInput Component
//!
//! Captures the title of a new task.
//!
//! The text buffer is internal state; `focused` is a prop from the parent.
//! Enter emits `InputEvent::Submit(text)` and clears the buffer. Blank
//! submissions are swallowed so the core never sees an empty title from here.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::components::line_editor::LineEditor;
use crate::tui::event::TuiEvent;

const PLACEHOLDER: &str = "Add a new task...";
/// Border (2) + padding (2)
const HORIZONTAL_OVERHEAD: u16 = 4;
/// Offset from area edge to text (border + padding)
const TEXT_OFFSET: u16 = 2;

/// Height of the rendered input (single line + borders).
pub const INPUT_HEIGHT: u16 = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed)
    Submit(String),
    ContentChanged,
}

pub struct TodoInput {
    editor: LineEditor,
    /// Whether keystrokes currently land here (Prop)
    pub focused: bool,
}

impl Default for TodoInput {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoInput {
    pub fn new() -> Self {
        Self {
            editor: LineEditor::new(),
            focused: true,
        }
    }

    pub fn text(&self) -> &str {
        self.editor.text()
    }
}

impl Component for TodoInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" New task ")
            .padding(Padding::horizontal(1));

        let field_width = area.width.saturating_sub(HORIZONTAL_OVERHEAD);
        let view = self.editor.viewport(field_width);

        let paragraph = if self.editor.text().is_empty() {
            Paragraph::new(PLACEHOLDER).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Paragraph::new(view.text).style(Style::default().fg(Color::White))
        };
        frame.render_widget(paragraph.block(block), area);

        if self.focused && field_width > 0 {
            frame.set_cursor_position((
                area.x + TEXT_OFFSET + view.cursor_col,
                area.y + 1,
            ));
        }
    }
}

impl EventHandler for TodoInput {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Submit => {
                if self.editor.is_blank() {
                    None
                } else {
                    Some(InputEvent::Submit(self.editor.take()))
                }
            }
            other => self
                .editor
                .handle_event(other)
                .then_some(InputEvent::ContentChanged),
        }
    }
}
