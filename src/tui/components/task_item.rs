//! # TaskItem Component
//!
//! One row of the task list: marker, title, edit/cancel button, trash.
//!
//! ```text
//!  [✓] Buy milk                              ✎ │ ⌫
//!  [ ] Walk dog▏                             ✕ │ ⌫   ← editing, trash dimmed
//! ```
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TaskItemState` holds the row's editing state and lives in
//!   `TasksListState`, keyed by task id
//! - `TaskItem` is created each frame with borrowed props and renders as a
//!   `Widget` inside the list's scroll view
//!
//! ## Editing
//!
//! ```text
//!            start (✎ / e / Enter)
//!   Viewing ───────────────────────▶ Editing  (field focused)
//!      ▲                               │
//!      ├──── commit (Enter) ───────────┤  emits Action::EditTask
//!      └──── cancel (✕ / Esc / e) ─────┘  buffer reset to task.title
//! ```
//!
//! Focus follows the editing flag in the same transition: entering Editing
//! focuses the field, leaving it blurs. While Editing the trash button is
//! disabled. The marker stays live in both states.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Paragraph, Widget};

use crate::core::action::Action;
use crate::core::task::Task;
use crate::tui::components::line_editor::{LineEditor, Viewport};
use crate::tui::event::TuiEvent;

const MARKER_WIDTH: u16 = 4;
const BUTTON_WIDTH: u16 = 3;
pub const ROW_HEIGHT: u16 = 1;

const STRIPE_BG: Color = Color::Indexed(235);
const SELECTED_BG: Color = Color::Indexed(238);

/// Transient, non-authoritative state of a single row.
#[derive(Debug, Clone)]
pub struct TaskItemState {
    is_editing: bool,
    edited_title: LineEditor,
    has_focus: bool,
}

impl TaskItemState {
    pub fn new(task: &Task) -> Self {
        Self {
            is_editing: false,
            edited_title: LineEditor::with_text(&task.title),
            has_focus: false,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    pub fn edited_title(&self) -> &str {
        self.edited_title.text()
    }

    fn set_editing(&mut self, editing: bool) {
        self.is_editing = editing;
        self.has_focus = editing;
    }

    pub fn start_editing(&mut self) {
        self.set_editing(true);
    }

    /// Discard unsaved text and go back to Viewing.
    pub fn cancel_editing(&mut self, task: &Task) {
        self.edited_title.set_text(&task.title);
        self.set_editing(false);
    }

    /// Leave Editing and hand the new title to the owner.
    pub fn submit_editing(&mut self, task: &Task) -> Action {
        let action = Action::EditTask {
            id: task.id,
            title: self.edited_title.text().to_string(),
        };
        self.set_editing(false);
        action
    }

    /// Give the field focus again. Only an editing field can hold focus.
    pub fn focus(&mut self) {
        self.has_focus = self.is_editing;
    }

    pub fn blur(&mut self) {
        self.has_focus = false;
    }

    pub fn toggle_intent(task: &Task) -> Action {
        Action::ToggleTaskDone(task.id)
    }

    /// `None` while Editing: the trash button is disabled mid-edit.
    pub fn remove_intent(&self, task: &Task) -> Option<Action> {
        (!self.is_editing).then_some(Action::RemoveTask(task.id))
    }

    /// The edit button doubles as the close button while Editing.
    pub fn press_edit_button(&mut self, task: &Task) {
        if self.is_editing {
            self.cancel_editing(task);
        } else {
            self.start_editing();
        }
    }

    /// A press on one of the row's regions.
    pub fn press(&mut self, region: RowRegion, task: &Task) -> Option<Action> {
        match region {
            RowRegion::Marker => Some(Self::toggle_intent(task)),
            RowRegion::Title => {
                self.focus();
                None
            }
            RowRegion::EditButton => {
                self.press_edit_button(task);
                None
            }
            RowRegion::RemoveButton => self.remove_intent(task),
        }
    }

    /// Keystrokes while the field has focus.
    pub fn handle_key(&mut self, task: &Task, event: &TuiEvent) -> Option<Action> {
        if !self.has_focus {
            return None;
        }
        match event {
            TuiEvent::Submit => Some(self.submit_editing(task)),
            TuiEvent::Escape => {
                self.cancel_editing(task);
                None
            }
            other => {
                self.edited_title.handle_event(other);
                None
            }
        }
    }

    /// Visible part of the title for a field `width` columns wide.
    pub fn title_viewport(&mut self, width: u16) -> Viewport {
        if self.is_editing {
            self.edited_title.viewport(width)
        } else {
            Viewport {
                text: self.edited_title.text().to_string(),
                cursor_col: 0,
            }
        }
    }
}

/// Clickable parts of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRegion {
    Marker,
    Title,
    EditButton,
    RemoveButton,
}

/// Column split of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    pub marker: Rect,
    pub title: Rect,
    pub edit: Rect,
    pub separator: Rect,
    pub remove: Rect,
}

impl RowLayout {
    pub fn new(area: Rect) -> Self {
        let [pad, marker, title, edit, separator, remove] = Layout::horizontal([
            Constraint::Length(1),
            Constraint::Length(MARKER_WIDTH),
            Constraint::Min(0),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(1),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .areas(area);
        Self {
            marker: marker.union(pad),
            title,
            edit,
            separator,
            remove,
        }
    }

    pub fn region_at(&self, column: u16) -> Option<RowRegion> {
        let within = |r: Rect| column >= r.x && column < r.x + r.width;
        if within(self.marker) {
            Some(RowRegion::Marker)
        } else if within(self.title) {
            Some(RowRegion::Title)
        } else if within(self.edit) {
            Some(RowRegion::EditButton)
        } else if within(self.remove) {
            Some(RowRegion::RemoveButton)
        } else {
            None
        }
    }
}

/// Transient row renderer.
pub struct TaskItem<'a> {
    pub task: &'a Task,
    pub state: &'a TaskItemState,
    /// Pre-scrolled title text (see `TaskItemState::title_viewport`)
    pub title: Viewport,
    pub index: usize,
    pub is_selected: bool,
    pub striped: bool,
}

impl TaskItem<'_> {
    fn background(&self) -> Style {
        if self.is_selected {
            Style::default().bg(SELECTED_BG)
        } else if self.striped && self.index % 2 == 0 {
            Style::default().bg(STRIPE_BG)
        } else {
            Style::default()
        }
    }
}

pub fn marker_symbol(done: bool) -> &'static str {
    if done { "[✓]" } else { "[ ]" }
}

impl Widget for TaskItem<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let background = self.background();
        buf.set_style(area, background);
        let layout = RowLayout::new(area);

        let marker_style = if self.task.done {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        // Skip the padding column folded into `marker`.
        let marker_area = Rect {
            x: layout.marker.x + 1,
            width: layout.marker.width.saturating_sub(1),
            ..layout.marker
        };
        Span::styled(marker_symbol(self.task.done), marker_style).render(marker_area, buf);

        let mut title_style = if self.task.done {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(Color::White)
        };
        if self.state.is_editing() {
            title_style = Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::UNDERLINED);
            if !self.state.has_focus() {
                title_style = title_style.add_modifier(Modifier::DIM);
            }
        }
        Paragraph::new(self.title.text)
            .style(title_style)
            .render(layout.title, buf);

        let edit_symbol = if self.state.is_editing() { " ✕ " } else { " ✎ " };
        Span::styled(edit_symbol, Style::default().fg(Color::Cyan)).render(layout.edit, buf);

        Span::styled(
            "│",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        )
        .render(layout.separator, buf);

        // Disabled while editing: drawn at reduced intensity.
        let remove_style = if self.state.is_editing() {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::Red)
        };
        Span::styled(" ⌫ ", remove_style).render(layout.remove, buf);
    }
}
