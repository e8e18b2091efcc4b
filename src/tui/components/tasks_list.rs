//! # TasksList Component
//!
//! Scrollable list of task rows.
//!
//! ## Responsibilities
//!
//! - Render one `TaskItem` per task, in collection order
//! - Keep per-row editing state (`TaskItemState`) keyed by task id
//! - Keyboard selection and scrolling
//! - Mouse hit testing of row regions
//!
//! ## Architecture
//!
//! `TasksListState` is persistent (lives in `TuiState`) and holds the last
//! snapshot published by the core via [`TasksListState::sync`]. `TasksList`
//! is a transient component created each frame around `&mut TasksListState`.
//!
//! The list never changes tasks itself. Row presses become `Action`s and
//! travel back up to `update()` untouched.

use std::collections::HashMap;

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::action::Action;
use crate::core::task::{Task, TaskId};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::task_item::{
    ROW_HEIGHT, RowLayout, RowRegion, TaskItem, TaskItemState,
};
use crate::tui::event::TuiEvent;

const EMPTY_HINT: &str = "No tasks yet. Type one above and press Enter.";

pub struct TasksListState {
    /// Last snapshot published by the core
    tasks: Vec<Task>,
    /// Row editing state, keyed by task id
    rows: HashMap<TaskId, TaskItemState>,
    /// Currently selected row index
    pub selected: Option<usize>,
    pub scroll_state: ScrollViewState,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// Area rows were drawn into last frame (for hit testing)
    pub last_area: Rect,
    /// Alternate row backgrounds (Prop)
    pub striped: bool,
}

impl Default for TasksListState {
    fn default() -> Self {
        Self::new()
    }
}

impl TasksListState {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            rows: HashMap::new(),
            selected: None,
            scroll_state: ScrollViewState::default(),
            viewport_height: 0,
            last_area: Rect::default(),
            striped: true,
        }
    }

    /// Adopt a new snapshot from the core.
    ///
    /// Rows for vanished tasks are dropped, new tasks get a fresh row in
    /// Viewing state, and the selection is clamped to the new length.
    pub fn sync(&mut self, tasks: &[Task]) {
        self.rows
            .retain(|id, _| tasks.iter().any(|task| task.id == *id));
        for task in tasks {
            self.rows
                .entry(task.id)
                .or_insert_with(|| TaskItemState::new(task));
        }
        self.tasks = tasks.to_vec();

        self.selected = match (self.selected, self.tasks.len()) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => None,
        };
        self.clamp_scroll();
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn row(&self, id: TaskId) -> Option<&TaskItemState> {
        self.rows.get(&id)
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.selected.and_then(|i| self.tasks.get(i))
    }

    /// The row whose text field currently owns keyboard input.
    pub fn focused_row(&self) -> Option<TaskId> {
        self.rows
            .iter()
            .find(|(_, row)| row.has_focus())
            .map(|(id, _)| *id)
    }

    /// Release focus from every row field (rows stay in Editing).
    pub fn blur_all(&mut self) {
        for row in self.rows.values_mut() {
            row.blur();
        }
    }

    /// Select the first row if nothing is selected yet.
    pub fn ensure_selection(&mut self) {
        if self.selected.is_none() && !self.tasks.is_empty() {
            self.selected = Some(0);
            self.scroll_to_selected();
        }
    }

    /// Press `region` of row `index`, which also selects it.
    ///
    /// Keyboard input must follow the selection, so any other row's field
    /// loses focus here (those rows stay in Editing).
    pub fn press(&mut self, index: usize, region: RowRegion) -> Option<Action> {
        let task = self.tasks.get(index)?.clone();
        self.selected = Some(index);
        self.scroll_to_selected();

        for (id, other) in self.rows.iter_mut() {
            if *id != task.id {
                other.blur();
            }
        }
        self.rows.get_mut(&task.id)?.press(region, &task)
    }

    /// Toggle the selected task, whatever state its row is in.
    pub fn toggle_selected(&mut self) -> Option<Action> {
        let index = self.selected?;
        self.press(index, RowRegion::Marker)
    }

    /// Mouse click at screen coordinates.
    pub fn click(&mut self, column: u16, row: u16) -> Option<Action> {
        let area = self.last_area;
        if !area.contains(Position { x: column, y: row }) {
            return None;
        }
        let content_y = (row - area.y).saturating_add(self.scroll_state.offset().y);
        let index = (content_y / ROW_HEIGHT) as usize;
        if index >= self.tasks.len() {
            return None;
        }

        let layout = RowLayout::new(Rect::new(area.x, row, content_width(area), ROW_HEIGHT));
        match layout.region_at(column) {
            Some(region) => self.press(index, region),
            None => {
                if self.selected != Some(index) {
                    self.blur_all();
                }
                self.selected = Some(index);
                None
            }
        }
    }

    fn move_selection(&mut self, delta: isize) {
        if self.tasks.is_empty() {
            return;
        }
        let next = match self.selected {
            Some(i) => i.saturating_add_signed(delta),
            None if delta < 0 => self.tasks.len() - 1,
            None => 0,
        };
        self.select(next);
    }

    fn select(&mut self, index: usize) {
        if self.tasks.is_empty() {
            return;
        }
        self.selected = Some(index.min(self.tasks.len() - 1));
        self.scroll_to_selected();
    }

    fn page(&self) -> isize {
        (self.viewport_height / ROW_HEIGHT).max(1) as isize
    }

    /// Scroll the viewport so the selected row is visible.
    pub fn scroll_to_selected(&mut self) {
        let Some(idx) = self.selected else {
            return;
        };
        let item_top = row_top(idx);
        let item_bottom = item_top.saturating_add(ROW_HEIGHT);
        let offset_y = self.scroll_state.offset().y;

        if item_top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: item_top });
        } else if item_bottom > offset_y.saturating_add(self.viewport_height) {
            let new_y = item_bottom.saturating_sub(self.viewport_height);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }

    /// Mouse wheel. Moves the viewport only, never the selection.
    pub fn scroll_up(&mut self) {
        self.scroll_state.scroll_up();
    }

    pub fn scroll_down(&mut self) {
        self.scroll_state.scroll_down();
        self.clamp_scroll();
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let total = row_top(self.tasks.len());
        let max_y = total.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Keys while no row field has focus.
    fn handle_navigation(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::CursorUp => {
                self.move_selection(-1);
                None
            }
            TuiEvent::CursorDown => {
                self.move_selection(1);
                None
            }
            TuiEvent::PageUp => {
                self.move_selection(-self.page());
                None
            }
            TuiEvent::PageDown => {
                self.move_selection(self.page());
                None
            }
            TuiEvent::CursorHome => {
                self.select(0);
                None
            }
            TuiEvent::CursorEnd => {
                self.select(usize::MAX);
                None
            }
            TuiEvent::ScrollUp => {
                self.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_down();
                None
            }
            TuiEvent::InputChar(' ') => self.toggle_selected(),
            TuiEvent::InputChar('e') => {
                let index = self.selected?;
                self.press(index, RowRegion::EditButton)
            }
            // Enter starts editing, or hands focus back to a row already editing
            TuiEvent::Submit => {
                let index = self.selected?;
                let editing = self
                    .selected_task()
                    .and_then(|task| self.rows.get(&task.id))
                    .is_some_and(TaskItemState::is_editing);
                let region = if editing {
                    RowRegion::Title
                } else {
                    RowRegion::EditButton
                };
                self.press(index, region)
            }
            TuiEvent::InputChar('d') | TuiEvent::Delete => {
                let index = self.selected?;
                self.press(index, RowRegion::RemoveButton)
            }
            _ => None,
        }
    }

    fn help_text(&self) -> &'static str {
        if self.focused_row().is_some() {
            " Enter Save  Esc Cancel  Ctrl+T Done "
        } else if self.tasks.is_empty() {
            " Tab Input  q Quit "
        } else {
            " Space Done  e Edit  d Remove  Tab Input  q Quit "
        }
    }
}

/// Content offset of row `index`. Saturates for lists taller than a `u16`.
fn row_top(index: usize) -> u16 {
    u16::try_from(index)
        .unwrap_or(u16::MAX)
        .saturating_mul(ROW_HEIGHT)
}

/// Row width inside `area`, leaving the last column to the scrollbar.
fn content_width(area: Rect) -> u16 {
    area.width.saturating_sub(1)
}

/// Events are routed to the focused row field first; without one they
/// drive selection and the selected row's buttons.
impl EventHandler for TasksListState {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if let Some(id) = self.focused_row() {
            let task = self.tasks.iter().find(|t| t.id == id)?.clone();
            let row = self.rows.get_mut(&id)?;
            return row.handle_key(&task, event);
        }
        self.handle_navigation(event)
    }
}

/// Transient list renderer.
pub struct TasksList<'a> {
    pub state: &'a mut TasksListState,
    /// Whether the list (rather than the input) has keyboard focus
    pub focused: bool,
}

impl<'a> TasksList<'a> {
    pub fn new(state: &'a mut TasksListState, focused: bool) -> Self {
        Self { state, focused }
    }
}

impl Component for TasksList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Tasks ")
            .title_bottom(Line::from(self.state.help_text()).centered());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.state.last_area = inner;
        self.state.viewport_height = inner.height;

        if self.state.tasks.is_empty() {
            let hint = Paragraph::new(EMPTY_HINT)
                .style(
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )
                .alignment(Alignment::Center);
            frame.render_widget(hint, inner);
            return;
        }

        self.state.clamp_scroll();

        let width = content_width(inner);
        let total_height = row_top(self.state.tasks.len());
        let mut scroll_view = ScrollView::new(Size::new(width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let offset_y = self.state.scroll_state.offset().y;
        let first = (offset_y / ROW_HEIGHT) as usize;
        let last = (first + (inner.height / ROW_HEIGHT) as usize + 1).min(self.state.tasks.len());

        let TasksListState {
            tasks,
            rows,
            selected,
            striped,
            ..
        } = &mut *self.state;

        let mut cursor = None;
        for (index, task) in tasks.iter().enumerate().take(last).skip(first) {
            let Some(row) = rows.get_mut(&task.id) else {
                continue;
            };
            let rect = Rect::new(0, row_top(index), width, ROW_HEIGHT);
            let layout = RowLayout::new(rect);
            let title = row.title_viewport(layout.title.width);

            // The extra row past the viewport is drawn but never visible
            let screen_y = rect.y.saturating_sub(offset_y);
            if row.has_focus() && screen_y < inner.height {
                cursor = Some((
                    inner.x + layout.title.x + title.cursor_col,
                    inner.y + screen_y,
                ));
            }

            let item = TaskItem {
                task,
                state: row,
                title,
                index,
                is_selected: self.focused && *selected == Some(index),
                striped: *striped,
            };
            scroll_view.render_widget(item, rect);
        }

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);

        if let Some(position) = cursor
            && self.focused
        {
            frame.set_cursor_position(position);
        }
    }
}
