use crate::core::state::Home;
use crate::tui::component::Component;
use crate::tui::components::{
    Dialog, HEADER_HEIGHT, Header, INPUT_HEIGHT, TasksList,
};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

/// Draw one frame: header, new-task input, task list, and the dialog
/// overlay when one is open.
pub fn draw_ui(frame: &mut Frame, home: &Home, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(HEADER_HEIGHT), Length(INPUT_HEIGHT), Min(0)]);
    let [header_area, input_area, list_area] = layout.areas(frame.area());

    Header::new(tui.title.clone(), home.task_count()).render(frame, header_area);

    // Sync focus props; an open dialog owns the keyboard
    let modal = tui.dialog.is_some();
    tui.todo_input.focused = !modal && tui.focus == Focus::Input;
    tui.todo_input.render(frame, input_area);
    tui.input_area = input_area;

    let list_focused = !modal && tui.focus == Focus::List;
    TasksList::new(&mut tui.tasks_list, list_focused).render(frame, list_area);

    if let Some(dialog) = &tui.dialog {
        Dialog::new(dialog).render(frame, frame.area());
    }
}
