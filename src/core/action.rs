//! # Actions
//!
//! Every user intent becomes an `Action`. Typing a title and pressing Enter
//! is `Action::AddTask(title)`; clicking a row marker is
//! `Action::ToggleTaskDone(id)`.
//!
//! `update()` applies an action to `Home` and returns an `Effect` describing
//! what the UI has to do next (open a dialog, quit). No I/O happens here.
//!
//! ```text
//! Home + Action  →  update()  →  Home' + Effect
//! ```
//!
//! Removal is two-step. `RemoveTask` only asks for confirmation; the task
//! goes away when the dialog's confirm button dispatches `ConfirmRemoveTask`.
//! Declining dispatches nothing.

use log::{debug, info};

use crate::core::state::Home;
use crate::core::task::{Task, TaskId};

pub const DUPLICATE_TITLE: &str = "Task already registered";
pub const DUPLICATE_MESSAGE: &str = "You cannot register a task with the same name";
pub const REMOVE_TITLE: &str = "Remove item";
pub const REMOVE_MESSAGE: &str = "Are you sure you want to remove this item?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddTask(String),
    ToggleTaskDone(TaskId),
    RemoveTask(TaskId),
    ConfirmRemoveTask(TaskId),
    EditTask { id: TaskId, title: String },
    Quit,
}

/// User-facing message with a single dismiss button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn duplicate_title() -> Self {
        Self {
            title: DUPLICATE_TITLE.to_string(),
            message: DUPLICATE_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    ShowNotice(Notice),
    /// Ask the user before removing; confirming dispatches `ConfirmRemoveTask`.
    ConfirmRemoval(TaskId),
}

pub fn update(home: &mut Home, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::AddTask(title) => {
            if home.has_title(&title) {
                info!("Rejected duplicate task title {:?}", title);
                return Effect::ShowNotice(Notice::duplicate_title());
            }
            let id = home.next_id();
            info!("Added task {} ({:?})", id, title);
            home.push(Task::new(id, title));
            Effect::None
        }
        Action::ToggleTaskDone(id) => {
            if home.contains(id) {
                home.replace_with(id, Task::toggled);
            }
            Effect::None
        }
        Action::RemoveTask(id) => {
            if home.contains(id) {
                Effect::ConfirmRemoval(id)
            } else {
                Effect::None
            }
        }
        Action::ConfirmRemoveTask(id) => {
            if home.contains(id) {
                info!("Removed task {}", id);
                home.remove(id);
            }
            Effect::None
        }
        Action::EditTask { id, title } => {
            if home.contains(id) {
                info!("Edited task {} -> {:?}", id, title);
                home.replace_with(id, |task| task.retitled(title.as_str()));
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
