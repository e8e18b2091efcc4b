//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `Header`: App title and task count
//! - `TaskItem`: A single row (a `Widget` drawn inside the list's scroll view)
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `TodoInput`: New-task field, emits `InputEvent::Submit`
//! - `TasksListState`: Selection, scrolling and per-row editing, emits `Action`
//! - `DialogState`: Modal prompt, emits `DialogEvent`
//!
//! ## Props-Based Data Flow
//!
//! Components never reach into `Home`. The event loop hands them the current
//! snapshot (`TasksListState::sync`, `Header::new(title, count)`) and turns
//! what they emit into `Action`s for `core::action::update`.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── header.rs        (Title + counter)
//! ├── line_editor.rs   (Single-line text buffer shared by both fields)
//! ├── todo_input.rs    (New-task field)
//! ├── task_item.rs     (Row state machine + row widget)
//! ├── tasks_list.rs    (Scrollable container of rows)
//! └── dialog.rs        (Notice / confirmation overlay)
//! ```

pub mod dialog;
pub mod header;
pub mod line_editor;
pub mod task_item;
pub mod tasks_list;
pub mod todo_input;

pub use dialog::{Dialog, DialogEvent, DialogState};
pub use header::{HEADER_HEIGHT, Header};
pub use task_item::{TaskItem, TaskItemState};
pub use tasks_list::{TasksList, TasksListState};
pub use todo_input::{INPUT_HEIGHT, InputEvent, TodoInput};
