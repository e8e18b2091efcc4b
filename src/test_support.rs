//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::action::{Action, Effect, update};
use crate::core::state::Home;
use crate::core::task::TaskId;

/// Creates an empty Home with the system clock.
pub fn test_home() -> Home {
    Home::new()
}

/// Adds a task and returns its id. Panics if the add is rejected.
pub fn add(home: &mut Home, title: &str) -> TaskId {
    let effect = update(home, Action::AddTask(title.to_string()));
    assert_eq!(effect, Effect::None, "add of {title:?} was rejected");
    home.tasks()
        .last()
        .map(|task| task.id)
        .expect("task was just added")
}

/// Builds a Home holding the given titles, in order.
pub fn home_with(titles: &[&str]) -> Home {
    let mut home = test_home();
    for title in titles {
        add(&mut home, title);
    }
    home
}
