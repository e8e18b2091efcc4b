//! # Application State
//!
//! `Home` is the single owner of the task collection. Views only ever see
//! the read-only snapshot returned by [`Home::tasks`].
//!
//! ```text
//! Home
//! ├── tasks: Vec<Task>          // insertion order, replaced wholesale on change
//! └── ids: TaskIdGenerator      // millisecond clock, strictly increasing
//! ```
//!
//! State changes only happen through `update(home, action)` in action.rs.
//! A `Home` lives as long as the screen does; nothing outlives it.

use crate::core::task::{Task, TaskId, TaskIdGenerator};

pub struct Home {
    tasks: Vec<Task>,
    ids: TaskIdGenerator,
}

impl Default for Home {
    fn default() -> Self {
        Self::new()
    }
}

impl Home {
    pub fn new() -> Self {
        Self::with_id_generator(TaskIdGenerator::new())
    }

    pub fn with_id_generator(ids: TaskIdGenerator) -> Self {
        Self {
            tasks: Vec::new(),
            ids,
        }
    }

    /// Current snapshot of the collection, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.find(id).is_some()
    }

    pub fn has_title(&self, title: &str) -> bool {
        self.tasks.iter().any(|task| task.title == title)
    }

    pub(crate) fn next_id(&mut self) -> TaskId {
        self.ids.next_id()
    }

    pub(crate) fn push(&mut self, task: Task) {
        let mut tasks = self.tasks.clone();
        tasks.push(task);
        self.tasks = tasks;
    }

    /// Rebuild the collection with the matching task replaced by `f(task)`.
    pub(crate) fn replace_with(&mut self, id: TaskId, f: impl Fn(&Task) -> Task) {
        self.tasks = self
            .tasks
            .iter()
            .map(|task| if task.id == id { f(task) } else { task.clone() })
            .collect();
    }

    pub(crate) fn remove(&mut self, id: TaskId) {
        self.tasks = self
            .tasks
            .iter()
            .filter(|task| task.id != id)
            .cloned()
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_home;

    #[test]
    fn test_home_starts_empty() {
        let home = test_home();
        assert!(home.tasks().is_empty());
        assert_eq!(home.task_count(), 0);
    }

    #[test]
    fn test_lookup_helpers() {
        let mut home = test_home();
        let id = home.next_id();
        home.push(Task::new(id, "A"));

        assert!(home.contains(id));
        assert!(home.has_title("A"));
        assert!(!home.has_title("a"));
        assert!(!home.contains(TaskId(-1)));
    }

    #[test]
    fn test_replace_with_keeps_order() {
        let mut home = test_home();
        let ids: Vec<TaskId> = ["A", "B", "C"]
            .iter()
            .map(|title| {
                let id = home.next_id();
                home.push(Task::new(id, *title));
                id
            })
            .collect();

        home.replace_with(ids[1], |task| task.retitled("B2"));

        let titles: Vec<&str> = home.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B2", "C"]);
    }

    #[test]
    fn test_remove_drops_only_matching() {
        let mut home = test_home();
        let a = home.next_id();
        home.push(Task::new(a, "A"));
        let b = home.next_id();
        home.push(Task::new(b, "B"));

        home.remove(a);

        assert_eq!(home.task_count(), 1);
        assert_eq!(home.tasks()[0].id, b);
    }
}
