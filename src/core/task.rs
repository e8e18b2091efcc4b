//! # Tasks
//!
//! `Task` is an immutable value. Changing a title or the done flag produces
//! a new `Task`; the old value is never touched, so a snapshot handed to the
//! renderer can't change underneath it.

use std::fmt;

/// Task identifier, derived from the creation time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
}

impl Task {
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
        }
    }

    /// Copy of this task with `done` flipped.
    pub fn toggled(&self) -> Self {
        Self {
            done: !self.done,
            ..self.clone()
        }
    }

    /// Copy of this task carrying `title`.
    pub fn retitled(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }
}

/// Hands out task ids from a millisecond clock.
///
/// Ids are strictly increasing even when the clock stalls or steps
/// backwards: a reading at or below the last id becomes `last + 1`.
pub struct TaskIdGenerator {
    last: i64,
    clock: fn() -> i64,
}

impl Default for TaskIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskIdGenerator {
    pub fn new() -> Self {
        Self::with_clock(system_millis)
    }

    pub fn with_clock(clock: fn() -> i64) -> Self {
        Self {
            last: i64::MIN,
            clock,
        }
    }

    pub fn next_id(&mut self) -> TaskId {
        let now = (self.clock)();
        let id = if now > self.last { now } else { self.last + 1 };
        self.last = id;
        TaskId(id)
    }
}

fn system_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_not_done() {
        let task = Task::new(TaskId(1), "Buy milk");
        assert_eq!(task.title, "Buy milk");
        assert!(!task.done);
    }

    #[test]
    fn toggled_leaves_original_untouched() {
        let task = Task::new(TaskId(1), "A");
        let flipped = task.toggled();

        assert!(flipped.done);
        assert!(!task.done);
        assert_eq!(flipped.id, task.id);
        assert_eq!(flipped.title, task.title);
        assert_eq!(flipped.toggled(), task);
    }

    #[test]
    fn retitled_keeps_id_and_done() {
        let task = Task::new(TaskId(7), "A").toggled();
        let renamed = task.retitled("A2");

        assert_eq!(renamed.id, TaskId(7));
        assert!(renamed.done);
        assert_eq!(renamed.title, "A2");
        assert_eq!(task.title, "A");
    }

    #[test]
    fn ids_follow_the_clock() {
        fn clock() -> i64 {
            1_700_000_000_000
        }
        let mut ids = TaskIdGenerator::with_clock(clock);
        assert_eq!(ids.next_id(), TaskId(1_700_000_000_000));
    }

    #[test]
    fn ids_stay_unique_when_clock_stalls() {
        fn frozen() -> i64 {
            42
        }
        let mut ids = TaskIdGenerator::with_clock(frozen);
        let first = ids.next_id();
        let second = ids.next_id();
        let third = ids.next_id();

        assert_eq!(first, TaskId(42));
        assert_eq!(second, TaskId(43));
        assert_eq!(third, TaskId(44));
    }

    #[test]
    fn system_clock_ids_increase() {
        let mut ids = TaskIdGenerator::new();
        let generated: Vec<TaskId> = (0..100).map(|_| ids.next_id()).collect();
        assert!(generated.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
