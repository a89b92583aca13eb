use crate::filter::{Filter, visible_tasks};
use crate::task::{Task, TaskId};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Shared, immutable view of the state at one point in time.
pub type Snapshot = Rc<AppState>;

/// Everything the task list renders from.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub tasks: Vec<Task>,
    pub filter: Filter,
}

impl AppState {
    /// Empty task list with the `ALL` filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Id for the next task to add: the task count plus one.
    ///
    /// Only safe because tasks are never removed. Saturates at `TaskId::MAX`
    /// rather than wrapping, so ids past that bound are no longer unique.
    pub fn next_task_id(&self) -> TaskId {
        next_id_after(self.tasks.len())
    }

    /// The task with `id`, if there is one.
    pub fn find_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Tasks visible under the current filter.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        visible_tasks(&self.tasks, self.filter)
    }
}

fn next_id_after(count: usize) -> TaskId {
    TaskId::try_from(count)
        .unwrap_or(TaskId::MAX)
        .saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_with_all_filter() {
        let state = AppState::new();

        assert!(state.tasks.is_empty());
        assert_eq!(state.filter, Filter::All);
    }

    #[test]
    fn next_task_id_is_count_plus_one() {
        let mut state = AppState::new();
        assert_eq!(state.next_task_id(), 1);

        state.tasks.push(Task::new(1, "a", false));
        state.tasks.push(Task::new(2, "b", false));

        assert_eq!(state.next_task_id(), 3);
    }

    #[test]
    fn next_task_id_saturates_instead_of_wrapping() {
        assert_eq!(next_id_after(TaskId::MAX as usize - 1), TaskId::MAX);
        assert_eq!(next_id_after(TaskId::MAX as usize), TaskId::MAX);
        assert_eq!(next_id_after(usize::MAX), TaskId::MAX);
    }

    #[test]
    fn can_find_task_by_id() {
        let state = AppState {
            tasks: vec![Task::new(1, "a", false), Task::new(2, "b", true)],
            filter: Filter::All,
        };

        assert_eq!(state.find_task(2), Some(&Task::new(2, "b", true)));
        assert_eq!(state.find_task(3), None);
    }

    #[test]
    fn visible_tasks_follow_current_filter() {
        let state = AppState {
            tasks: vec![Task::new(1, "a", false), Task::new(2, "b", true)],
            filter: Filter::Done,
        };

        assert_eq!(state.visible_tasks(), vec![&Task::new(2, "b", true)]);
    }
}
