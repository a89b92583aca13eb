use crate::action::Action;
use crate::state::{AppState, Snapshot};
use crate::task::{Task, TaskId};
use std::rc::Rc;

/// Computes the state that follows `state` once `action` is applied.
///
/// Pure: the input snapshot is never modified. Actions that change nothing
/// (unrecognized ones, or toggles and edits of an unknown id) hand back the
/// same `Rc`, so callers can detect a no-op with [`Rc::ptr_eq`].
pub fn reduce(state: &Snapshot, action: &Action) -> Snapshot {
    match action {
        Action::AddTask(task) => {
            let mut tasks = Vec::with_capacity(state.tasks.len() + 1);
            tasks.extend_from_slice(&state.tasks);
            tasks.push(task.clone());
            Rc::new(AppState {
                tasks,
                filter: state.filter,
            })
        }
        Action::ToggleTask(id) => update_tasks(state, *id, |task| task.is_done = !task.is_done),
        Action::EditTask { id, description } => {
            update_tasks(state, *id, |task| task.description.clone_from(description))
        }
        Action::SetFilter(filter) => Rc::new(AppState {
            tasks: state.tasks.clone(),
            filter: *filter,
        }),
        Action::Unrecognized { .. } => Rc::clone(state),
    }
}

fn update_tasks(state: &Snapshot, id: TaskId, mut update: impl FnMut(&mut Task)) -> Snapshot {
    if !state.tasks.iter().any(|task| task.id == id) {
        return Rc::clone(state);
    }

    let mut tasks = state.tasks.clone();
    tasks
        .iter_mut()
        .filter(|task| task.id == id)
        .for_each(&mut update);
    Rc::new(AppState {
        tasks,
        filter: state.filter,
    })
}
