use serde::{Deserialize, Serialize};

pub type TaskId = u32;

/// A single entry in the task list.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub is_done: bool,
}

impl Task {
    pub fn new(id: TaskId, description: impl Into<String>, is_done: bool) -> Self {
        Task {
            id,
            description: description.into(),
            is_done,
        }
    }
}
