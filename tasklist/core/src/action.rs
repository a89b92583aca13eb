//! The closed set of intents the store understands, plus decoding of the
//! `{"type": ..., "payload": ...}` envelope the view layer sends.

use crate::filter::Filter;
use crate::task::{Task, TaskId};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

pub const ADD_TASK: &str = "ADD_TASK";
pub const TOGGLE_TASK: &str = "TOGGLE_TASK";
pub const EDIT_TASK: &str = "EDIT_TASK";
pub const SET_FILTER: &str = "SET_FILTER";

/// An intent to change the task list, applied by [`crate::reduce`].
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddTask(Task),
    ToggleTask(TaskId),
    EditTask { id: TaskId, description: String },
    SetFilter(Filter),
    /// Anything outside the vocabulary. The reducer leaves state untouched.
    Unrecognized { kind: String, payload: Value },
}

/// Why an action envelope could not be decoded.
#[derive(Error, Debug)]
pub enum ActionError {
    #[error("action is not valid JSON or has no `type`: {0}")]
    Envelope(#[source] serde_json::Error),
    #[error("invalid payload for {kind}: {source}")]
    Payload {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Value,
}

#[derive(Deserialize)]
struct EditPayload {
    id: TaskId,
    description: String,
}

impl Action {
    /// `ADD_TASK`: append a task with exactly these fields.
    ///
    /// The caller picks the id, normally [`crate::AppState::next_task_id`].
    pub fn add_task(id: TaskId, description: impl Into<String>, is_done: bool) -> Self {
        Action::AddTask(Task::new(id, description, is_done))
    }

    /// `TOGGLE_TASK`: flip the done flag of the task with `id`.
    pub fn toggle_task(id: TaskId) -> Self {
        Action::ToggleTask(id)
    }

    /// `EDIT_TASK`: replace the description of the task with `id`.
    pub fn edit_task(id: TaskId, description: impl Into<String>) -> Self {
        Action::EditTask {
            id,
            description: description.into(),
        }
    }

    /// `SET_FILTER`: change which tasks the list shows.
    pub fn set_filter(filter: Filter) -> Self {
        Action::SetFilter(filter)
    }

    /// Type tag as it appears on the wire.
    pub fn kind(&self) -> &str {
        match self {
            Action::AddTask(_) => ADD_TASK,
            Action::ToggleTask(_) => TOGGLE_TASK,
            Action::EditTask { .. } => EDIT_TASK,
            Action::SetFilter(_) => SET_FILTER,
            Action::Unrecognized { kind, .. } => kind,
        }
    }

    /// Decodes an action envelope.
    ///
    /// Unknown types, and `SET_FILTER` with a value outside the filter set, decode to
    /// [`Action::Unrecognized`] rather than failing. Only a broken envelope or a
    /// malformed payload for a known type is an error.
    pub fn from_json(json: &str) -> Result<Self, ActionError> {
        let envelope: Envelope = serde_json::from_str(json).map_err(ActionError::Envelope)?;
        Self::from_envelope(envelope)
    }

    fn from_envelope(Envelope { kind, payload }: Envelope) -> Result<Self, ActionError> {
        match kind.as_str() {
            ADD_TASK => return Ok(Action::AddTask(decode_payload(ADD_TASK, payload)?)),
            TOGGLE_TASK => return Ok(Action::ToggleTask(decode_payload(TOGGLE_TASK, payload)?)),
            EDIT_TASK => {
                let EditPayload { id, description } = decode_payload(EDIT_TASK, payload)?;
                return Ok(Action::EditTask { id, description });
            }
            SET_FILTER => {
                if let Some(Ok(filter)) = payload.as_str().map(str::parse::<Filter>) {
                    return Ok(Action::SetFilter(filter));
                }
            }
            _ => {}
        }
        Ok(Action::Unrecognized { kind, payload })
    }
}

fn decode_payload<T: for<'de> Deserialize<'de>>(
    kind: &'static str,
    payload: Value,
) -> Result<T, ActionError> {
    serde_json::from_value(payload).map_err(|source| ActionError::Payload { kind, source })
}
