//! Core state model for the task list: tasks, actions, the reducer, the filter view and the
//! store that ties them together.
pub mod action;
pub mod draft;
pub mod edit;
pub mod filter;
pub mod reducer;
pub mod state;
pub mod store;
pub mod task;

pub use action::{Action, ActionError};
pub use draft::Draft;
pub use edit::EditMode;
pub use filter::{Filter, FilterCounts, ParseFilterError, visible_tasks};
pub use reducer::reduce;
pub use state::{AppState, Snapshot};
pub use store::{Store, Subscription};
pub use task::{Task, TaskId};
