use crate::task::Task;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which tasks the list shows. Display only; never changes stored tasks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Filter {
    #[default]
    All,
    Done,
    NotDone,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown filter `{0}`, expected one of ALL, DONE, NOT_DONE")]
pub struct ParseFilterError(pub String);

impl Filter {
    /// Every filter, in the order the controls show them.
    pub const ALL_FILTERS: [Filter; 3] = [Filter::All, Filter::Done, Filter::NotDone];

    /// Whether a task is visible under this filter.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Done => task.is_done,
            Filter::NotDone => !task.is_done,
        }
    }

    /// Wire name of the filter, as carried by `SET_FILTER`.
    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "ALL",
            Filter::Done => "DONE",
            Filter::NotDone => "NOT_DONE",
        }
    }

    /// Human readable button label.
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Done => "Done",
            Filter::NotDone => "Not Done",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Filter::ALL_FILTERS
            .into_iter()
            .find(|filter| filter.as_str() == s)
            .ok_or_else(|| ParseFilterError(s.to_string()))
    }
}

/// Projects the tasks visible under `filter`, keeping their relative order.
pub fn visible_tasks(tasks: &[Task], filter: Filter) -> Vec<&Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}

/// Number of tasks each filter would show.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterCounts {
    pub all: usize,
    pub done: usize,
    pub not_done: usize,
}

impl FilterCounts {
    pub fn of(tasks: &[Task]) -> Self {
        let done = tasks.iter().filter(|task| task.is_done).count();
        FilterCounts {
            all: tasks.len(),
            done,
            not_done: tasks.len() - done,
        }
    }

    pub fn for_filter(&self, filter: Filter) -> usize {
        match filter {
            Filter::All => self.all,
            Filter::Done => self.done,
            Filter::NotDone => self.not_done,
        }
    }
}
