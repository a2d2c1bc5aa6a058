use serde_derive::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::ModelError;

/// Identifier assigned by the remote store. The client never invents one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TaskId {
    fn from(id: u64) -> Self {
        TaskId(id)
    }
}

impl From<TaskId> for u64 {
    fn from(id: TaskId) -> Self {
        id.0
    }
}

impl FromStr for TaskId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(TaskId)
            .map_err(|_| ModelError::BadTaskId(s.to_string()))
    }
}

/// A title that has been trimmed and checked for emptiness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    pub fn parse(input: &str) -> Result<Self, ModelError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptyTitle);
        }
        Ok(Title(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Task is a single to-do item as held locally.
///
/// Records coming from the remote store may carry extra fields (`userId` on the
/// placeholder API), they are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    #[allow(dead_code)]
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }
}

/// Outgoing payload for both create and update.
///
/// `completed` is always sent as `false`, an update resets the remote flag
/// whatever the local value is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TaskDraft {
    pub title: String,
    pub completed: bool,
}

impl TaskDraft {
    pub fn new(title: &Title) -> Self {
        Self {
            title: title.as_str().to_string(),
            completed: false,
        }
    }
}

/// What the remote store echoes back for an update. Only the title is used.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdatedTask {
    pub title: String,
}
