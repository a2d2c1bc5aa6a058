use thiserror::*;

use crate::model::TaskId;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum DataStoreError {
    #[error("the task exists {0}")]
    DuplicateId(TaskId),

    #[error("the task not found {0}")]
    NotFound(TaskId),
}
