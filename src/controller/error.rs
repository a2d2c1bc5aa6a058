use thiserror::Error;

use crate::datastore::DataStoreError;
use crate::model::ModelError;
use crate::remote::RemoteError;

// Why an intent did not change anything
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("rejected input: {0}")]
    Validation(#[from] ModelError),
    #[error("remote store unavailable: {0}")]
    Transport(#[from] RemoteError),
    #[error("store inconsistency: {0}")]
    Store(#[from] DataStoreError),
    #[error("no task is being edited")]
    NoEditSession,
    #[error("tasks are still loading")]
    NotReady,
}
