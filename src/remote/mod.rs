mod error;
mod http;

use async_trait::async_trait;

use crate::model::{Task, TaskDraft, TaskId, UpdatedTask};
pub use error::RemoteError;
pub use http::HttpTaskApi;

/// Request/response contract of the remote task collection.
/// No delete: removals stay local.
#[async_trait]
pub trait TaskApi: Sync + Send + 'static {
    async fn list(&self) -> Result<Vec<Task>, RemoteError>;
    async fn create(&self, draft: &TaskDraft) -> Result<Task, RemoteError>;
    async fn update(&self, id: TaskId, draft: &TaskDraft) -> Result<UpdatedTask, RemoteError>;
}
