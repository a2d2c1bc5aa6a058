pub mod error;
pub mod task;

pub use error::ModelError;
pub use task::{Task, TaskDraft, TaskId, Title, UpdatedTask};
