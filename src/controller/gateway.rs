use tracing::{debug, error, info, instrument, warn};

use crate::model::{Task, TaskDraft, TaskId, Title};
use crate::remote::TaskApi;

use super::error::ControllerError;
use super::notify::{Notification, Notifier};
use super::state::TodoState;
use super::Shared;

const TASK_ADDED: &str = "Task added successfully";
const TASK_ADD_FAILED: &str = "Error adding task";
const TASK_UPDATED: &str = "Task updated successfully";
const TASK_UPDATE_FAILED: &str = "Error updating task";
const TASK_DELETED: &str = "Task deleted successfully";

/// Bridges intents to the remote store.
///
/// Local state changes only once the remote call has succeeded. Completion
/// toggles, deletions and bulk operations are local only. The state lock is
/// never held across an await.
pub struct SyncGateway<A, N> {
    api: A,
    notifier: N,
    state: Shared<TodoState>,
    page_size: usize,
}

impl<A, N> SyncGateway<A, N>
where
    A: TaskApi,
    N: Notifier,
{
    pub fn new(api: A, notifier: N, state: Shared<TodoState>, page_size: usize) -> Self {
        Self {
            api,
            notifier,
            state,
            page_size,
        }
    }

    /// Fetches the first page of the remote collection. The load state ends up
    /// `Ready` whatever happens, failures are logged and not notified.
    #[instrument(skip(self))]
    pub async fn load_initial(&self) -> Result<usize, ControllerError> {
        let fetched = self.api.list().await;

        let mut state = self.state.write();
        state.mark_ready();
        match fetched {
            Ok(mut tasks) => {
                let available = tasks.len();
                tasks.truncate(self.page_size);
                let loaded = tasks.len();
                state.store.replace_all(tasks);
                info!(available, loaded, "Tasks loaded.");
                Ok(loaded)
            }
            Err(err) => {
                error!(reason = %err, "Unable to fetch tasks.");
                Err(err.into())
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn create_task(&self, input: &str) -> Result<TaskId, ControllerError> {
        let title = Title::parse(input).map_err(|err| {
            debug!("declined blank task");
            err
        })?;

        let created = match self.api.create(&TaskDraft::new(&title)).await {
            Ok(task) => task,
            Err(err) => {
                error!(reason = %err, "Error adding task.");
                self.notifier.notify(Notification::error(TASK_ADD_FAILED));
                return Err(err.into());
            }
        };

        let id = created.id;
        let inserted = {
            let mut state = self.state.write();
            let res = state.store.insert(created);
            if res.is_ok() {
                state.input.clear();
            }
            res
        };
        if let Err(err) = inserted {
            warn!(reason = %err, "Remote store echoed an id already held locally.");
            self.notifier.notify(Notification::error(TASK_ADD_FAILED));
            return Err(err.into());
        }

        info!(id = %id, title = %title, "Task added.");
        self.notifier.notify(Notification::success(TASK_ADDED));
        Ok(id)
    }

    /// Sends `{title, completed: false}` for `id` and applies the echoed title.
    /// The local completion flag is kept even though the remote one is reset.
    #[instrument(skip(self))]
    pub async fn update_task(&self, id: TaskId, input: &str) -> Result<(), ControllerError> {
        let title = Title::parse(input).map_err(|err| {
            debug!("declined blank title");
            err
        })?;

        let updated = match self.api.update(id, &TaskDraft::new(&title)).await {
            Ok(updated) => updated,
            Err(err) => {
                error!(reason = %err, "Error updating task.");
                self.notifier.notify(Notification::error(TASK_UPDATE_FAILED));
                return Err(err.into());
            }
        };

        let applied = {
            let mut state = self.state.write();
            let res = state.store.update_title(id, updated.title);
            if res.is_ok() {
                state.input.clear();
                state.store.end_edit();
            }
            res
        };
        if let Err(err) = applied {
            warn!(reason = %err, "Updated task is gone locally.");
            self.notifier.notify(Notification::error(TASK_UPDATE_FAILED));
            return Err(err.into());
        }

        info!(id = %id, "Task updated.");
        self.notifier.notify(Notification::success(TASK_UPDATED));
        Ok(())
    }

    pub fn toggle_task(&self, id: TaskId) -> Result<bool, ControllerError> {
        Ok(self.state.write().store.toggle_completed(id)?)
    }

    pub fn remove_task(&self, id: TaskId) -> Result<Task, ControllerError> {
        let removed = self.state.write().store.remove(id)?;
        info!(id = %id, "Task deleted.");
        self.notifier.notify(Notification::success(TASK_DELETED));
        Ok(removed)
    }

    pub fn mark_all_completed(&self) {
        self.state.write().store.mark_all_completed();
    }

    pub fn remove_completed(&self) -> usize {
        let removed = self.state.write().store.remove_completed();
        debug!(removed, "completed tasks cleared");
        removed
    }
}
