mod error;
mod gateway;
mod notify;
mod state;
mod view;

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::{debug, info, instrument};

pub use error::ControllerError;
pub use gateway::SyncGateway;
pub use notify::{ChannelNotifier, LogNotifier, Notification, NotificationKind, Notifier};
pub use state::{LoadState, TodoState};
pub use view::{Filter, Snapshot, ViewProjector};

use crate::model::TaskId;
use crate::remote::TaskApi;

pub type Shared<T> = Arc<RwLock<T>>;

/// User intents accepted from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    ChangeInput(String),
    SubmitAdd,
    SubmitUpdate,
    /// Update while editing, add otherwise.
    Submit,
    Toggle(TaskId),
    Delete(TaskId),
    BeginEdit(TaskId),
    CompleteAll,
    ClearCompleted,
    SetFilter(Filter),
}

impl Intent {
    fn touches_tasks(&self) -> bool {
        !matches!(self, Intent::ChangeInput(_) | Intent::SetFilter(_))
    }
}

/// Owns the state, routes intents and publishes a fresh snapshot after each one.
pub struct TodoController<A, N> {
    state: Shared<TodoState>,
    gateway: SyncGateway<A, N>,
    tx_snapshot: watch::Sender<Snapshot>,
}

impl<A, N> TodoController<A, N>
where
    A: TaskApi,
    N: Notifier,
{
    pub fn new(api: A, notifier: N, page_size: usize) -> (Self, watch::Receiver<Snapshot>) {
        let state = Arc::new(RwLock::new(TodoState::new()));
        let (tx_snapshot, rx_snapshot) = watch::channel(Snapshot::capture(&state.read()));
        let gateway = SyncGateway::new(api, notifier, state.clone(), page_size);
        (
            Self {
                state,
                gateway,
                tx_snapshot,
            },
            rx_snapshot,
        )
    }

    /// Runs the initial fetch. Always leaves the controller ready.
    pub async fn start(&self) {
        info!("Loading tasks...");
        if let Err(err) = self.gateway.load_initial().await {
            debug!(reason = %err, "starting with an empty list");
        }
        self.publish();
    }

    #[instrument(skip(self))]
    pub async fn handle(&self, intent: Intent) -> Result<(), ControllerError> {
        let res = self.dispatch(intent).await;
        self.publish();
        res
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state.read())
    }

    async fn dispatch(&self, intent: Intent) -> Result<(), ControllerError> {
        // the initial load overwrites the collection, nothing may touch it before
        if intent.touches_tasks() && self.state.read().load_state == LoadState::Loading {
            return Err(ControllerError::NotReady);
        }
        match intent {
            Intent::ChangeInput(text) => {
                self.state.write().input = text;
                Ok(())
            }
            Intent::SubmitAdd => self.submit_add().await,
            Intent::SubmitUpdate => self.submit_update().await,
            Intent::Submit => {
                let editing = self.state.read().store.editing().is_some();
                if editing {
                    self.submit_update().await
                } else {
                    self.submit_add().await
                }
            }
            Intent::Toggle(id) => self.gateway.toggle_task(id).map(|_| ()),
            Intent::Delete(id) => self.gateway.remove_task(id).map(|_| ()),
            Intent::BeginEdit(id) => {
                let mut state = self.state.write();
                let title = state.store.begin_edit(id)?;
                state.input = title;
                Ok(())
            }
            Intent::CompleteAll => {
                self.gateway.mark_all_completed();
                Ok(())
            }
            Intent::ClearCompleted => {
                self.gateway.remove_completed();
                Ok(())
            }
            Intent::SetFilter(filter) => {
                self.state.write().filter = filter;
                Ok(())
            }
        }
    }

    async fn submit_add(&self) -> Result<(), ControllerError> {
        let input = self.state.read().input.clone();
        self.gateway.create_task(&input).await.map(|_| ())
    }

    async fn submit_update(&self) -> Result<(), ControllerError> {
        let (editing, input) = {
            let state = self.state.read();
            (state.store.editing(), state.input.clone())
        };
        let id = editing.ok_or(ControllerError::NoEditSession)?;
        self.gateway.update_task(id, &input).await
    }

    fn publish(&self) {
        let snapshot = Snapshot::capture(&self.state.read());
        self.tx_snapshot.send_replace(snapshot);
    }
}
