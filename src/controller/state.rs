use crate::datastore::TaskStore;

use super::view::Filter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
}

impl Default for LoadState {
    fn default() -> Self {
        LoadState::Loading
    }
}

/// Everything the presentation layer observes, owned by one controller.
#[derive(Debug, Default)]
pub struct TodoState {
    pub store: TaskStore,
    pub filter: Filter,
    pub load_state: LoadState,
    pub input: String,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    /// `Loading` only ever moves to `Ready`.
    pub fn mark_ready(&mut self) {
        self.load_state = LoadState::Ready;
    }
}
