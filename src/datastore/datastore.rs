use std::collections::HashSet;

use tracing::debug;

use super::error::DataStoreError;
use crate::model::{Task, TaskId};

/// Canonical in-memory task collection plus the single edit slot.
///
/// Every mutation is synchronous and local. I/O and notifications are
/// sequenced around these calls by the gateway.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    editing: Option<TaskId>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the collection, used once at initial load. Later copies of
    /// an id are dropped.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        let mut seen = HashSet::with_capacity(tasks.len());
        self.tasks = tasks
            .into_iter()
            .filter(|task| {
                let first = seen.insert(task.id);
                if !first {
                    debug!(id = %task.id, "dropping duplicate task");
                }
                first
            })
            .collect();
        self.release_edit_if_gone();
    }

    pub fn insert(&mut self, task: Task) -> Result<(), DataStoreError> {
        if self.position(task.id).is_some() {
            return Err(DataStoreError::DuplicateId(task.id));
        }
        self.tasks.push(task);
        Ok(())
    }

    pub fn toggle_completed(&mut self, id: TaskId) -> Result<bool, DataStoreError> {
        let task = self.get_mut(id)?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    pub fn remove(&mut self, id: TaskId) -> Result<Task, DataStoreError> {
        let index = self.position(id).ok_or(DataStoreError::NotFound(id))?;
        let task = self.tasks.remove(index);
        if self.editing == Some(id) {
            debug!(id = %id, "edited task removed, leaving edit session");
            self.editing = None;
        }
        Ok(task)
    }

    /// Replaces the title only, `completed` is left as it is locally.
    pub fn update_title(&mut self, id: TaskId, title: String) -> Result<(), DataStoreError> {
        self.get_mut(id)?.title = title;
        Ok(())
    }

    pub fn mark_all_completed(&mut self) {
        for task in self.tasks.iter_mut() {
            task.completed = true;
        }
    }

    /// Drops every completed task and returns how many were removed.
    pub fn remove_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.completed);
        self.release_edit_if_gone();
        before - self.tasks.len()
    }

    /// Enters the edit session for `id` and returns its current title.
    /// A session already in progress is overwritten.
    pub fn begin_edit(&mut self, id: TaskId) -> Result<String, DataStoreError> {
        let title = self.get(id).ok_or(DataStoreError::NotFound(id))?.title.clone();
        self.editing = Some(id);
        Ok(title)
    }

    pub fn end_edit(&mut self) {
        self.editing = None;
    }

    pub fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn get_mut(&mut self, id: TaskId) -> Result<&mut Task, DataStoreError> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(DataStoreError::NotFound(id))
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    fn release_edit_if_gone(&mut self) {
        if let Some(id) = self.editing {
            if self.position(id).is_none() {
                self.editing = None;
            }
        }
    }
}
