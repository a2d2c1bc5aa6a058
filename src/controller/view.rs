use std::str::FromStr;

use crate::datastore::TaskStore;
use crate::model::Task;

use super::state::{LoadState, TodoState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Completed,
    Uncompleted,
}

impl Default for Filter {
    fn default() -> Self {
        Filter::All
    }
}

impl Filter {
    pub fn accepts(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => task.completed,
            Filter::Uncompleted => !task.completed,
        }
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" => Ok(Filter::All),
            "completed" => Ok(Filter::Completed),
            "uncompleted" => Ok(Filter::Uncompleted),
            other => Err(format!("unknown filter: {}", other)),
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Filter::All => f.write_str("all"),
            Filter::Completed => f.write_str("completed"),
            Filter::Uncompleted => f.write_str("uncompleted"),
        }
    }
}

/// Read-only derivations over a store and a filter selection.
pub struct ViewProjector<'a> {
    store: &'a TaskStore,
    filter: Filter,
}

impl<'a> ViewProjector<'a> {
    pub fn new(store: &'a TaskStore, filter: Filter) -> Self {
        Self { store, filter }
    }

    /// Tasks accepted by the filter, in collection order.
    pub fn visible_tasks(&self) -> Vec<Task> {
        self.store
            .tasks()
            .iter()
            .filter(|task| self.filter.accepts(task))
            .cloned()
            .collect()
    }

    // counts ignore the filter
    pub fn completed_count(&self) -> usize {
        self.store.tasks().iter().filter(|task| task.completed).count()
    }

    pub fn total_count(&self) -> usize {
        self.store.tasks().len()
    }
}

/// Immutable picture of the state pushed to the presentation layer after
/// every mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub visible_tasks: Vec<Task>,
    pub completed_count: usize,
    pub total_count: usize,
    pub load_state: LoadState,
    pub filter: Filter,
    pub pending_input: String,
    pub edit_session_active: bool,
}

impl Snapshot {
    pub fn capture(state: &TodoState) -> Self {
        let projector = ViewProjector::new(&state.store, state.filter);
        Self {
            visible_tasks: projector.visible_tasks(),
            completed_count: projector.completed_count(),
            total_count: projector.total_count(),
            load_state: state.load_state,
            filter: state.filter,
            pending_input: state.input.clone(),
            edit_session_active: state.store.editing().is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskId;

    fn store() -> TaskStore {
        let mut store = TaskStore::new();
        store.replace_all(
            (1..=6u64)
                .map(|id| Task {
                    id: TaskId::from(id),
                    title: format!("task {}", id),
                    completed: id % 3 == 0,
                })
                .collect(),
        );
        store
    }

    #[test]
    fn test_filters() {
        let store = store();

        let all = ViewProjector::new(&store, Filter::All).visible_tasks();
        assert_eq!(all.len(), store.tasks().len());

        let completed = ViewProjector::new(&store, Filter::Completed).visible_tasks();
        let ids: Vec<TaskId> = completed.iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![TaskId::from(3), TaskId::from(6)]);
        assert!(completed.iter().all(|task| store.tasks().contains(task)));

        let uncompleted = ViewProjector::new(&store, Filter::Uncompleted).visible_tasks();
        let ids: Vec<TaskId> = uncompleted.iter().map(|task| task.id).collect();
        assert_eq!(
            ids,
            vec![
                TaskId::from(1),
                TaskId::from(2),
                TaskId::from(4),
                TaskId::from(5)
            ]
        );
    }

    #[test]
    fn test_counts_ignore_filter() {
        let store = store();
        for filter in [Filter::All, Filter::Completed, Filter::Uncompleted] {
            let projector = ViewProjector::new(&store, filter);
            assert_eq!(projector.completed_count(), 2);
            assert_eq!(projector.total_count(), 6);
            assert_eq!(
                projector.completed_count()
                    + (projector.total_count() - projector.completed_count()),
                projector.total_count()
            );
        }
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("completed".parse::<Filter>(), Ok(Filter::Completed));
        assert_eq!(" uncompleted ".parse::<Filter>(), Ok(Filter::Uncompleted));
        assert_eq!("all".parse::<Filter>(), Ok(Filter::All));
        assert!("done".parse::<Filter>().is_err());
        assert_eq!(Filter::Uncompleted.to_string(), "uncompleted");
    }

    #[test]
    fn test_snapshot() {
        let mut state = TodoState::new();
        state.store = store();
        state.filter = Filter::Completed;
        state.input = "draft".to_string();
        state.store.begin_edit(TaskId::from(2)).unwrap();

        let snapshot = Snapshot::capture(&state);

        assert_eq!(snapshot.visible_tasks.len(), 2);
        assert_eq!(snapshot.completed_count, 2);
        assert_eq!(snapshot.total_count, 6);
        assert_eq!(snapshot.load_state, LoadState::Loading);
        assert_eq!(snapshot.pending_input, "draft");
        assert!(snapshot.edit_session_active);
    }
}
