//! Line-oriented presentation layer: turns typed commands into intents and
//! draws snapshots and notifications as plain text.

use thiserror::Error;

use crate::controller::{Filter, Intent, LoadState, Notification, NotificationKind, Snapshot};
use crate::model::{ModelError, TaskId};

pub const HELP: &str = "commands: input <text> | add [text] | update [text] | submit | \
toggle <id> | delete <id> | edit <id> | complete-all | clear-completed | \
filter all|completed|uncompleted | show | help | quit";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Intents(Vec<Intent>),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("{0}")]
    BadTaskId(#[from] ModelError),
    #[error("{0}")]
    BadFilter(String),
}

pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "input" => Command::Intents(vec![Intent::ChangeInput(rest.to_string())]),
        "add" => Command::Intents(with_input(rest, Intent::SubmitAdd)),
        "update" => Command::Intents(with_input(rest, Intent::SubmitUpdate)),
        "submit" => Command::Intents(vec![Intent::Submit]),
        "toggle" => Command::Intents(vec![Intent::Toggle(task_id(rest, "toggle")?)]),
        "delete" => Command::Intents(vec![Intent::Delete(task_id(rest, "delete")?)]),
        "edit" => Command::Intents(vec![Intent::BeginEdit(task_id(rest, "edit")?)]),
        "complete-all" => Command::Intents(vec![Intent::CompleteAll]),
        "clear-completed" => Command::Intents(vec![Intent::ClearCompleted]),
        "filter" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("filter"));
            }
            let filter = rest.parse::<Filter>().map_err(CommandError::BadFilter)?;
            Command::Intents(vec![Intent::SetFilter(filter)])
        }
        "show" => Command::Show,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

// `add milk` types into the input first, a bare `add` submits what is there
fn with_input(text: &str, submit: Intent) -> Vec<Intent> {
    if text.is_empty() {
        vec![submit]
    } else {
        vec![Intent::ChangeInput(text.to_string()), submit]
    }
}

fn task_id(arg: &str, command: &'static str) -> Result<TaskId, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument(command));
    }
    Ok(arg.parse::<TaskId>()?)
}

pub fn render(snapshot: &Snapshot) -> String {
    if snapshot.load_state == LoadState::Loading {
        return "Loading...\n".to_string();
    }

    let button = if snapshot.edit_session_active {
        "Update"
    } else {
        "Add"
    };
    let mut lines = vec![
        "Todo List".to_string(),
        format!("> {:<40} [{}]", snapshot.pending_input, button),
    ];
    lines.extend(snapshot.visible_tasks.iter().map(|task| {
        let mark = if task.completed { 'x' } else { ' ' };
        format!("  [{}] {:>4}  {}", mark, task.id.to_string(), task.title)
    }));
    lines.push(format!(
        "Filter: {} | Completed: {} | Total Tasks: {}",
        snapshot.filter, snapshot.completed_count, snapshot.total_count
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn render_notification(notification: &Notification) -> String {
    match notification.kind {
        NotificationKind::Success => format!("[ok] {}", notification.message),
        NotificationKind::Error => format!("[error] {}", notification.message),
    }
}
