//! Render-ready snapshots of the form and the task list.

use crate::task::{
    domain::{Task, TaskId, TaskStatus},
    validation::TaskPayload,
};
use chrono::Local;

/// Shown when the collection is empty.
pub const EMPTY_LIST_MESSAGE: &str = "No tasks found.";
/// Shown when the collection could not be fetched.
pub const LOAD_FAILED_MESSAGE: &str = "Error loading tasks.";
/// Shown in place of an empty description.
pub const NO_DESCRIPTION_PLACEHOLDER: &str = "(no description)";

const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Whether the form creates a new task or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Blank form; submitting creates a task.
    Create,
    /// Form pre-filled from a task; submitting updates it.
    Edit,
}

impl FormMode {
    /// Returns the form heading.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Create => "Create New Task",
            Self::Edit => "Edit Task",
        }
    }

    /// Returns the submit button label.
    #[must_use]
    pub const fn submit_label(self) -> &'static str {
        match self {
            Self::Create => "Add Task",
            Self::Edit => "Update Task",
        }
    }

    /// Returns whether the cancel affordance is visible.
    #[must_use]
    pub const fn shows_cancel(self) -> bool {
        matches!(self, Self::Edit)
    }
}

/// Current contents of the create/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    editing: Option<TaskId>,
    title: String,
    description: String,
    status: TaskStatus,
}

impl FormState {
    /// Creates a form pre-filled from `task` in edit mode.
    #[must_use]
    pub fn for_task(task: &Task) -> Self {
        Self {
            editing: Some(task.id().clone()),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            status: task.status(),
        }
    }

    /// Returns the current mode, derived from whether an id is held.
    #[must_use]
    pub const fn mode(&self) -> FormMode {
        if self.editing.is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        }
    }

    /// Returns the id of the task being edited.
    #[must_use]
    pub const fn editing_id(&self) -> Option<&TaskId> {
        self.editing.as_ref()
    }

    /// Returns the title field.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description field.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the selected status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Sets the title field.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Sets the description field.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Sets the selected status.
    pub const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Clears every field and returns to create mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Builds the request body: trimmed text fields and the status value.
    #[must_use]
    pub fn to_payload(&self) -> TaskPayload {
        TaskPayload::new(self.title.trim(), self.status.as_str())
            .with_description(self.description.trim())
    }
}

/// One rendered task entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCard {
    task: Task,
    description_text: String,
    created_text: String,
}

impl TaskCard {
    /// Builds the card for `task`.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        let description_text = if task.description().is_empty() {
            NO_DESCRIPTION_PLACEHOLDER.to_owned()
        } else {
            task.description().to_owned()
        };
        let created_text = task
            .created_at()
            .with_timezone(&Local)
            .format(CREATED_FORMAT)
            .to_string();
        Self {
            task: task.clone(),
            description_text,
            created_text,
        }
    }

    /// Returns the underlying task, for example to start editing it.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the title line.
    #[must_use]
    pub fn title(&self) -> &str {
        self.task.title()
    }

    /// Returns the description line, with a placeholder when empty.
    #[must_use]
    pub fn description_text(&self) -> &str {
        &self.description_text
    }

    /// Returns the status label.
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        self.task.status().as_str()
    }

    /// Returns the creation time in local time.
    #[must_use]
    pub fn created_text(&self) -> &str {
        &self.created_text
    }
}

/// The rendered task list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListView {
    /// Nothing fetched yet.
    #[default]
    Loading,
    /// The server returned an empty collection.
    Empty,
    /// The last fetch failed.
    LoadFailed,
    /// The server returned at least one task.
    Tasks(Vec<TaskCard>),
}

impl ListView {
    /// Renders `tasks` from scratch.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        if tasks.is_empty() {
            Self::Empty
        } else {
            Self::Tasks(tasks.iter().map(TaskCard::from_task).collect())
        }
    }

    /// Returns the inline message for the empty and failed states.
    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            Self::Empty => Some(EMPTY_LIST_MESSAGE),
            Self::LoadFailed => Some(LOAD_FAILED_MESSAGE),
            Self::Loading | Self::Tasks(_) => None,
        }
    }

    /// Returns the rendered cards, empty unless tasks were fetched.
    #[must_use]
    pub fn cards(&self) -> &[TaskCard] {
        match self {
            Self::Tasks(cards) => cards,
            Self::Loading | Self::Empty | Self::LoadFailed => &[],
        }
    }
}

/// A user-visible alert raised by a failed mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The operation failed with this message.
    Error(String),
}

impl Notice {
    /// Returns the notice text.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Error(message) => message,
        }
    }
}
