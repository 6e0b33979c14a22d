//! Board controller keeping the form and list in sync with the server.
//!
//! The list is never patched locally: on start-up and after every
//! successful create, update, or delete the controller re-fetches the whole
//! collection and rebuilds the [`ListView`] from it. Failed mutations leave
//! the list and the form untouched and raise a [`Notice`].

use super::{ApiClientError, FormState, ListView, Notice, TaskApi};
use crate::task::domain::{Task, TaskId};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::warn;

/// Question put to the user before a delete request is sent.
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this task?";

const CREATE_FAILED_MESSAGE: &str = "Failed to create task.";
const UPDATE_FAILED_MESSAGE: &str = "Failed to update task.";
const DELETE_FAILED_MESSAGE: &str = "Failed to delete.";

/// Explicit user confirmation for destructive deletes.
///
/// Any `Fn(&TaskId) -> bool` closure implements this trait.
#[cfg_attr(test, mockall::automock)]
pub trait DeleteConfirmation: Send + Sync {
    /// Asks whether task `id` should really be deleted (see
    /// [`DELETE_PROMPT`]). Returning `false` cancels the delete.
    fn confirm_delete(&self, id: &TaskId) -> bool;
}

impl<F> DeleteConfirmation for F
where
    F: Fn(&TaskId) -> bool + Send + Sync,
{
    fn confirm_delete(&self, id: &TaskId) -> bool {
        self(id)
    }
}

/// Result of a form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A task was created; the form is back in create mode.
    Created(Task),
    /// A task was updated; the form is back in create mode.
    Updated(Task),
    /// The request failed; the form keeps its contents and a notice carries
    /// this message.
    Rejected(String),
    /// Another submission is still in flight; nothing was sent.
    Busy,
}

/// Result of a delete action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The task was deleted and the list re-fetched.
    Deleted,
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
    /// The request failed; the list is unchanged and a notice carries this
    /// message.
    Failed(String),
}

/// Holds the busy flag for one submission; clears it on drop, including
/// when the submission future is cancelled.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        if flag.swap(true, Ordering::AcqRel) {
            None
        } else {
            Some(Self { flag })
        }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[derive(Debug, Default)]
struct BoardState {
    form: FormState,
    list: ListView,
    notice: Option<Notice>,
}

/// Client state controller for the task board.
///
/// Methods take `&self` so a front end can share the controller between
/// event handlers; a busy flag rejects overlapping submissions.
pub struct TaskBoardController<A, D>
where
    A: TaskApi,
    D: DeleteConfirmation,
{
    api: A,
    confirmation: D,
    state: Mutex<BoardState>,
    busy: AtomicBool,
}

impl<A, D> TaskBoardController<A, D>
where
    A: TaskApi,
    D: DeleteConfirmation,
{
    /// Creates a controller with a blank form and an unloaded list.
    #[must_use]
    pub fn new(api: A, confirmation: D) -> Self {
        Self {
            api,
            confirmation,
            state: Mutex::new(BoardState::default()),
            busy: AtomicBool::new(false),
        }
    }

    /// Returns a snapshot of the form.
    #[must_use]
    pub fn form(&self) -> FormState {
        self.lock().form.clone()
    }

    /// Returns a snapshot of the rendered list.
    #[must_use]
    pub fn list(&self) -> ListView {
        self.lock().list.clone()
    }

    /// Returns the current notice, if any.
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        self.lock().notice.clone()
    }

    /// Returns whether a submission is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Clears the current notice.
    pub fn dismiss_notice(&self) {
        self.lock().notice = None;
    }

    /// Applies a user edit to the form fields.
    pub fn edit_form(&self, edit: impl FnOnce(&mut FormState)) {
        edit(&mut self.lock().form);
    }

    /// Fetches the full collection and re-renders the list from scratch.
    ///
    /// A failed fetch renders [`ListView::LoadFailed`], which is distinct
    /// from an empty collection.
    pub async fn refresh(&self) {
        let view = match self.api.list().await {
            Ok(tasks) => ListView::from_tasks(&tasks),
            Err(err) => {
                warn!(error = %err, "failed to fetch tasks");
                ListView::LoadFailed
            }
        };
        self.lock().list = view;
    }

    /// Switches the form to edit mode, pre-filled from `task`.
    pub fn start_edit(&self, task: &Task) {
        self.lock().form = FormState::for_task(task);
    }

    /// Leaves edit mode without sending anything.
    pub fn cancel_edit(&self) {
        self.lock().form.reset();
    }

    /// Submits the form: update in edit mode, create otherwise.
    ///
    /// On success the form resets to create mode and the list is
    /// re-fetched. On failure the form keeps its contents and a notice is
    /// raised.
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(_busy) = BusyGuard::acquire(&self.busy) else {
            return SubmitOutcome::Busy;
        };
        self.send_form().await
    }

    /// Deletes task `id` after explicit confirmation.
    ///
    /// The list is only re-fetched after the server confirms the delete;
    /// nothing is removed optimistically.
    pub async fn delete(&self, id: &TaskId) -> DeleteOutcome {
        if !self.confirmation.confirm_delete(id) {
            return DeleteOutcome::Cancelled;
        }
        match self.api.delete(id).await {
            Ok(()) => {
                self.lock().notice = None;
                self.refresh().await;
                DeleteOutcome::Deleted
            }
            Err(err) => DeleteOutcome::Failed(self.raise(&err, DELETE_FAILED_MESSAGE)),
        }
    }

    async fn send_form(&self) -> SubmitOutcome {
        let (editing, payload) = {
            let state = self.lock();
            (state.form.editing_id().cloned(), state.form.to_payload())
        };

        let result = match &editing {
            Some(id) => self.api.update(id, &payload).await,
            None => self.api.create(&payload).await,
        };

        match result {
            Ok(task) => {
                {
                    let mut state = self.lock();
                    state.form.reset();
                    state.notice = None;
                }
                self.refresh().await;
                if editing.is_some() {
                    SubmitOutcome::Updated(task)
                } else {
                    SubmitOutcome::Created(task)
                }
            }
            Err(err) => {
                let fallback = if editing.is_some() {
                    UPDATE_FAILED_MESSAGE
                } else {
                    CREATE_FAILED_MESSAGE
                };
                SubmitOutcome::Rejected(self.raise(&err, fallback))
            }
        }
    }

    fn raise(&self, err: &ApiClientError, fallback: &str) -> String {
        warn!(error = %err, "task request failed");
        let message = err.user_message(fallback);
        self.lock().notice = Some(Notice::Error(message.clone()));
        message
    }

    fn lock(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
