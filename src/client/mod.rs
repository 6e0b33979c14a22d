//! Headless client for the task API.
//!
//! [`TaskBoardController`] owns the edit form and the rendered task list and
//! keeps both in step with the server. Rendering is left to the front end:
//! it reads [`FormState`], [`ListView`], and [`Notice`] snapshots and feeds
//! user actions back into the controller. Server access goes through the
//! [`TaskApi`] port, implemented over HTTP by [`HttpTaskApi`].

mod api;
mod controller;
mod http;
mod view;

pub use api::{ApiClientError, ApiClientResult, TaskApi};
pub use controller::{
    DELETE_PROMPT, DeleteConfirmation, DeleteOutcome, SubmitOutcome, TaskBoardController,
};
pub use http::{DEFAULT_BASE_URL, HttpTaskApi};
pub use view::{
    EMPTY_LIST_MESSAGE, FormMode, FormState, LOAD_FAILED_MESSAGE, ListView,
    NO_DESCRIPTION_PLACEHOLDER, Notice, TaskCard,
};
