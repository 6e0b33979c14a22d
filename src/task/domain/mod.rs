//! Domain model for task tracking.
//!
//! A [`Task`] is the only persisted record type. Its editable fields are
//! carried by [`TaskContent`], which can only be built from input that
//! satisfies the title invariant, so every stored task has a non-blank title
//! and one of the three [`TaskStatus`] values.

mod content;
mod error;
mod ids;
mod status;
mod task;

pub use content::TaskContent;
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task};
