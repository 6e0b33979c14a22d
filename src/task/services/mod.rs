//! Application services for task CRUD orchestration.

mod lifecycle;

pub use lifecycle::{TaskService, TaskServiceError, TaskServiceResult};
