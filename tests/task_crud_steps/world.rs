//! Shared world state for task CRUD BDD scenarios.

use std::sync::{Arc, Mutex};

use camino::Utf8PathBuf;
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use taskboard::task::{
    adapters::file::JsonFileTaskStore,
    domain::Task,
    services::{TaskService, TaskServiceError},
};
use tempfile::TempDir;

/// Clock that advances one second per reading so update times differ.
pub struct TickingClock {
    next: Mutex<DateTime<Utc>>,
}

impl TickingClock {
    fn new() -> Self {
        let start = Utc
            .with_ymd_and_hms(2025, 6, 1, 8, 0, 0)
            .single()
            .expect("valid start time");
        Self {
            next: Mutex::new(start),
        }
    }
}

impl Clock for TickingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().expect("clock lock");
        let now = *next;
        *next = now + Duration::seconds(1);
        now
    }
}

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<JsonFileTaskStore, TickingClock>;

/// Scenario world for task CRUD behaviour tests.
pub struct TaskCrudWorld {
    _dir: TempDir,
    pub store_path: Utf8PathBuf,
    pub service: TestTaskService,
    pub original_task: Option<Task>,
    pub last_task: Option<Task>,
    pub last_error: Option<TaskServiceError>,
    pub listed: Option<Vec<Task>>,
}

impl TaskCrudWorld {
    /// Creates a world backed by a task file in a fresh temporary directory.
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .expect("temp dir path is UTF-8");
        let store_path = root.join("tasks.json");
        let service = TaskService::new(
            Arc::new(JsonFileTaskStore::new(store_path.clone())),
            Arc::new(TickingClock::new()),
        );

        Self {
            _dir: dir,
            store_path,
            service,
            original_task: None,
            last_task: None,
            last_error: None,
            listed: None,
        }
    }

    /// Records the outcome of a task-returning operation.
    pub fn record(&mut self, result: Result<Task, TaskServiceError>) {
        match result {
            Ok(task) => self.last_task = Some(task),
            Err(err) => self.last_error = Some(err),
        }
    }
}

impl Default for TaskCrudWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskCrudWorld {
    TaskCrudWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
