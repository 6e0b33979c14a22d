//! Task store backed by one pretty-printed JSON array file.
//!
//! Writes go to a hidden sibling file which is then renamed over the target,
//! so a concurrent reader sees either the old or the new collection. File
//! access goes through a `cap-std` directory handle opened on the parent
//! directory.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use tracing::warn;

use crate::task::{
    domain::Task,
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Task store persisting the whole collection to a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileTaskStore {
    path: Utf8PathBuf,
}

impl JsonFileTaskStore {
    /// Creates a store for the file at `path`. The file need not exist yet.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

#[async_trait]
impl TaskStore for JsonFileTaskStore {
    async fn load_all(&self) -> TaskStoreResult<Vec<Task>> {
        let path = self.path.clone();
        run_blocking(move || Ok(read_tasks(&path))).await
    }

    async fn save_all(&self, tasks: &[Task]) -> TaskStoreResult<()> {
        let contents = serde_json::to_string_pretty(tasks).map_err(TaskStoreError::persistence)?;
        let path = self.path.clone();
        run_blocking(move || write_tasks(&path, &contents).map_err(TaskStoreError::persistence))
            .await
    }
}

/// Runs blocking filesystem work off the async executor threads.
async fn run_blocking<F, T>(f: F) -> TaskStoreResult<T>
where
    F: FnOnce() -> TaskStoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(TaskStoreError::persistence)?
}

fn open_parent_dir(path: &Utf8Path) -> io::Result<(Dir, &str)> {
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("task store path must include a file name"))?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

fn read_tasks(path: &Utf8Path) -> Vec<Task> {
    let read = open_parent_dir(path).and_then(|(dir, file_name)| dir.read_to_string(file_name));
    let contents = match read {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Vec::new(),
        Err(err) => {
            warn!(path = %path, error = %err, "task file unreadable, treating as empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(tasks) => tasks,
        Err(err) => {
            warn!(path = %path, error = %err, "task file is not a valid task array, treating as empty");
            Vec::new()
        }
    }
}

fn write_tasks(path: &Utf8Path, contents: &str) -> io::Result<()> {
    let (dir, file_name) = open_parent_dir(path)?;
    let staging_name = format!(".{file_name}.tmp");
    dir.write(&staging_name, contents)?;
    dir.rename(&staging_name, &dir, file_name)
}
