//! JSON file task store adapter.

mod task;

pub use task::JsonFileTaskStore;
