//! Adapter implementations of the task store port.
//!
//! - [`memory`]: process-local store for tests and embedding
//! - [`file`]: single JSON file store used by the server binary

pub mod file;
pub mod memory;
