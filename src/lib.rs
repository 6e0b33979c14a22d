//! Taskboard: a small task-tracking service and its client controller.
//!
//! The crate provides a JSON-over-HTTP CRUD API for to-do records persisted
//! in a single JSON file, and a headless client controller that keeps an
//! edit form and a rendered task list in sync with that API.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Task records and their invariants, free of infrastructure
//! - **Ports**: Abstract trait interfaces for persistence and remote access
//! - **Adapters**: In-memory and JSON file stores, an HTTP client
//!
//! # Modules
//!
//! - [`task`]: Task records, validation, storage, and CRUD services
//! - [`http`]: axum router exposing the task service
//! - [`client`]: Client state controller and its HTTP adapter
//! - [`config`]: Environment-driven server configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod client;
pub mod config;
pub mod http;
pub mod task;
pub mod telemetry;
