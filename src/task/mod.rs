//! Task tracking core: records, validation, persistence, and CRUD services.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Request validation in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
