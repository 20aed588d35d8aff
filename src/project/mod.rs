//! Project and task management for Taskboard.
//!
//! This module provides create, read, update, and delete operations over
//! project aggregates. A project owns an ordered collection of tasks, which
//! are loaded alongside the project but are never modified by project
//! updates. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
