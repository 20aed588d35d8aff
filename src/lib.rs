//! Taskboard: project and task management backend.
//!
//! This crate provides project CRUD over a relational store and user
//! registration and login relayed to a managed identity provider.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Validated value types and aggregates
//! - **Ports**: Async trait contracts for storage and identity
//! - **Adapters**: `PostgreSQL`, Cognito, and in-memory implementations
//! - **Services**: Orchestration used by the transport layer
//!
//! # Modules
//!
//! - [`project`]: Projects and the tasks they own
//! - [`auth`]: Registration and login through an identity provider
//! - [`api`]: Wire DTOs and HTTP status mapping
//! - [`config`]: Environment configuration
//! - [`context`]: Service graph construction

pub mod api;
pub mod auth;
pub mod config;
pub mod context;
pub mod project;
