//! Step definitions for project management scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
