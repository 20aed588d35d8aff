//! Step definitions for user authentication scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
