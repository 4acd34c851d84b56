//! # Infrastructure Layer
//!
//! Handles interactions with external systems and services.
//! Implements the traits defined in the Domain layer (StatusSource,
//! StageExecutor, the reporting sinks).

pub mod console;
pub mod workspace;
