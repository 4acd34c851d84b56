//! # Application Layer
//!
//! Contains the orchestration logic of the staging flow: the coordinator
//! that drives it and the reporter that routes its outcomes.

pub mod coordinator;
pub mod reporter;
