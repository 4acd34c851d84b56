//! # Interface Layer
//!
//! The command-line surface: argument-derived selection and the handlers
//! that drive the staging flow.

pub mod commands;
pub mod selection;
