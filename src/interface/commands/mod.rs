//! # Command Handlers
//!
//! Handler functions for the CLI entry points. These drive the
//! application-layer coordinator and own all terminal interaction.

pub mod add;
