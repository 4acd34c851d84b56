//! # Strings Module
//!
//! Centralizes user-facing strings for the staging flow.
//! Ensures consistency in messaging and easier localization/updates.

pub mod messages;
