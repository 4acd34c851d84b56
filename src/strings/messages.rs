//! # Messages
//!
//! User-facing strings for the add-to-index flow. Both output channels
//! (notification banner and command console) receive these verbatim, so
//! wording lives in one place.

/// Label the per-operation output console is created and registered under.
pub const ADD_TO_INDEX_LABEL: &str = "Git add to index";

pub fn add_file_to_index(name: &str) -> String {
    format!("Add file `{name}` to index?")
}

pub fn add_folder_to_index(name: &str) -> String {
    format!("Add content of folder `{name}` to index?")
}

pub const ADD_SELECTION_TO_INDEX: &str = "Add the selected items to index?";

pub const NOTHING_TO_ADD: &str = "Nothing to add to index.";
pub const NOTHING_TO_ADD_MULTISELECT: &str =
    "Nothing to add to index in the selected items.";

pub const ADD_SUCCESS: &str = "Successfully added to index.";
pub const ADD_FAILED: &str = "❌ Failed to add to index.";
pub const STATUS_FAILED: &str = "❌ Failed to get the project status.";
