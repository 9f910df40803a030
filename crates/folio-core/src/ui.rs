//! Per-page UI state.

use serde::{Deserialize, Serialize};

/// What a management page is currently doing with its records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "id", rename_all = "snake_case")]
pub enum EditState {
    #[default]
    Viewing,
    Creating,
    Editing(i64),
}

impl EditState {
    /// `Editing(id)` for an existing record, `Creating` otherwise.
    pub fn for_target(id: Option<i64>) -> Self {
        match id {
            Some(id) => EditState::Editing(id),
            None => EditState::Creating,
        }
    }

    pub fn is_editing(&self, id: i64) -> bool {
        matches!(self, EditState::Editing(current) if *current == id)
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, EditState::Viewing)
    }

    /// Close the form after a save or cancel.
    pub fn finish(&mut self) {
        *self = EditState::Viewing;
    }
}
