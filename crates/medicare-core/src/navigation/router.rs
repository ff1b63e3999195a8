//! View router state.

use serde::{Deserialize, Serialize};

use super::view::ViewId;

/// The active view plus the most recently selected entity.
///
/// The router is plain state: it does not consult the role policy. Permission
/// checks happen in the shell before `navigate` is called.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterState {
    pub current_view: ViewId,
    pub selected_entity_id: Option<u32>,
}

impl RouterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches to `view`.
    ///
    /// The selected entity is only overwritten when `entity_id` is given; a
    /// navigation without one keeps the previous selection.
    pub fn navigate(&mut self, view: ViewId, entity_id: Option<u32>) {
        self.current_view = view;
        if let Some(id) = entity_id {
            self.selected_entity_id = Some(id);
        }
    }

    /// Back to `(Dashboard, None)`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn current_screen(&self) -> ViewId {
        self.current_view
    }

    /// The selected entity, but only while a detail view is active.
    pub fn detail_entity(&self) -> Option<u32> {
        if self.current_view.is_detail() {
            self.selected_entity_id
        } else {
            None
        }
    }
}
