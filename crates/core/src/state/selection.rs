use shared::TubeId;

/// Single-object selection state.
///
/// Selection is deliberately not part of undo history: undo/redo affects
/// geometry and placement only, never which tube is selected.
#[derive(Default)]
pub struct SelectionState {
    selected: Option<TubeId>,
}

impl SelectionState {
    /// Currently selected tube, if any.
    pub fn selected(&self) -> Option<&TubeId> {
        self.selected.as_ref()
    }

    /// Check if a tube is selected
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// Select a single tube (replaces any previous selection)
    pub fn select(&mut self, id: TubeId) {
        self.selected = Some(id);
    }

    /// Clear the selection
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Check whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }
}
