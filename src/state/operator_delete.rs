#[cfg(test)]
#[path = "operator_delete_test.rs"]
mod operator_delete_test;

/// Row captured when the delete button was clicked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteTarget {
    pub id: String,
    pub name: String,
}

/// Delete confirmation dialog state.
///
/// The page reloads after a confirmed delete whatever the outcome, so there
/// is no failure state here.
#[derive(Clone, Debug, Default)]
pub struct DeleteModalState {
    pub open: bool,
    pub target: Option<DeleteTarget>,
    pub submitting: bool,
}

impl DeleteModalState {
    pub fn open_for(&mut self, id: &str, name: &str) {
        self.open = true;
        self.submitting = false;
        self.target = Some(DeleteTarget { id: id.to_owned(), name: name.trim().to_owned() });
    }

    pub fn close(&mut self) {
        self.open = false;
        self.target = None;
    }

    /// Start the delete request. Returns the identifier to delete, or `None`
    /// if nothing is targeted or a request is already running.
    pub fn confirm(&mut self) -> Option<String> {
        if self.submitting {
            return None;
        }
        let id = self.target.as_ref().map(|t| t.id.clone()).filter(|id| !id.is_empty())?;
        self.submitting = true;
        Some(id)
    }

    pub fn target_name(&self) -> &str {
        self.target.as_ref().map_or("", |t| t.name.as_str())
    }
}
