//! Create/edit dialog state for search operators.
//!
//! SYSTEM CONTEXT
//! ==============
//! The admin page opens this dialog from a table row (edit) or from the
//! create button (create). The dialog loads the record without blocking,
//! posts the form, and either reloads the page, swaps in the server's form
//! markup, or falls into a generic error state with saving disabled.

#[cfg(test)]
#[path = "operator_modal_test.rs"]
mod operator_modal_test;

use crate::net::api::{CSRF_FIELD, FormPairs};
use crate::net::types::{FormOutcome, OperatorRecord};

/// Banner text shown when a response cannot be used at all.
pub const GENERIC_ERROR: &str = "Unexpected error while submitting the form. Please contact an administrator.";

/// Class toggled on each markup `.form-group` in the error state.
pub const ERROR_GROUP_CLASS: &str = "has-error";

/// Whether the dialog creates a new operator or edits an existing one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModalMode {
    #[default]
    Create,
    Edit(String),
}

impl ModalMode {
    /// Derive the mode from the identifier of the row that was clicked.
    pub fn from_row_id(row_id: Option<&str>) -> Self {
        match row_id.map(str::trim) {
            Some(id) if !id.is_empty() => Self::Edit(id.to_owned()),
            _ => Self::Create,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Edit(_) => "Edit",
        }
    }
}

/// Editable dialog fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OperatorForm {
    pub document_id: String,
    pub name: String,
    /// One XPath per line.
    pub xpath_list: String,
}

impl OperatorForm {
    pub fn from_record(record: &OperatorRecord) -> Self {
        Self {
            document_id: record.id.clone(),
            name: record.name.clone(),
            xpath_list: record.xpath_text(),
        }
    }

    /// Serialize in the field order of the server-rendered form.
    pub fn to_pairs(&self, csrf_token: &str) -> FormPairs {
        vec![
            (CSRF_FIELD.to_owned(), csrf_token.to_owned()),
            ("document_id".to_owned(), self.document_id.clone()),
            ("name".to_owned(), self.name.clone()),
            ("xpath_list".to_owned(), self.xpath_list.clone()),
        ]
    }
}

/// What the form element currently contains.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormBody {
    /// Inputs bound to `OperatorForm`.
    #[default]
    Fields,
    /// Server-rendered form fragment; serialized straight from the DOM.
    Markup(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Ready,
    Loading,
    Saving,
    /// Saved; the page is about to reload.
    Saved,
}

#[derive(Clone, Debug, Default)]
pub struct OperatorModalState {
    pub open: bool,
    pub mode: ModalMode,
    pub form: OperatorForm,
    pub body: FormBody,
    pub phase: ModalPhase,
    /// Generic error banner text, when in the error state.
    pub error: Option<String>,
    pub save_disabled: bool,
    /// Bumped on every open; save responses carry the value they started under.
    generation: u64,
}

impl OperatorModalState {
    /// Open the dialog for the clicked row. Returns the identifier to load
    /// when the dialog opens in edit mode.
    pub fn open_for(&mut self, row_id: Option<&str>) -> Option<String> {
        self.reset();
        self.generation += 1;
        self.open = true;
        self.form = OperatorForm::default();
        self.mode = ModalMode::from_row_id(row_id);
        match &self.mode {
            ModalMode::Create => None,
            ModalMode::Edit(id) => {
                self.phase = ModalPhase::Loading;
                Some(id.clone())
            }
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Clear error flags and re-enable saving.
    pub fn reset(&mut self) {
        self.body = FormBody::Fields;
        self.phase = ModalPhase::Ready;
        self.error = None;
        self.save_disabled = false;
    }

    pub fn title(&self) -> &'static str {
        self.mode.title()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ModalPhase::Loading
    }

    /// Apply the edit-record load. Ignored if the dialog was closed or
    /// reopened for another row meanwhile.
    pub fn apply_loaded(&mut self, id: &str, outcome: FormOutcome<OperatorRecord>) {
        if !self.open || self.mode != ModalMode::Edit(id.to_owned()) || !self.is_loading() {
            return;
        }
        match outcome {
            FormOutcome::Success(record) => {
                self.form = OperatorForm::from_record(&record);
                self.phase = ModalPhase::Ready;
            }
            FormOutcome::Markup(markup) => {
                self.body = FormBody::Markup(markup);
                self.phase = ModalPhase::Ready;
            }
            FormOutcome::Failed(_) => self.show_generic_error(),
        }
    }

    /// Enter the saving phase and return the ticket the response must carry.
    /// `None` when saving is not allowed.
    pub fn begin_save(&mut self) -> Option<u64> {
        if !self.open || self.save_disabled || self.phase != ModalPhase::Ready {
            return None;
        }
        self.phase = ModalPhase::Saving;
        Some(self.generation)
    }

    /// Apply the save response. Returns `true` when the page should reload.
    ///
    /// Ignored if the dialog was closed or reopened since the save started.
    pub fn apply_saved(&mut self, ticket: u64, outcome: FormOutcome<()>) -> bool {
        if !self.open || ticket != self.generation || self.phase != ModalPhase::Saving {
            return false;
        }
        match outcome {
            FormOutcome::Success(()) => {
                self.phase = ModalPhase::Saved;
                true
            }
            FormOutcome::Markup(markup) => {
                self.body = FormBody::Markup(markup);
                self.phase = ModalPhase::Ready;
                false
            }
            FormOutcome::Failed(_) => {
                self.show_generic_error();
                false
            }
        }
    }

    /// Flag every field group, show the banner, and disable saving.
    pub fn show_generic_error(&mut self) {
        self.phase = ModalPhase::Ready;
        self.error = Some(GENERIC_ERROR.to_owned());
        self.save_disabled = true;
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Whether the field groups inside server markup must carry the error
    /// class. Bound fields get it from `form_group_class` instead.
    pub fn flags_markup_groups(&self) -> bool {
        self.has_error() && matches!(self.body, FormBody::Markup(_))
    }

    pub fn form_group_class(&self) -> &'static str {
        if self.has_error() { "form-group has-error" } else { "form-group" }
    }

    pub fn save_button_class(&self) -> &'static str {
        if self.save_disabled { "btn btn--danger" } else { "btn btn--primary" }
    }
}
