use super::*;
use crate::net::error::ApiError;

fn record(id: &str, name: &str, xpaths: &[&str]) -> OperatorRecord {
    OperatorRecord {
        id: id.to_owned(),
        name: name.to_owned(),
        xpath_list: xpaths.iter().map(|x| (*x).to_owned()).collect(),
    }
}

fn opened_edit(id: &str) -> OperatorModalState {
    let mut state = OperatorModalState::default();
    state.open_for(Some(id));
    state
}

// =============================================================
// Mode and opening
// =============================================================

#[test]
fn mode_from_row_id() {
    assert_eq!(ModalMode::from_row_id(None), ModalMode::Create);
    assert_eq!(ModalMode::from_row_id(Some("")), ModalMode::Create);
    assert_eq!(ModalMode::from_row_id(Some("  ")), ModalMode::Create);
    assert_eq!(ModalMode::from_row_id(Some("42")), ModalMode::Edit("42".to_owned()));
}

#[test]
fn create_mode_has_empty_fields_and_create_title() {
    let mut state = opened_edit("1");
    state.apply_loaded("1", FormOutcome::Success(record("1", "gt", &["/a"])));

    assert_eq!(state.open_for(None), None);
    assert!(state.open);
    assert_eq!(state.title(), "Create");
    assert_eq!(state.form, OperatorForm::default());
    assert_eq!(state.phase, ModalPhase::Ready);
}

#[test]
fn edit_mode_requests_load_and_shows_edit_title() {
    let mut state = OperatorModalState::default();
    assert_eq!(state.open_for(Some("op-9")), Some("op-9".to_owned()));
    assert_eq!(state.title(), "Edit");
    assert!(state.is_loading());
}

#[test]
fn opening_resets_error_state() {
    let mut state = OperatorModalState::default();
    state.open_for(None);
    state.show_generic_error();
    state.open_for(None);
    assert!(!state.has_error());
    assert!(!state.save_disabled);
    assert_eq!(state.save_button_class(), "btn btn--primary");
    assert_eq!(state.form_group_class(), "form-group");
}

// =============================================================
// Loading
// =============================================================

#[test]
fn loaded_record_populates_fields_with_newline_joined_xpaths() {
    let mut state = opened_edit("7");
    state.apply_loaded("7", FormOutcome::Success(record("7", "gt", &["/a/b", "/c", "/d/e/f"])));
    assert_eq!(state.form.document_id, "7");
    assert_eq!(state.form.name, "gt");
    assert_eq!(state.form.xpath_list, "/a/b\n/c\n/d/e/f");
    assert_eq!(state.phase, ModalPhase::Ready);
}

#[test]
fn loaded_markup_replaces_form_body() {
    let mut state = opened_edit("7");
    state.apply_loaded("7", FormOutcome::Markup("<form>prefilled</form>".to_owned()));
    assert_eq!(state.body, FormBody::Markup("<form>prefilled</form>".to_owned()));
    assert!(!state.has_error());
}

#[test]
fn failed_load_shows_generic_error() {
    let mut state = opened_edit("7");
    state.apply_loaded("7", FormOutcome::Failed(ApiError::EmptyBody));
    assert_eq!(state.error.as_deref(), Some(GENERIC_ERROR));
    assert!(state.save_disabled);
}

#[test]
fn stale_load_for_other_row_is_ignored() {
    let mut state = opened_edit("1");
    state.open_for(Some("2"));
    state.apply_loaded("1", FormOutcome::Success(record("1", "gt", &[])));
    assert!(state.is_loading());
    assert_eq!(state.form, OperatorForm::default());
}

#[test]
fn load_after_close_is_ignored() {
    let mut state = opened_edit("1");
    state.close();
    state.apply_loaded("1", FormOutcome::Success(record("1", "gt", &[])));
    assert_eq!(state.form, OperatorForm::default());
}

// =============================================================
// Saving
// =============================================================

#[test]
fn begin_save_blocked_while_loading_saving_or_disabled() {
    let mut state = opened_edit("1");
    assert_eq!(state.begin_save(), None);

    state.apply_loaded("1", FormOutcome::Success(record("1", "gt", &[])));
    assert!(state.begin_save().is_some());
    assert_eq!(state.begin_save(), None);

    state.show_generic_error();
    assert_eq!(state.begin_save(), None);
}

#[test]
fn successful_save_requests_reload() {
    let mut state = OperatorModalState::default();
    state.open_for(None);
    let ticket = state.begin_save().unwrap();
    assert!(state.apply_saved(ticket, FormOutcome::Success(())));
    assert_eq!(state.phase, ModalPhase::Saved);
}

#[test]
fn validation_markup_replaces_form_and_allows_retry() {
    let mut state = OperatorModalState::default();
    state.open_for(None);
    let ticket = state.begin_save().unwrap();
    assert!(!state.apply_saved(ticket, FormOutcome::Markup("<form class=\"has-error\"></form>".to_owned())));
    assert!(matches!(state.body, FormBody::Markup(_)));
    assert!(state.begin_save().is_some());
}

#[test]
fn save_error_without_body_shows_banner_and_disables_save() {
    let mut state = OperatorModalState::default();
    state.open_for(None);
    let ticket = state.begin_save().unwrap();
    assert!(!state.apply_saved(ticket, FormOutcome::Failed(ApiError::EmptyBody)));
    assert_eq!(
        state.error.as_deref(),
        Some("Unexpected error while submitting the form. Please contact an administrator.")
    );
    assert!(state.save_disabled);
    assert_eq!(state.save_button_class(), "btn btn--danger");
    assert_eq!(state.form_group_class(), "form-group has-error");
}

#[test]
fn save_error_over_markup_flags_its_field_groups() {
    let mut state = opened_edit("3");
    state.apply_loaded("3", FormOutcome::Markup("<div class=\"form-group\"></div>".to_owned()));
    assert!(!state.flags_markup_groups());

    let ticket = state.begin_save().unwrap();
    state.apply_saved(ticket, FormOutcome::Failed(ApiError::EmptyBody));
    assert!(state.flags_markup_groups());

    state.open_for(Some("3"));
    assert!(!state.flags_markup_groups());
}

#[test]
fn bound_fields_error_does_not_touch_markup_groups() {
    let mut state = opened_edit("3");
    state.apply_loaded("3", FormOutcome::Failed(ApiError::EmptyBody));
    assert!(state.has_error());
    assert!(!state.flags_markup_groups());
    assert_eq!(state.form_group_class(), "form-group has-error");
}

#[test]
fn transport_failure_shows_generic_error() {
    let mut state = OperatorModalState::default();
    state.open_for(None);
    let ticket = state.begin_save().unwrap();
    state.apply_saved(ticket, FormOutcome::Failed(ApiError::Transport("offline".to_owned())));
    assert!(state.has_error());
}

#[test]
fn late_save_response_does_not_touch_reopened_dialog() {
    let mut state = OperatorModalState::default();
    state.open_for(None);
    let ticket = state.begin_save().unwrap();
    state.close();
    state.open_for(Some("2"));
    state.apply_loaded("2", FormOutcome::Success(record("2", "lt", &["/x"])));

    assert!(!state.apply_saved(ticket, FormOutcome::Failed(ApiError::EmptyBody)));
    assert!(!state.apply_saved(ticket, FormOutcome::Markup("<form></form>".to_owned())));
    assert_eq!(state.form.name, "lt");
    assert_eq!(state.body, FormBody::Fields);
    assert!(!state.has_error());
    assert!(!state.save_disabled);
}

#[test]
fn late_save_response_ignored_while_newer_save_is_running() {
    let mut state = OperatorModalState::default();
    state.open_for(None);
    let stale = state.begin_save().unwrap();
    state.close();
    state.open_for(None);
    let current = state.begin_save().unwrap();

    assert!(!state.apply_saved(stale, FormOutcome::Success(())));
    assert_eq!(state.phase, ModalPhase::Saving);
    assert!(state.apply_saved(current, FormOutcome::Success(())));
}

#[test]
fn save_response_after_close_is_ignored() {
    let mut state = OperatorModalState::default();
    state.open_for(None);
    let ticket = state.begin_save().unwrap();
    state.close();
    assert!(!state.apply_saved(ticket, FormOutcome::Success(())));
}

// =============================================================
// Serialization
// =============================================================

#[test]
fn form_pairs_follow_server_field_names() {
    let form = OperatorForm {
        document_id: "5".to_owned(),
        name: "gt".to_owned(),
        xpath_list: "/a\n/b".to_owned(),
    };
    let pairs = form.to_pairs("tok");
    let names: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, vec!["csrfmiddlewaretoken", "document_id", "name", "xpath_list"]);
    assert_eq!(pairs[3].1, "/a\n/b");
}
