//! Tag-input search bar state: committed tags, the draft being typed,
//! operator styling of the draft, and the autocomplete list.
//!
//! DESIGN
//! ======
//! Keyboard handling is split into `key_intent` (what a key means given the
//! draft) and state methods (what that meaning does), so both halves are
//! testable without a document. Suggestion requests are numbered; a response
//! is applied only if no newer request was issued after it.

#[cfg(test)]
#[path = "search_bar_test.rs"]
mod search_bar_test;

use crate::net::types::Suggestion;

use super::tag_syntax::{TagStyle, closes_operator_prefix, operator_prefix};

/// Placeholder shown while no tag is present.
pub const PLACEHOLDER: &str = "Enter keywords, or leave blank to retrieve all records";

/// Separator used for the hidden `keywords` form field.
pub const KEYWORD_SEPARATOR: char = ',';

/// What a keydown in the tag input means.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyIntent {
    /// Turn the draft into a tag.
    Commit,
    /// Turn the highlighted suggestion into a tag.
    SelectHighlighted,
    /// Remove the last committed tag.
    RemoveLast,
    HighlightNext,
    HighlightPrev,
    CloseSuggestions,
    /// Ordinary editing of the draft.
    Typing,
    /// Leave the event to the browser.
    Ignore,
}

/// Classify a keydown given the current draft and suggestion highlight.
///
/// Enter on an empty draft is left alone so the browser submits the form.
pub fn key_intent(key: &str, draft: &str, has_highlight: bool) -> KeyIntent {
    match key {
        "Enter" if has_highlight => KeyIntent::SelectHighlighted,
        "Enter" if !draft.trim().is_empty() => KeyIntent::Commit,
        "Enter" => KeyIntent::Ignore,
        "Tab" if !draft.trim().is_empty() => KeyIntent::Commit,
        "Tab" => KeyIntent::Ignore,
        "," | " " => KeyIntent::Commit,
        "Backspace" if draft.is_empty() => KeyIntent::RemoveLast,
        "ArrowDown" => KeyIntent::HighlightNext,
        "ArrowUp" => KeyIntent::HighlightPrev,
        "Escape" => KeyIntent::CloseSuggestions,
        "Backspace" | "Delete" => KeyIntent::Typing,
        _ if key.chars().count() == 1 => KeyIntent::Typing,
        _ => KeyIntent::Ignore,
    }
}

/// Follow-up work requested by a draft change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DraftCheck {
    Nothing,
    /// A colon was just typed; look this prefix up in the operator list.
    CheckOperator(String),
}

#[derive(Clone, Debug, Default)]
pub struct SearchBarState {
    pub tags: Vec<String>,
    pub draft: String,
    pub draft_style: TagStyle,
    pub suggestions: Vec<Suggestion>,
    pub highlighted: Option<usize>,
    /// True between a suggestions request and its response.
    pub loading: bool,
    suggestion_seq: u64,
}

impl SearchBarState {
    /// Start from a `keywords` field value such as `"a,b"`.
    pub fn from_keywords(keywords: &str) -> Self {
        let mut state = Self::default();
        for tag in keywords.split(KEYWORD_SEPARATOR) {
            state.add_tag(tag);
        }
        state
    }

    /// Add a trimmed, non-empty, not yet present tag. Clears the draft.
    pub fn add_tag(&mut self, raw: &str) -> bool {
        self.reset_draft();
        let tag = raw.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_owned());
        true
    }

    /// Commit the draft as a tag. Returns `true` if a tag was added.
    pub fn commit_draft(&mut self) -> bool {
        let draft = std::mem::take(&mut self.draft);
        self.add_tag(&draft)
    }

    pub fn remove_tag(&mut self, index: usize) -> Option<String> {
        (index < self.tags.len()).then(|| self.tags.remove(index))
    }

    pub fn remove_last(&mut self) -> Option<String> {
        self.tags.pop()
    }

    /// Replace the draft text and report whether an operator check is due.
    pub fn set_draft(&mut self, text: String) -> DraftCheck {
        self.draft = text;
        let Some(prefix) = operator_prefix(&self.draft) else {
            self.draft_style = TagStyle::Neutral;
            return DraftCheck::Nothing;
        };
        if closes_operator_prefix(&self.draft) {
            return DraftCheck::CheckOperator(prefix.to_owned());
        }
        DraftCheck::Nothing
    }

    /// Apply the result of an operator lookup, unless the draft moved on to
    /// a different prefix while the lookup was running.
    pub fn apply_operator_style(&mut self, prefix: &str, style: TagStyle) {
        if operator_prefix(&self.draft) == Some(prefix) {
            self.draft_style = style;
        }
    }

    /// The operator list could not be fetched. Drops any styling for
    /// `prefix`; tags can still be committed as plain text.
    pub fn operator_lookup_failed(&mut self, prefix: &str) {
        if operator_prefix(&self.draft) == Some(prefix) {
            self.draft_style = TagStyle::Neutral;
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        self.tags.is_empty().then_some(PLACEHOLDER)
    }

    /// Value of the hidden `keywords` form field.
    pub fn keywords_value(&self) -> String {
        self.tags.join(&KEYWORD_SEPARATOR.to_string())
    }

    /// The draft as an autocomplete term, once it is long enough.
    pub fn suggestion_term(&self, min_len: usize) -> Option<String> {
        let term = self.draft.trim();
        (term.chars().count() >= min_len).then(|| term.to_owned())
    }

    /// Mark a suggestions request as started and return its sequence number.
    pub fn begin_suggestions(&mut self) -> u64 {
        self.suggestion_seq += 1;
        self.loading = true;
        self.suggestion_seq
    }

    /// Apply a suggestions response. Stale responses are dropped.
    pub fn receive_suggestions(&mut self, seq: u64, items: Vec<Suggestion>) -> bool {
        if seq != self.suggestion_seq {
            return false;
        }
        self.loading = false;
        self.suggestions = items;
        self.highlighted = None;
        true
    }

    /// A suggestions request failed; show nothing.
    pub fn fail_suggestions(&mut self, seq: u64) {
        if seq == self.suggestion_seq {
            self.loading = false;
            self.suggestions.clear();
            self.highlighted = None;
        }
    }

    /// Hide the list and drop any response still in flight.
    pub fn close_suggestions(&mut self) {
        self.suggestion_seq += 1;
        self.loading = false;
        self.suggestions.clear();
        self.highlighted = None;
    }

    /// Move the highlight by `delta`, wrapping around the list.
    pub fn move_highlight(&mut self, delta: isize) {
        let len = self.suggestions.len();
        if len == 0 {
            self.highlighted = None;
            return;
        }
        let next = match self.highlighted {
            None if delta >= 0 => 0,
            None => len - 1,
            Some(current) => {
                #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
                let wrapped = (current as isize + delta).rem_euclid(len as isize) as usize;
                wrapped
            }
        };
        self.highlighted = Some(next);
    }

    /// Turn suggestion `index` into a tag.
    pub fn select_suggestion(&mut self, index: usize) -> bool {
        let Some(label) = self.suggestions.get(index).map(|s| s.value.clone()) else {
            return false;
        };
        self.close_suggestions();
        self.add_tag(&label)
    }

    pub fn select_highlighted(&mut self) -> bool {
        match self.highlighted {
            Some(index) => self.select_suggestion(index),
            None => false,
        }
    }

    fn reset_draft(&mut self) {
        self.draft.clear();
        self.draft_style = TagStyle::Neutral;
    }
}
