//! Page-session context for the keyword search page.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SearchSession` is provided per page through Leptos context. It owns
//! the shared auto-submit timer and the lazily fetched operator list, the
//! only state the search bar handlers share across events.

#[cfg(test)]
#[path = "search_session_test.rs"]
mod search_session_test;

use std::collections::HashMap;

use crate::net::types::OperatorListItem;

use super::submit_timer::{SubmitTimer, TimerTicket};
use super::tag_syntax::TagStyle;

/// Operator names fetched once per page and memoized until invalidated.
#[derive(Clone, Debug, Default)]
pub struct OperatorCache {
    entries: Option<HashMap<String, OperatorListItem>>,
}

impl OperatorCache {
    pub fn is_loaded(&self) -> bool {
        self.entries.is_some()
    }

    /// Replace the cache contents with a freshly fetched list.
    pub fn fill(&mut self, items: Vec<OperatorListItem>) {
        let entries = items.into_iter().map(|item| (item.name.clone(), item)).collect();
        self.entries = Some(entries);
    }

    /// Forget the cached list so the next lookup refetches it.
    pub fn invalidate(&mut self) {
        self.entries = None;
    }

    /// Exact, case-sensitive membership. `None` while nothing is cached.
    pub fn contains(&self, name: &str) -> Option<bool> {
        self.entries.as_ref().map(|entries| entries.contains_key(name))
    }

    /// Draft style for an operator prefix. Neutral while nothing is cached.
    pub fn style_for(&self, name: &str) -> TagStyle {
        match self.contains(name) {
            Some(true) => TagStyle::Recognized,
            Some(false) => TagStyle::Unrecognized,
            None => TagStyle::Neutral,
        }
    }
}

/// Session-scoped state shared by the search bar handlers.
#[derive(Clone, Debug, Default)]
pub struct SearchSession {
    pub timer: SubmitTimer,
    pub operators: OperatorCache,
}

impl SearchSession {
    /// Restart the auto-submit countdown.
    pub fn schedule_submit(&mut self) -> TimerTicket {
        self.timer.schedule()
    }

    /// Drop a pending auto-submit.
    pub fn cancel_submit(&mut self) {
        self.timer.cancel();
    }
}
