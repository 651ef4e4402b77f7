#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::submit_timer::{AUTO_SUBMIT_DELAY_MS, TimerState};

#[test]
fn schedule_marks_session_pending_and_cancel_clears_it() {
    let session = RwSignal::new(SearchSession::default());
    let debouncer = SubmitDebouncer::new(session);

    debouncer.schedule(AUTO_SUBMIT_DELAY_MS, || {});
    assert!(session.with_untracked(|s| s.timer.is_pending()));

    debouncer.cancel();
    assert_eq!(session.with_untracked(|s| s.timer.state()), TimerState::Idle);
}

#[test]
fn rescheduling_keeps_a_single_pending_ticket() {
    let session = RwSignal::new(SearchSession::default());
    let debouncer = SubmitDebouncer::new(session);

    debouncer.schedule(AUTO_SUBMIT_DELAY_MS, || {});
    let first = session.with_untracked(|s| s.timer.state());
    debouncer.schedule(AUTO_SUBMIT_DELAY_MS, || {});
    let second = session.with_untracked(|s| s.timer.state());

    assert_ne!(first, second);
    assert!(matches!(second, TimerState::Pending(_)));
}

#[test]
fn cancel_when_idle_is_noop() {
    let session = RwSignal::new(SearchSession::default());
    SubmitDebouncer::new(session).cancel();
    assert_eq!(session.with_untracked(|s| s.timer.state()), TimerState::Idle);
}
