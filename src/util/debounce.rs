//! Browser timer driving the search form's auto-submit.
//!
//! The live/stale decision belongs to `SubmitTimer` in the session context;
//! this wrapper only owns the `gloo-timers` handle. Replacing or dropping the
//! handle clears the browser timeout, so at most one timer is armed.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use leptos::prelude::*;

use crate::state::search_session::SearchSession;

#[derive(Clone, Copy)]
pub struct SubmitDebouncer {
    session: RwSignal<SearchSession>,
    #[cfg(feature = "hydrate")]
    handle: StoredValue<Option<gloo_timers::callback::Timeout>, LocalStorage>,
}

impl SubmitDebouncer {
    pub fn new(session: RwSignal<SearchSession>) -> Self {
        Self {
            session,
            #[cfg(feature = "hydrate")]
            handle: StoredValue::new_local(None),
        }
    }

    /// (Re)start the countdown; `on_fire` runs once if nothing resets or
    /// cancels it within `delay_ms`.
    pub fn schedule<F>(&self, delay_ms: u32, on_fire: F)
    where
        F: FnOnce() + 'static,
    {
        let Some(ticket) = self.session.try_update(SearchSession::schedule_submit) else {
            return;
        };
        log::debug!("auto-submit scheduled in {delay_ms}ms");

        #[cfg(feature = "hydrate")]
        {
            let session = self.session;
            let timeout = gloo_timers::callback::Timeout::new(delay_ms, move || {
                let live = session.try_update(|s| s.timer.fire(ticket)).unwrap_or(false);
                if live {
                    log::debug!("auto-submit firing");
                    on_fire();
                }
            });
            self.handle.set_value(Some(timeout));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ticket, on_fire);
        }
    }

    /// Drop a pending auto-submit. Cheap when nothing is pending.
    pub fn cancel(&self) {
        let pending = self.session.try_with_untracked(|s| s.timer.is_pending()).unwrap_or(false);
        if !pending {
            return;
        }
        self.session.update(SearchSession::cancel_submit);
        #[cfg(feature = "hydrate")]
        self.handle.set_value(None);
        log::debug!("auto-submit cancelled");
    }
}
