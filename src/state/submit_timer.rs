//! Auto-submit debounce state for the keyword search form.
//!
//! DESIGN
//! ======
//! The timer itself lives in the browser (`util::debounce`); this model only
//! decides whether a firing timer is still the current one. Every `schedule`
//! bumps a generation counter and hands the caller a ticket, so a timer
//! started before a reset or a cancel finds its ticket stale and does nothing.

#[cfg(test)]
#[path = "submit_timer_test.rs"]
mod submit_timer_test;

/// Delay between the last added tag and the automatic form submission.
pub const AUTO_SUBMIT_DELAY_MS: u32 = 3000;

/// Ticket handed out by [`SubmitTimer::schedule`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerTicket(u64);

/// Whether an auto-submit is waiting to fire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimerState {
    #[default]
    Idle,
    Pending(TimerTicket),
}

#[derive(Clone, Debug, Default)]
pub struct SubmitTimer {
    state: TimerState,
    generation: u64,
}

impl SubmitTimer {
    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, TimerState::Pending(_))
    }

    /// Start or restart the countdown. Any earlier ticket becomes stale.
    pub fn schedule(&mut self) -> TimerTicket {
        self.generation += 1;
        let ticket = TimerTicket(self.generation);
        self.state = TimerState::Pending(ticket);
        ticket
    }

    /// Drop the pending submission, if any. Idempotent.
    pub fn cancel(&mut self) {
        self.state = TimerState::Idle;
    }

    /// Called when a browser timer elapses. Returns `true` if this ticket is
    /// the live one and the form should be submitted now.
    pub fn fire(&mut self, ticket: TimerTicket) -> bool {
        if self.state == TimerState::Pending(ticket) {
            self.state = TimerState::Idle;
            true
        } else {
            false
        }
    }
}
