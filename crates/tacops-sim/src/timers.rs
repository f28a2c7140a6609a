//! Pending timed actions.
//!
//! Reload, revive, and the between-wave pause are bounded delayed actions.
//! Instead of independent callbacks they are plain records counted down by
//! the engine once per tick, so cancellation on a phase change is just
//! clearing the list.

/// What happens when a timer runs out (or, for revives, as it runs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimedAction {
    /// Refill the magazine and clear the reloading flag.
    Reload,
    /// End the between-wave pause: award the clear bonus, then spawn the
    /// next wave or end the session in victory.
    WaveBreak,
    /// Revive in progress on a downed ally. Progress accrues in steps;
    /// the timer is the hard cap.
    Revive { ally_id: u32 },
}

/// A timed action counting down to zero.
#[derive(Debug, Clone, Copy)]
pub struct PendingTimer {
    pub action: TimedAction,
    pub remaining_ticks: u32,
    /// Ticks elapsed since the action started.
    pub elapsed_ticks: u32,
}

impl PendingTimer {
    pub fn new(action: TimedAction, duration_ticks: u32) -> Self {
        Self {
            action,
            remaining_ticks: duration_ticks,
            elapsed_ticks: 0,
        }
    }

    /// Count down one tick. Returns true when the timer has expired.
    pub fn advance(&mut self) -> bool {
        self.elapsed_ticks += 1;
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        self.remaining_ticks == 0
    }
}
