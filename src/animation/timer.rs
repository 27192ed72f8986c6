use crate::foundation::core::Millis;

/// Lifecycle of a [`OneShotTimer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TimerState {
    /// Waiting for its deadline.
    Armed,
    /// Deadline reached and reported once.
    Fired,
    /// Stopped before the deadline.
    Cancelled,
}

/// Cancellable one-shot deadline token. Once fired or cancelled it never re-arms.
#[derive(Clone, Copy, Debug)]
pub struct OneShotTimer {
    fire_at: Millis,
    state: TimerState,
}

impl OneShotTimer {
    /// Arm a timer that fires `delay` after `now`.
    pub fn arm(now: Millis, delay: Millis) -> Self {
        Self {
            fire_at: now.saturating_add(delay),
            state: TimerState::Armed,
        }
    }

    /// Absolute deadline.
    pub fn deadline(&self) -> Millis {
        self.fire_at
    }

    /// Current state.
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// `true` while the deadline is still pending.
    pub fn is_armed(&self) -> bool {
        self.state == TimerState::Armed
    }

    /// Stop the timer. Returns `true` if it was still armed.
    pub fn cancel(&mut self) -> bool {
        let was_armed = self.is_armed();
        if was_armed {
            self.state = TimerState::Cancelled;
        }
        was_armed
    }

    /// Report `true` exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now: Millis) -> bool {
        if self.is_armed() && now >= self.fire_at {
            self.state = TimerState::Fired;
            return true;
        }
        false
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timer.rs"]
mod tests;
