//! Coalesces bursts of vertex additions into a single evaluation pass.
//!
//! The debouncer never touches a clock itself. Arming it hands the host a
//! [`TimerCommand::Start`] to schedule; the host reports back either through
//! [`Debouncer::fire`] with the token it was given (callback timers) or by
//! calling [`Debouncer::poll`] with the current time (frame loops).

use serde::Serialize;

/// Identifies one armed timer. Tokens are never reused, so a timer that
/// outlives a reset cannot trigger a pass for the new session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TimerToken(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TimerCommand {
    Start { token: TimerToken, delay_ms: u32 },
    Cancel { token: TimerToken },
}

#[derive(Clone, Copy, Debug)]
struct Armed {
    token: TimerToken,
    deadline_ms: f64,
}

#[derive(Debug)]
pub struct Debouncer {
    delay_ms: u32,
    next_token: u64,
    armed: Option<Armed>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Debouncer {
            delay_ms,
            next_token: 1,
            armed: None,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    pub fn deadline_ms(&self) -> Option<f64> {
        self.armed.map(|a| a.deadline_ms)
    }

    /// Arm the timer unless it already is. At most one timer is outstanding
    /// per quiet period.
    pub fn arm(&mut self, now_ms: f64) -> Option<TimerCommand> {
        if self.armed.is_some() {
            return None;
        }
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.armed = Some(Armed {
            token,
            deadline_ms: now_ms + self.delay_ms as f64,
        });
        Some(TimerCommand::Start {
            token,
            delay_ms: self.delay_ms,
        })
    }

    pub fn cancel(&mut self) -> Option<TimerCommand> {
        self.armed
            .take()
            .map(|a| TimerCommand::Cancel { token: a.token })
    }

    /// A scheduled timer elapsed. Returns true (and disarms) only for the
    /// currently armed token.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        match self.armed {
            Some(a) if a.token == token => {
                self.armed = None;
                true
            }
            _ => false,
        }
    }

    /// Returns true (and disarms) once `now_ms` reaches the deadline.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.armed {
            Some(a) if now_ms >= a.deadline_ms => {
                self.armed = None;
                true
            }
            _ => false,
        }
    }
}
