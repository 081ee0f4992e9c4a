use std::time::Duration;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacerState {
    /// No timestamp observed yet.
    Idle,
    Running { last: Duration },
    /// Shut down; no further ticks will be issued.
    Stopped,
}

/// What the host should do with one timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaceDecision {
    /// First timestamp; the reference point was recorded, nothing else happens.
    Primed,
    /// Not enough time has passed.
    Wait,
    /// The interval elapsed: advance once and render once.
    Tick { elapsed: Duration },
    Stopped,
}

/// Turns a per-refresh timestamp stream into ticks at a bounded rate.
///
/// A tick fires when strictly more than `threshold` has passed since the last tick. A long
/// gap produces a single tick, never a burst of catch-up ticks.
#[derive(Debug, Clone)]
pub struct FramePacer {
    threshold: Duration,
    state: PacerState,
}

impl FramePacer {
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            state: PacerState::Idle,
        }
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    pub fn state(&self) -> PacerState {
        self.state
    }

    pub fn is_stopped(&self) -> bool {
        self.state == PacerState::Stopped
    }

    pub fn observe(&mut self, now: Duration) -> PaceDecision {
        match self.state {
            PacerState::Stopped => PaceDecision::Stopped,
            PacerState::Idle => {
                self.state = PacerState::Running { last: now };
                PaceDecision::Primed
            }
            PacerState::Running { last } => {
                let elapsed = now.saturating_sub(last);
                if elapsed > self.threshold {
                    self.state = PacerState::Running { last: now };
                    PaceDecision::Tick { elapsed }
                } else {
                    PaceDecision::Wait
                }
            }
        }
    }

    pub fn stop(&mut self) {
        self.state = PacerState::Stopped;
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}
