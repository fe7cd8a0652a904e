//! Auto-play step scheduler.
//!
//! Auto-play is modeled as an explicit state machine rather than a timed
//! loop: the host calls [`AutoPlay::next_step`] once per animation beat,
//! plays the round it is told to, and reports the result back. The stop
//! flag is checked before every iteration, so cancellation is cooperative
//! and takes effect on the following step, never mid-round.

use tracing::debug;

/// What the host should do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutoPlayStep {
    /// Play round `index` (0-based), then call `next_step` again.
    Play { index: u32 },
    /// All requested rounds are done.
    Done,
    /// Stopped early by request.
    Stopped,
}

/// A run of up to `total` automatic rounds with a cooperative stop flag.
#[derive(Debug)]
pub struct AutoPlay {
    total: u32,
    completed: u32,
    stop_requested: bool,
}

impl AutoPlay {
    pub fn new(total: u32) -> Self {
        Self {
            total,
            completed: 0,
            stop_requested: false,
        }
    }

    pub fn completed(&self) -> u32 {
        self.completed
    }

    pub fn remaining(&self) -> u32 {
        self.total - self.completed
    }

    /// Ask the run to stop. The current round finishes; the next
    /// `next_step` call returns [`AutoPlayStep::Stopped`].
    pub fn request_stop(&mut self) {
        self.stop_requested = true;
    }

    /// Advance the run. Returns what to do; a `Play` result means the
    /// caller owes one round and one [`round_finished`](Self::round_finished)
    /// call.
    pub fn next_step(&mut self) -> AutoPlayStep {
        if self.stop_requested {
            debug!(completed = self.completed, "auto-play stopped");
            return AutoPlayStep::Stopped;
        }
        if self.completed >= self.total {
            return AutoPlayStep::Done;
        }
        AutoPlayStep::Play {
            index: self.completed,
        }
    }

    /// Report the round from the last `Play` step as settled.
    pub fn round_finished(&mut self) {
        if self.completed < self.total {
            self.completed += 1;
        }
    }
}
