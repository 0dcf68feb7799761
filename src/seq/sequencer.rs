use tracing::info;

use super::phase::Phase;

/// Skip affordance stays hidden until this much wall-clock has elapsed.
pub const SKIP_GRACE_SEC: f32 = 5.0;

/// Read-only snapshot exposed to the acts and the presentation shell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequenceState {
    pub phase: Phase,
    pub progress: f32,
    pub skip_requested: bool,
}

/// Phase-driven timing state machine.
///
/// `advance` is called once per render tick with the current sequence clock
/// (seconds since an arbitrary epoch). Progress is `elapsed / duration`
/// clamped to 1; reaching 1 moves to the next phase and resets progress to 0
/// within the same call, so no tick ever observes a phase both finished and
/// active. A clock jump spanning several phases traverses them in order.
#[derive(Debug)]
pub struct Sequencer {
    phase: Phase,
    progress: f32,
    start_sec: f32,
    phase_start_sec: f32,
    skip_requested: bool,
    complete_notified: bool,
}

impl Sequencer {
    /// Begin at `void`, progress 0. The returned sequencer has already
    /// entered the first phase; the caller schedules its audio.
    pub fn start(now: f32) -> Self {
        info!(phase = %Phase::Void, "sequence start");
        Self {
            phase: Phase::Void,
            progress: 0.0,
            start_sec: now,
            phase_start_sec: now,
            skip_requested: false,
            complete_notified: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn state(&self) -> SequenceState {
        SequenceState {
            phase: self.phase,
            progress: self.progress,
            skip_requested: self.skip_requested,
        }
    }

    pub fn elapsed(&self, now: f32) -> f32 {
        (now - self.start_sec).max(0.0)
    }

    /// Whether the skip affordance may be shown (5 s grace elapsed).
    pub fn skip_visible(&self, now: f32) -> bool {
        self.elapsed(now) >= SKIP_GRACE_SEC
    }

    /// Advance the clock; returns the phases entered during this call, in
    /// order. Entering `Complete` is included so the caller can tear down
    /// audio and signal the owner.
    pub fn advance(&mut self, now: f32) -> Vec<Phase> {
        let mut entered = Vec::new();
        loop {
            if self.phase.is_terminal() {
                break;
            }
            let duration = self.phase.duration_sec();
            let elapsed = (now - self.phase_start_sec).max(0.0);
            let progress = if duration > 0.0 {
                (elapsed / duration).min(1.0)
            } else {
                1.0
            };
            if progress < 1.0 {
                self.progress = progress;
                break;
            }
            // Boundary crossed: carry the exact phase end as the next start
            // so back-to-back durations do not drift.
            self.phase_start_sec += duration;
            let Some(next) = self.phase.next() else { break };
            self.enter(next, &mut entered);
        }
        entered
    }

    /// Idempotent cancel: force the terminal phase. Returns false when the
    /// sequence already completed (naturally or via an earlier skip).
    pub fn skip(&mut self, now: f32) -> bool {
        if self.phase.is_terminal() {
            return false;
        }
        self.skip_requested = true;
        self.phase_start_sec = now;
        let mut entered = Vec::new();
        self.enter(Phase::Complete, &mut entered);
        true
    }

    /// True exactly once after the terminal phase is reached.
    pub fn take_completed(&mut self) -> bool {
        if self.phase.is_terminal() && !self.complete_notified {
            self.complete_notified = true;
            return true;
        }
        false
    }

    fn enter(&mut self, phase: Phase, entered: &mut Vec<Phase>) {
        self.phase = phase;
        self.progress = 0.0;
        info!(phase = %phase, "phase entered");
        entered.push(phase);
    }
}
