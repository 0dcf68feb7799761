//! Owns every live oscillator and mixes them into hop-sized buffers.
//!
//! Teardown ordering is the scheduler's one hard guarantee: entering a phase
//! stops 100% of the previous phase's oscillators (hard cutoff, no fade)
//! before any new event is scheduled, so no two phases' tones ever overlap.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use super::score::phase_score;
use super::tone::{Oscillator, ToneSpec};
use crate::seq::Phase;

/// Fixed low master gain; many tones may overlap without clipping.
pub const MASTER_GAIN: f32 = 0.1;

pub struct AudioScheduler {
    fs: f32,
    hop: usize,
    master_gain: f32,
    oscillators: Vec<Oscillator>,
    buf: Vec<f32>,
    rng: StdRng,
}

impl AudioScheduler {
    pub fn new(fs: f32, hop: usize, master_gain: f32, seed: u64) -> Self {
        Self {
            fs,
            hop,
            master_gain,
            oscillators: Vec::new(),
            buf: vec![0.0; hop],
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Tear down the outgoing phase's audio, then schedule the new table.
    pub fn enter_phase(&mut self, phase: Phase, now_tick: u64) {
        self.stop_all();
        let score = phase_score(phase, &mut self.rng);
        info!(phase = %phase, tones = score.len(), "audio phase entry");
        self.schedule(score, now_tick);
    }

    /// Add tones relative to `now_tick` without touching what is playing.
    pub fn schedule(&mut self, specs: Vec<ToneSpec>, now_tick: u64) {
        for spec in specs {
            self.oscillators
                .push(Oscillator::from_spec(spec, now_tick, self.fs));
        }
    }

    /// Stop and release every oscillator. Safe to call redundantly.
    pub fn stop_all(&mut self) {
        if !self.oscillators.is_empty() {
            debug!(count = self.oscillators.len(), "stopping oscillators");
        }
        self.oscillators.clear();
    }

    pub fn active_oscillators(&self) -> usize {
        self.oscillators.len()
    }

    /// Oscillators currently producing sound at the given tick.
    pub fn sounding_oscillators(&self, now_tick: u64) -> usize {
        self.oscillators
            .iter()
            .filter(|o| o.start_tick() <= now_tick && !o.is_done(now_tick))
            .count()
    }

    /// Mix one hop starting at `now_tick` into the owned buffer.
    pub fn render(&mut self, now_tick: u64) -> &[f32] {
        if self.buf.len() != self.hop {
            self.buf.resize(self.hop, 0.0);
        }
        self.buf.fill(0.0);
        for (i, out) in self.buf.iter_mut().enumerate() {
            let tick = now_tick + i as u64;
            let mut acc = 0.0;
            for osc in self.oscillators.iter_mut() {
                acc += osc.render_tick(tick, self.fs);
            }
            *out = acc * self.master_gain;
        }
        let end = now_tick + self.hop as u64;
        self.oscillators.retain(|o| !o.is_done(end));
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduler() -> AudioScheduler {
        AudioScheduler::new(1_000.0, 64, MASTER_GAIN, 7)
    }

    #[test]
    fn entering_a_phase_replaces_all_oscillators() {
        let mut s = scheduler();
        s.enter_phase(Phase::Gravity, 0);
        assert_eq!(s.active_oscillators(), 4);
        s.enter_phase(Phase::Crystallization, 1_000);
        assert_eq!(s.active_oscillators(), 4);
        // None of the gravity oscillators survived: everything sounding now
        // starts at or after the new entry tick.
        assert_eq!(s.sounding_oscillators(999), 0);
    }

    #[test]
    fn stop_all_is_idempotent() {
        let mut s = scheduler();
        s.enter_phase(Phase::Void, 0);
        s.stop_all();
        s.stop_all();
        assert_eq!(s.active_oscillators(), 0);
    }

    #[test]
    fn render_after_stop_is_silent() {
        let mut s = scheduler();
        s.enter_phase(Phase::Void, 0);
        s.stop_all();
        let out = s.render(200);
        assert!(out.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn render_produces_sound_within_a_phase() {
        let mut s = scheduler();
        s.enter_phase(Phase::Void, 0);
        // Past the attack ramp the mix is audibly nonzero.
        let out = s.render(500);
        assert!(out.iter().any(|&x| x.abs() > 1e-5));
    }

    #[test]
    fn finished_oscillators_are_released() {
        let mut s = scheduler();
        s.enter_phase(Phase::Void, 0);
        // Void tones last 10 s at fs 1000 -> done after tick 10_000.
        let mut tick = 0;
        while tick < 11_000 {
            s.render(tick);
            tick += 64;
        }
        assert_eq!(s.active_oscillators(), 0);
    }

    #[test]
    fn mix_stays_within_master_bounds() {
        let mut s = scheduler();
        s.enter_phase(Phase::Invention, 0);
        let mut peak = 0.0f32;
        let mut tick = 3_000; // chord onset at 3 s
        while tick < 5_000 {
            let out = s.render(tick);
            peak = out.iter().fold(peak, |m, &x| m.max(x.abs()));
            tick += 64;
        }
        // Four stacked tones at TONE_PEAK each, scaled by the master gain.
        assert!(peak <= 4.0 * super::super::tone::TONE_PEAK * MASTER_GAIN + 1e-6);
        assert!(peak > 0.0);
    }
}
