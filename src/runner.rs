//! The explicit frame scheduler.
//!
//! `SequenceRunner` couples the sequencer, the act set, and the audio
//! scheduler behind a single `step(now, dt)` call with a deterministic
//! start/skip/teardown lifecycle. The realtime worker loop (see `app`)
//! drives it off the wall clock; `run_headless` drives the same runner off
//! a synthetic clock for offline WAV renders.

use crossbeam_channel::Sender;
use tracing::info;

use crate::acts::{ActSet, Scene};
use crate::audio::AudioScheduler;
use crate::seq::{Phase, Sequencer};

#[derive(Clone, Copy, Debug)]
pub struct RunnerConfig {
    pub fs: f32,
    pub hop: usize,
    pub master_gain: f32,
    pub seed: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            fs: 48_000.0,
            hop: 512,
            master_gain: crate::audio::MASTER_GAIN,
            seed: 7,
        }
    }
}

/// Result of one runner step.
#[derive(Debug, Default)]
pub struct StepReport {
    /// Phases entered during this step, in order.
    pub entered: Vec<Phase>,
    /// True exactly once, when the terminal phase is first reached.
    pub completed: bool,
}

pub struct SequenceRunner {
    sequencer: Sequencer,
    acts: ActSet,
    audio: AudioScheduler,
    composed: Scene,
    tick: u64,
    hop: usize,
    fs: f32,
}

impl SequenceRunner {
    /// Start the sequence at `void` and schedule its audio at tick 0.
    pub fn start(cfg: RunnerConfig, now: f32) -> Self {
        let sequencer = Sequencer::start(now);
        let mut audio = AudioScheduler::new(cfg.fs, cfg.hop, cfg.master_gain, cfg.seed);
        audio.enter_phase(Phase::Void, 0);
        Self {
            sequencer,
            acts: ActSet::new(cfg.seed),
            audio,
            composed: Scene::default(),
            tick: 0,
            hop: cfg.hop,
            fs: cfg.fs,
        }
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    pub fn audio(&self) -> &AudioScheduler {
        &self.audio
    }

    pub fn scene(&self) -> &Scene {
        &self.composed
    }

    pub fn tick_sec(&self) -> f32 {
        self.tick as f32 / self.fs
    }

    /// Advance one tick: progress the sequencer, re-schedule audio on phase
    /// entry, tick the acts, and compose the visible scene. Returns what
    /// changed; call [`render_audio`](Self::render_audio) afterwards for the
    /// matching hop of samples.
    pub fn step(&mut self, now: f32, dt: f32) -> StepReport {
        let mut report = StepReport::default();
        for phase in self.sequencer.advance(now) {
            self.audio.enter_phase(phase, self.tick);
            report.entered.push(phase);
        }
        report.completed = self.sequencer.take_completed();

        let state = self.sequencer.state();
        self.acts.tick(state.phase, state.progress, now, dt);
        self.acts.compose(&mut self.composed);
        report
    }

    /// Mix the next audio hop and advance the sample clock.
    pub fn render_audio(&mut self) -> &[f32] {
        let now = self.tick;
        self.tick += self.hop as u64;
        self.audio.render(now)
    }

    /// Cancel: tear down all audio and force the terminal phase in one
    /// atomic step. Idempotent.
    pub fn skip(&mut self, now: f32) -> bool {
        if !self.sequencer.skip(now) {
            return false;
        }
        self.audio.stop_all();
        info!("sequence skipped");
        true
    }
}

/// Drive a full sequence on a synthetic clock, emitting audio hops to the
/// optional WAV channel. Returns the number of hops rendered.
pub fn run_headless(cfg: RunnerConfig, wav_tx: Option<Sender<Vec<f32>>>) -> u64 {
    let mut runner = SequenceRunner::start(cfg, 0.0);
    let dt = cfg.hop as f32 / cfg.fs;
    let mut hops = 0u64;
    let mut now = 0.0f32;
    loop {
        let report = runner.step(now, dt);
        let samples = runner.render_audio();
        if let Some(tx) = &wav_tx {
            let _ = tx.send(samples.to_vec());
        }
        hops += 1;
        if report.completed {
            info!(hops, "headless render complete");
            break;
        }
        now += dt;
    }
    hops
}
