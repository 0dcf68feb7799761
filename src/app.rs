//! eframe shell: spawns the worker thread that runs the sequence in real
//! time and repaints from the frames it publishes.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender, TryRecvError, bounded};
use ringbuf::HeapProd;
use tracing::{info, trace, warn};

use crate::audio::output::AudioOutput;
use crate::audio::writer::WavOutput;
use crate::cli::Args;
use crate::config::AppConfig;
use crate::runner::{RunnerConfig, SequenceRunner};
use crate::ui::viewdata::UiFrame;

/// UI to worker control messages.
#[derive(Clone, Copy, Debug)]
pub enum Control {
    Skip,
}

pub struct App {
    ui_frame_rx: Receiver<UiFrame>,
    ctrl_tx: Sender<Control>,
    last_frame: UiFrame,
    _audio: Option<AudioOutput>,
    wav_tx: Option<Sender<Vec<f32>>>,
    worker_handle: Option<thread::JoinHandle<()>>,
    wav_handle: Option<thread::JoinHandle<()>>,
    exiting: Arc<AtomicBool>,
}

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        args: Args,
        config: AppConfig,
        stop_flag: Arc<AtomicBool>,
    ) -> Self {
        let (ui_frame_tx, ui_frame_rx) = bounded::<UiFrame>(8);
        let (ctrl_tx, ctrl_rx) = bounded::<Control>(4);

        let (audio_out, audio_prod) = if args.play {
            match AudioOutput::open(config.audio.latency_ms) {
                Ok((out, prod)) => (Some(out), Some(prod)),
                Err(err) => {
                    warn!("audio output unavailable, continuing silent: {err}");
                    (None, None)
                }
            }
        } else {
            (None, None)
        };
        // The device dictates the sample rate once a stream is open.
        let sample_rate = audio_out
            .as_ref()
            .map(|out| out.sample_rate)
            .unwrap_or(config.audio.sample_rate);

        let (wav_tx, wav_rx) = bounded::<Vec<f32>>(16);
        let wav_handle = args
            .wav
            .clone()
            .map(|path| WavOutput::run(wav_rx, path, sample_rate));
        let wav_tx_for_worker = args.wav.is_some().then(|| wav_tx.clone());

        let runner_cfg = RunnerConfig {
            fs: sample_rate as f32,
            hop: 512,
            master_gain: config.audio.master_gain,
            seed: args.seed.unwrap_or(config.sequence.seed),
        };

        let stop_flag_worker = stop_flag.clone();
        let worker_handle = thread::Builder::new()
            .name("sequence-worker".into())
            .spawn(move || {
                worker_loop(
                    runner_cfg,
                    ui_frame_tx,
                    ctrl_rx,
                    audio_prod,
                    wav_tx_for_worker,
                    stop_flag_worker,
                )
            })
            .ok();

        cc.egui_ctx.set_pixels_per_point(1.25);

        Self {
            ui_frame_rx,
            ctrl_tx,
            last_frame: UiFrame::empty(),
            _audio: audio_out,
            wav_tx: Some(wav_tx),
            worker_handle,
            wav_handle,
            exiting: stop_flag,
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.exiting.load(Ordering::SeqCst) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        drain_frames(&self.ui_frame_rx, &mut self.last_frame);

        if self.last_frame.completed {
            info!("sequence complete, closing viewport");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        if crate::ui::windows::main_window(ctx, &self.last_frame) {
            let _ = self.ctrl_tx.try_send(Control::Skip);
        }
        ctx.request_repaint_after(Duration::from_millis(16));
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.exiting.store(true, Ordering::SeqCst);
        self.wav_tx.take();
        if let Some(handle) = self.worker_handle.take() {
            let _ = handle.join();
        }
        if let Some(handle) = self.wav_handle.take() {
            let _ = handle.join();
        }
    }
}

fn worker_loop(
    cfg: RunnerConfig,
    ui_tx: Sender<UiFrame>,
    ctrl_rx: Receiver<Control>,
    mut audio_prod: Option<HeapProd<f32>>,
    wav_tx: Option<Sender<Vec<f32>>>,
    exiting: Arc<AtomicBool>,
) {
    let hop_duration = Duration::from_secs_f32(cfg.hop as f32 / cfg.fs);
    let dt = hop_duration.as_secs_f32();
    let started = Instant::now();
    let mut runner = SequenceRunner::start(cfg, 0.0);
    let mut next_deadline = Instant::now();

    loop {
        if exiting.load(Ordering::SeqCst) {
            info!("stopping worker thread");
            break;
        }
        next_deadline += hop_duration;

        let now = started.elapsed().as_secs_f32();
        while let Ok(Control::Skip) = ctrl_rx.try_recv() {
            runner.skip(now);
        }

        let report = runner.step(now, dt);
        let samples = runner.render_audio();
        if let Some(prod) = audio_prod.as_mut() {
            AudioOutput::push_samples(prod, samples);
        }
        if let Some(tx) = &wav_tx {
            let _ = tx.try_send(samples.to_vec());
        }

        let state = runner.sequencer().state();
        let frame = UiFrame {
            phase: state.phase,
            progress: state.progress,
            time_sec: now,
            scene: runner.scene().clone(),
            show_skip: runner.sequencer().skip_visible(now),
            tagline_alpha: tagline_alpha(state.phase, state.progress),
            completed: report.completed || state.phase.is_terminal(),
        };
        publish_frame(&ui_tx, frame);

        if report.completed {
            info!("sequence finished");
            break;
        }

        let now_i = Instant::now();
        if now_i < next_deadline {
            thread::sleep(next_deadline - now_i);
        } else {
            next_deadline = now_i;
            trace!("worker overrun");
        }
    }
}

/// Drain to the newest frame; stale ones are not worth painting. A
/// disconnected worker has finished, so it counts as completion even when
/// the final frame itself was lost.
fn drain_frames(rx: &Receiver<UiFrame>, last: &mut UiFrame) {
    loop {
        match rx.try_recv() {
            Ok(f) => *last = f,
            Err(TryRecvError::Empty) => break,
            Err(TryRecvError::Disconnected) => {
                last.completed = true;
                break;
            }
        }
    }
}

/// Publish a frame to the UI thread. Intermediate frames are droppable when
/// the channel is full, but the completion frame is the only carrier of the
/// terminal signal and must arrive, so it blocks; the worker is about to
/// exit and has nothing better to do.
fn publish_frame(ui_tx: &Sender<UiFrame>, frame: UiFrame) {
    if frame.completed {
        let _ = ui_tx.send(frame);
    } else {
        let _ = ui_tx.try_send(frame);
    }
}

/// Closing tagline opacity: fades in over the last 30% of the reveal.
fn tagline_alpha(phase: crate::seq::Phase, progress: f32) -> f32 {
    if phase == crate::seq::Phase::Invention {
        ((progress - 0.7) / 0.3).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::Phase;

    #[test]
    fn completion_frame_survives_a_full_channel() {
        let (tx, rx) = bounded::<UiFrame>(1);
        tx.send(UiFrame::empty()).unwrap();

        let mut done = UiFrame::empty();
        done.completed = true;
        let sender = thread::spawn(move || publish_frame(&tx, done));

        // Drain the stale frame, then the blocked completion frame lands.
        let first = rx.recv().unwrap();
        assert!(!first.completed);
        let second = rx.recv().unwrap();
        assert!(second.completed);
        sender.join().unwrap();
    }

    #[test]
    fn intermediate_frames_drop_without_blocking() {
        let (tx, rx) = bounded::<UiFrame>(1);
        tx.send(UiFrame::empty()).unwrap();
        // Returns immediately even though the channel is full.
        publish_frame(&tx, UiFrame::empty());
        assert_eq!(rx.len(), 1);
    }

    #[test]
    fn disconnected_worker_counts_as_completion() {
        let (tx, rx) = bounded::<UiFrame>(1);
        drop(tx);
        let mut last = UiFrame::empty();
        drain_frames(&rx, &mut last);
        assert!(last.completed);
    }

    #[test]
    fn tagline_fades_in_late_in_the_reveal() {
        assert_eq!(tagline_alpha(Phase::Invention, 0.7), 0.0);
        assert!((tagline_alpha(Phase::Invention, 0.85) - 0.5).abs() < 1e-5);
        assert_eq!(tagline_alpha(Phase::Invention, 1.0), 1.0);
        assert_eq!(tagline_alpha(Phase::Crystallization, 0.9), 0.0);
    }
}
