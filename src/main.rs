// Entry point: launches the egui/eframe app, or renders headless with --nogui.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use clap::Parser;
use crossbeam_channel::bounded;
use tracing::info;
use tracing_subscriber::EnvFilter;

use genesis_sequence::app::App;
use genesis_sequence::audio::writer::WavOutput;
use genesis_sequence::cli::Args;
use genesis_sequence::config::AppConfig;
use genesis_sequence::runner::{RunnerConfig, run_headless};

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let config = AppConfig::load_or_default(&args.config);

    let stop_flag = Arc::new(AtomicBool::new(false));
    let stop_flag_for_ctrlc = stop_flag.clone();
    if let Err(err) = ctrlc::set_handler(move || {
        stop_flag_for_ctrlc.store(true, Ordering::SeqCst);
    }) {
        eprintln!("Error setting Ctrl-C handler: {err}");
    }

    if args.nogui {
        let cfg = RunnerConfig {
            fs: config.audio.sample_rate as f32,
            hop: 512,
            master_gain: config.audio.master_gain,
            seed: args.seed.unwrap_or(config.sequence.seed),
        };
        let (wav_tx, wav_rx) = bounded::<Vec<f32>>(16);
        let wav_handle = args
            .wav
            .clone()
            .map(|path| WavOutput::run(wav_rx, path, config.audio.sample_rate));
        let wav_tx = args.wav.is_some().then_some(wav_tx);

        let hops = run_headless(cfg, wav_tx);
        info!(hops, "headless run done");
        if let Some(handle) = wav_handle {
            let _ = handle.join();
        }
        return Ok(());
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Genesis Sequence",
        native_options,
        Box::new(|cc| Ok(Box::new(App::new(cc, args, config, stop_flag.clone())))),
    )
}
