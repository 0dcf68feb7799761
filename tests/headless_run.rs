use crossbeam_channel::bounded;
use genesis_sequence::runner::{RunnerConfig, SequenceRunner, run_headless};
use genesis_sequence::seq::Phase;

fn coarse_cfg() -> RunnerConfig {
    // 0.1 s hops keep the full 85 s walk cheap.
    RunnerConfig {
        fs: 100.0,
        hop: 10,
        ..RunnerConfig::default()
    }
}

#[test]
fn synthetic_clock_traverses_all_phases_in_order() {
    let cfg = coarse_cfg();
    let mut runner = SequenceRunner::start(cfg, 0.0);
    let dt = cfg.hop as f32 / cfg.fs;
    let mut entered = vec![Phase::Void];
    let mut now = 0.0;
    loop {
        let report = runner.step(now, dt);
        entered.extend(report.entered.iter().copied());
        runner.render_audio();
        if report.completed {
            break;
        }
        now += dt;
    }
    assert_eq!(entered, Phase::ORDER.to_vec());
}

#[test]
fn headless_render_feeds_the_wav_channel() {
    let (tx, rx) = bounded::<Vec<f32>>(2048);
    let hops = run_headless(coarse_cfg(), Some(tx));
    let mut received = 0u64;
    let mut nonzero = false;
    while let Ok(samples) = rx.try_recv() {
        received += 1;
        assert_eq!(samples.len(), 10);
        nonzero |= samples.iter().any(|&x| x != 0.0);
    }
    assert_eq!(received, hops);
    assert!(nonzero, "the render should contain audible samples");
}

#[test]
fn audio_clock_matches_the_hop_count() {
    let cfg = coarse_cfg();
    let mut runner = SequenceRunner::start(cfg, 0.0);
    for _ in 0..50 {
        runner.render_audio();
    }
    assert!((runner.tick_sec() - 5.0).abs() < 1e-5);
}
