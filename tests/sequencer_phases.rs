use genesis_sequence::seq::{Phase, Sequencer};

#[test]
fn full_natural_traversal_in_order() {
    let mut seq = Sequencer::start(0.0);
    let mut entered = vec![Phase::Void];
    let mut now = 0.0;
    // 10 ms steps across the whole 85 s sequence.
    while !seq.phase().is_terminal() {
        now += 0.01;
        entered.extend(seq.advance(now));
    }
    assert_eq!(entered, Phase::ORDER.to_vec());
    assert!(seq.take_completed());
}

#[test]
fn progress_resets_on_every_entry() {
    let mut seq = Sequencer::start(0.0);
    for boundary in [10.0, 25.0, 40.0, 55.0, 70.0] {
        let entered = seq.advance(boundary);
        assert_eq!(entered.len(), 1, "one phase per boundary at {boundary}");
        assert_eq!(seq.progress(), 0.0);
    }
    assert_eq!(seq.phase(), Phase::Invention);
}

#[test]
fn boundaries_do_not_drift_with_uneven_ticks() {
    // Irregular tick sizes must still switch phases at the exact nominal
    // times, because phase starts are carried as exact duration sums.
    let mut seq = Sequencer::start(0.0);
    let mut now = 0.0;
    let steps = [0.013, 0.019, 0.007, 0.031];
    let mut i = 0;
    while now < 24.9 {
        now += steps[i % steps.len()];
        i += 1;
        seq.advance(now);
    }
    assert_eq!(seq.phase(), Phase::Gravity);
    // Expected gravity progress measured from t = 10 exactly.
    let expected = (now - 10.0) / 15.0;
    assert!((seq.progress() - expected).abs() < 1e-4);
}

#[test]
fn progress_is_clamped_mid_phase() {
    let mut seq = Sequencer::start(5.0);
    seq.advance(9.0);
    assert_eq!(seq.phase(), Phase::Void);
    assert!((seq.progress() - 0.4).abs() < 1e-6);
}
