//! Per-phase tone tables.
//!
//! Every phase maps to a fixed list of tone events timed relative to phase
//! entry. Repeating patterns (forge bursts, docking clicks) are expanded
//! into concrete events here so the scheduler only ever sees a flat list.

use rand::Rng;

use super::tone::{ToneSpec, Waveform};
use crate::seq::Phase;

// Chord tones, equal temperament.
const C3: f32 = 130.81;
const E3: f32 = 164.81;
const G3: f32 = 196.00;
const C4: f32 = 261.63;
const G4: f32 = 392.00;

/// Build the tone list for a phase. The rng only feeds the synthesis forge
/// bursts; every other table is fully fixed.
pub fn phase_score<R: Rng + ?Sized>(phase: Phase, rng: &mut R) -> Vec<ToneSpec> {
    use Waveform::*;
    match phase {
        Phase::Void => vec![
            // Distant low tones.
            ToneSpec::new(0.0, 80.0, 10.0, Sine),
            ToneSpec::new(0.0, 120.0, 10.0, Sine),
        ],
        Phase::Gravity => vec![
            // Building low hum; a harmonic joins at 5 s.
            ToneSpec::new(0.0, 40.0, 15.0, Sine),
            ToneSpec::new(0.0, 60.0, 15.0, Sine),
            ToneSpec::new(0.0, 80.0, 15.0, Triangle),
            ToneSpec::new(5.0, 120.0, 10.0, Sine),
        ],
        Phase::Synthesis => {
            // Crystalline chimes over random forge bursts every half second.
            let mut score = vec![
                ToneSpec::new(0.0, 440.0, 15.0, Sine),
                ToneSpec::new(0.0, 554.0, 15.0, Sine),
                ToneSpec::new(0.0, 659.0, 15.0, Sine),
            ];
            let mut t = 0.5;
            while t < 14.0 {
                score.push(ToneSpec::new(
                    t,
                    200.0 + rng.random_range(0.0..400.0),
                    0.3,
                    Sawtooth,
                ));
                t += 0.5;
            }
            score
        }
        Phase::Assembly => {
            // Low bed with percussive click pairs every 0.8 s.
            let mut score = vec![ToneSpec::new(0.0, 100.0, 15.0, Sine)];
            let mut t = 0.8;
            while t < 14.0 {
                score.push(ToneSpec::new(t, 800.0, 0.05, Square));
                score.push(ToneSpec::new(t + 0.05, 600.0, 0.05, Square));
                t += 0.8;
            }
            score
        }
        Phase::Crystallization => vec![
            // Chord builds additively, one voice every three seconds.
            ToneSpec::new(0.0, C3, 15.0, Sine),
            ToneSpec::new(3.0, E3, 12.0, Sine),
            ToneSpec::new(6.0, G3, 9.0, Sine),
            ToneSpec::new(9.0, C4, 6.0, Sine),
        ],
        Phase::Invention => vec![
            // Three seconds of silence, then the full fifth chord.
            ToneSpec::new(3.0, C3, 10.0, Sine),
            ToneSpec::new(3.0, G3, 10.0, Sine),
            ToneSpec::new(3.0, C4, 10.0, Sine),
            ToneSpec::new(3.0, G4, 10.0, Sine),
        ],
        Phase::Complete => Vec::new(),
    }
}
