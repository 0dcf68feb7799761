//! Tone events and the oscillators that realize them.

/// Linear attack length; decay runs from the attack peak to the end time.
pub const ATTACK_SEC: f32 = 0.1;

/// Per-tone peak gain. The scheduler applies the master gain on top.
pub const TONE_PEAK: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
    Square,
    Sawtooth,
}

impl Waveform {
    /// Sample at a normalized phase in [0, 1).
    #[inline]
    pub fn sample(self, phase: f32) -> f32 {
        match self {
            Waveform::Sine => (phase * std::f32::consts::TAU).sin(),
            Waveform::Triangle => {
                let t = phase + 0.25;
                4.0 * (t - (t + 0.5).floor()).abs() - 1.0
            }
            Waveform::Square => {
                if phase < 0.5 { 1.0 } else { -1.0 }
            }
            Waveform::Sawtooth => 2.0 * phase - 1.0,
        }
    }
}

/// One scheduled tone, timed relative to phase entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneSpec {
    pub delay_sec: f32,
    pub freq_hz: f32,
    pub duration_sec: f32,
    pub waveform: Waveform,
}

impl ToneSpec {
    pub fn new(delay_sec: f32, freq_hz: f32, duration_sec: f32, waveform: Waveform) -> Self {
        Self {
            delay_sec,
            freq_hz,
            duration_sec,
            waveform,
        }
    }
}

/// A live oscillator with a sample-accurate envelope. Gain ramps linearly
/// 0 to [`TONE_PEAK`] over the attack, then linearly back to 0 at the end
/// time, so no tone starts or ends abruptly.
#[derive(Debug)]
pub struct Oscillator {
    freq_hz: f32,
    waveform: Waveform,
    start_tick: u64,
    end_tick: u64,
    phase: f32,
}

impl Oscillator {
    pub fn from_spec(spec: ToneSpec, entry_tick: u64, fs: f32) -> Self {
        let start = entry_tick + (spec.delay_sec.max(0.0) * fs).round() as u64;
        let len = ((spec.duration_sec.max(0.0) * fs).round() as u64).max(1);
        Self {
            freq_hz: spec.freq_hz,
            waveform: spec.waveform,
            start_tick: start,
            end_tick: start + len,
            phase: 0.0,
        }
    }

    pub fn is_done(&self, now_tick: u64) -> bool {
        now_tick >= self.end_tick
    }

    pub fn start_tick(&self) -> u64 {
        self.start_tick
    }

    fn gain_at(&self, now_tick: u64, fs: f32) -> f32 {
        let t = (now_tick - self.start_tick) as f32 / fs;
        let dur = (self.end_tick - self.start_tick) as f32 / fs;
        // Short tones get a symmetric envelope so they still end at zero.
        let attack = ATTACK_SEC.min(dur * 0.5);
        if t < attack {
            TONE_PEAK * t / attack
        } else {
            TONE_PEAK * ((dur - t) / (dur - attack)).clamp(0.0, 1.0)
        }
    }

    /// Render one sample; silent (and phase-frozen) outside the window.
    pub fn render_tick(&mut self, now_tick: u64, fs: f32) -> f32 {
        if now_tick < self.start_tick || now_tick >= self.end_tick {
            return 0.0;
        }
        let sample = self.waveform.sample(self.phase);
        self.phase = (self.phase + self.freq_hz / fs).fract();
        sample * self.gain_at(now_tick, fs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waveform_ranges() {
        for wf in [
            Waveform::Sine,
            Waveform::Triangle,
            Waveform::Square,
            Waveform::Sawtooth,
        ] {
            for i in 0..100 {
                let s = wf.sample(i as f32 / 100.0);
                assert!((-1.0..=1.0).contains(&s), "{wf:?} out of range: {s}");
            }
        }
    }

    #[test]
    fn triangle_peaks_at_quarter_phase() {
        assert!((Waveform::Triangle.sample(0.25) - 1.0).abs() < 1e-5);
        assert!((Waveform::Triangle.sample(0.75) + 1.0).abs() < 1e-5);
        assert!(Waveform::Triangle.sample(0.0).abs() < 1e-5);
    }

    #[test]
    fn silent_before_start_and_after_end() {
        let fs = 1_000.0;
        let spec = ToneSpec::new(0.5, 100.0, 1.0, Waveform::Sine);
        let mut osc = Oscillator::from_spec(spec, 0, fs);
        assert_eq!(osc.render_tick(0, fs), 0.0);
        assert_eq!(osc.render_tick(499, fs), 0.0);
        assert_eq!(osc.render_tick(1_500, fs), 0.0);
        assert!(osc.is_done(1_500));
        assert!(!osc.is_done(1_499));
    }

    #[test]
    fn envelope_ramps_and_ends_at_zero() {
        let fs = 1_000.0;
        let spec = ToneSpec::new(0.0, 100.0, 1.0, Waveform::Sine);
        let osc = Oscillator::from_spec(spec, 0, fs);
        assert!(osc.gain_at(0, fs) < 1e-6);
        assert!((osc.gain_at(100, fs) - TONE_PEAK).abs() < 1e-3);
        assert!(osc.gain_at(550, fs) < TONE_PEAK);
        assert!(osc.gain_at(999, fs) < 1e-3);
    }

    #[test]
    fn short_tone_envelope_stays_bounded() {
        let fs = 48_000.0;
        let spec = ToneSpec::new(0.0, 800.0, 0.05, Waveform::Square);
        let mut osc = Oscillator::from_spec(spec, 0, fs);
        let mut peak = 0.0f32;
        for t in 0..2_400u64 {
            peak = peak.max(osc.render_tick(t, fs).abs());
        }
        assert!(peak <= TONE_PEAK + 1e-6);
        assert!(peak > 0.0);
    }
}
