//! WAV capture on its own thread, fed hop buffers over a channel.

use crossbeam_channel::Receiver;
use hound::{SampleFormat, WavSpec, WavWriter};
use tracing::{info, warn};

pub struct WavOutput;

impl WavOutput {
    /// Spawn the writer thread; it runs until the sender side is dropped.
    pub fn run(
        rx: Receiver<Vec<f32>>,
        path: String,
        sample_rate: u32,
    ) -> std::thread::JoinHandle<()> {
        std::thread::spawn(move || {
            let spec = WavSpec {
                channels: 1,
                sample_rate,
                bits_per_sample: 16,
                sample_format: SampleFormat::Int,
            };
            let mut writer = match WavWriter::create(&path, spec) {
                Ok(w) => w,
                Err(err) => {
                    warn!("could not create {path}: {err}");
                    return;
                }
            };
            while let Ok(samples) = rx.recv() {
                for &s in &samples {
                    let v = (s.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
                    if writer.write_sample(v).is_err() {
                        warn!("wav write failed; stopping capture");
                        return;
                    }
                }
            }
            if let Err(err) = writer.finalize() {
                warn!("wav finalize failed: {err}");
            } else {
                info!("wav capture written to {path}");
            }
        })
    }
}
