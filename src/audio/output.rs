//! Realtime output: a cpal stream draining an SPSC ring buffer.
//!
//! Failure to open a device is not fatal anywhere in the sequence; callers
//! log and continue without audio.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use ringbuf::traits::*;
use ringbuf::{HeapCons, HeapProd, HeapRb};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum AudioOutputError {
    #[error("no default output device")]
    NoDevice,
    #[error("no default output config: {0}")]
    Config(#[from] cpal::DefaultStreamConfigError),
    #[error("failed to build output stream: {0}")]
    Build(#[from] cpal::BuildStreamError),
    #[error("failed to start output stream: {0}")]
    Play(#[from] cpal::PlayStreamError),
}

pub struct AudioOutput {
    stream: Option<cpal::Stream>,
    pub sample_rate: u32,
}

impl AudioOutput {
    /// Open the default device and return a producer the worker loop pushes
    /// mono samples into; the callback duplicates them across channels.
    pub fn open(latency_ms: f32) -> Result<(Self, HeapProd<f32>), AudioOutputError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioOutputError::NoDevice)?;
        let supported = device.default_output_config()?;
        let sample_rate = supported.sample_rate().0;
        let channels = supported.channels();

        let config = cpal::StreamConfig {
            channels,
            sample_rate: cpal::SampleRate(sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };

        let capacity = (sample_rate as f32 * latency_ms / 1000.0) as usize;
        let rb = HeapRb::<f32>::new(capacity.max(256) * 4);
        let (prod, mut cons): (HeapProd<f32>, HeapCons<f32>) = rb.split();

        let stream = device.build_output_stream(
            &config,
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                let n_frames = data.len() / channels as usize;
                for frame in 0..n_frames {
                    let s = cons.try_pop().unwrap_or(0.0);
                    for ch in 0..channels as usize {
                        data[frame * channels as usize + ch] = s;
                    }
                }
            },
            |err| warn!("output stream error: {err}"),
            None,
        )?;
        stream.play()?;

        Ok((
            Self {
                stream: Some(stream),
                sample_rate,
            },
            prod,
        ))
    }

    /// Push a hop of samples, yielding briefly whenever the queue is full.
    pub fn push_samples(prod: &mut HeapProd<f32>, samples: &[f32]) {
        let mut offset = 0;
        while offset < samples.len() {
            let written = prod.push_slice(&samples[offset..]);
            offset += written;
            if offset < samples.len() {
                std::thread::sleep(std::time::Duration::from_micros(200));
            }
        }
    }
}

impl Drop for AudioOutput {
    fn drop(&mut self) {
        self.stream.take();
    }
}
