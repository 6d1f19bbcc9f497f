use std::io::Read;
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use log::{debug, info, warn};

/// Extra time allowed for the device to drain its buffers after the last frame.
const DRAIN_GRACE: Duration = Duration::from_secs(2);

/// A decoded clip. Samples are interleaved and normalized to [-1.0, 1.0].
#[derive(Clone, Debug, PartialEq)]
pub struct Clip {
    pub samples: Vec<f32>,
    pub channels: u16,
    pub sample_rate: u32,
}

impl Clip {
    pub fn open(path: &Path) -> Result<Self> {
        let reader = hound::WavReader::open(path)
            .with_context(|| format!("Failed to open audio file: {}", path.display()))?;
        Self::decode(reader)
    }

    pub fn decode<R: Read>(mut reader: hound::WavReader<R>) -> Result<Self> {
        let spec = reader.spec();
        if spec.channels == 0 {
            bail!("WAV file declares zero channels");
        }

        let samples: std::result::Result<Vec<f32>, _> = match spec.sample_format {
            hound::SampleFormat::Float => reader.samples::<f32>().collect(),
            hound::SampleFormat::Int => {
                let max_value = (1_i64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .samples::<i32>()
                    .map(|sample| sample.map(|s| s as f32 / max_value))
                    .collect()
            }
        };
        let samples = samples.map_err(|e| anyhow!("Failed to parse WAV samples: {}", e))?;

        Ok(Self {
            samples,
            channels: spec.channels,
            sample_rate: spec.sample_rate,
        })
    }

    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.frames() as f64 / self.sample_rate.max(1) as f64)
    }

    /// Mono clips are copied to every output channel; extra output channels repeat the last one.
    fn sample_at(&self, frame: usize, channel: usize) -> f32 {
        let channel = channel.min(self.channels as usize - 1);
        self.samples[frame * self.channels as usize + channel]
    }
}

/// Walks a clip at the device's frame rate.
#[derive(Debug)]
struct Playback {
    clip: Clip,
    position: f64,
    step: f64,
}

impl Playback {
    fn new(clip: Clip, output_rate: u32) -> Self {
        let step = clip.sample_rate as f64 / output_rate.max(1) as f64;
        Self {
            clip,
            position: 0.0,
            step,
        }
    }

    /// Fills one device buffer. Returns `true` once every frame of the clip has been written.
    fn fill(&mut self, buffer: &mut [f32], output_channels: usize) -> bool {
        let frames = self.clip.frames();
        for out in buffer.chunks_mut(output_channels.max(1)) {
            let frame = self.position as usize;
            if frame < frames {
                for (channel, sample) in out.iter_mut().enumerate() {
                    *sample = self.clip.sample_at(frame, channel);
                }
                self.position += self.step;
            } else {
                out.fill(0.0);
            }
        }
        self.position as usize >= frames
    }
}

/// Plays the clip on the default output device and blocks until it has finished.
pub fn play_blocking(clip: &Clip) -> Result<()> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow!("No default output device available"))?;
    let config = device.default_output_config()?;
    if config.sample_format() != cpal::SampleFormat::F32 {
        bail!("Unsupported sample format: {:?}", config.sample_format());
    }

    let output_channels = config.channels() as usize;
    let mut playback = Playback::new(clip.clone(), config.sample_rate().0);
    debug!(
        "Playing {} frames at {} Hz on {} channels",
        clip.frames(),
        config.sample_rate().0,
        output_channels
    );

    let (done_tx, done_rx) = mpsc::channel();
    let audio_callback = move |output_buffer: &mut [f32], _: &cpal::OutputCallbackInfo| {
        if playback.fill(output_buffer, output_channels) {
            // The receiver is gone after the first signal.
            let _ = done_tx.send(());
        }
    };
    let error_callback = |err| {
        warn!("An error occurred on the audio stream: {}", err);
    };

    let stream = device.build_output_stream(&config.into(), audio_callback, error_callback, None)?;
    stream.play()?;

    if done_rx.recv_timeout(clip.duration() + DRAIN_GRACE).is_err() {
        warn!("Audio playback did not report completion; stopping the stream");
    }
    drop(stream);
    Ok(())
}

/// Decodes and plays a WAV file. Failures are logged and playback is skipped.
pub fn play_file(path: &Path) {
    let result = Clip::open(path).and_then(|clip| {
        info!(
            "Playing {} ({:.1}s)",
            path.display(),
            clip.duration().as_secs_f32()
        );
        play_blocking(&clip)
    });
    if let Err(e) = result {
        warn!("Skipping audio playback: {:#}", e);
    }
}
