//! Procedurally generated sound effects and the sinks that play them.

use rand::Rng;

use crate::config::AudioConfig;

/// Peak amplitude of a signed 16-bit sample.
pub const MAX_AMPLITUDE: i16 = i16::MAX;

/// Number of samples covering `duration` seconds.
pub fn sample_count(sample_rate: u32, duration: f32) -> usize {
    (sample_rate as f64 * duration as f64).round() as usize
}

/// Two-level pulse wave. `duty_cycle` is the fraction of each period spent high.
pub fn pulse_wave(sample_rate: u32, frequency: u32, duration: f32, duty_cycle: f32) -> Vec<i16> {
    let period = (sample_rate / frequency.max(1)).max(1) as usize;
    let high = (period as f64 * duty_cycle.clamp(0.0, 1.0) as f64).round() as usize;

    (0..sample_count(sample_rate, duration))
        .map(|i| {
            if i % period < high {
                MAX_AMPLITUDE
            } else {
                -MAX_AMPLITUDE
            }
        })
        .collect()
}

/// Uniform white noise over the full amplitude range.
pub fn white_noise(sample_rate: u32, duration: f32, rng: &mut impl Rng) -> Vec<i16> {
    (0..sample_count(sample_rate, duration))
        .map(|_| rng.gen_range(-MAX_AMPLITUDE..=MAX_AMPLITUDE))
        .collect()
}

/// A playable clip: interleaved samples plus the format to play them in.
#[derive(Debug, Clone, PartialEq)]
pub struct Sound {
    pub samples: Vec<i16>,
    pub sample_rate: u32,
    pub channels: u16,
    pub volume: f32,
}

impl Sound {
    /// Wraps a mono buffer, duplicating each sample across `config.channels`.
    pub fn from_mono(mono: Vec<i16>, config: &AudioConfig) -> Self {
        let channels = config.channels.max(1);
        let samples = if channels == 1 {
            mono
        } else {
            mono.iter()
                .flat_map(|&s| std::iter::repeat(s).take(channels as usize))
                .collect()
        };

        Sound {
            samples,
            sample_rate: config.sample_rate,
            channels,
            volume: config.volume,
        }
    }
}

/// The effects the game triggers, built once at startup.
#[derive(Debug, Clone)]
pub struct SoundBank {
    pub eat: Sound,
    pub crash: Sound,
}

impl SoundBank {
    pub fn new(config: &AudioConfig, rng: &mut impl Rng) -> Self {
        SoundBank {
            eat: Sound::from_mono(pulse_wave(config.sample_rate, 440, 0.1, 0.5), config),
            crash: Sound::from_mono(white_noise(config.sample_rate, 0.1, rng), config),
        }
    }
}

/// Somewhere to send sounds. Playback is fire-and-forget.
pub trait AudioSink {
    fn play(&mut self, sound: &Sound);
}

/// Used when the crate is built without an audio backend.
#[cfg_attr(feature = "audio", allow(dead_code))]
#[derive(Debug, Default)]
pub struct SilentSink;

impl AudioSink for SilentSink {
    fn play(&mut self, _sound: &Sound) {}
}

#[cfg(feature = "audio")]
pub use self::rodio_sink::RodioSink;

#[cfg(feature = "audio")]
mod rodio_sink {
    use log::warn;
    use rodio::{buffer::SamplesBuffer, OutputStream, OutputStreamHandle, Sink};

    use super::{AudioSink, Sound};

    pub struct RodioSink {
        _stream: OutputStream,
        handle: OutputStreamHandle,
    }

    impl RodioSink {
        pub fn new() -> Result<Self, rodio::StreamError> {
            let (stream, handle) = OutputStream::try_default()?;
            Ok(Self {
                _stream: stream,
                handle,
            })
        }
    }

    impl AudioSink for RodioSink {
        fn play(&mut self, sound: &Sound) {
            match Sink::try_new(&self.handle) {
                Ok(sink) => {
                    sink.set_volume(sound.volume);
                    sink.append(SamplesBuffer::new(
                        sound.channels,
                        sound.sample_rate,
                        sound.samples.clone(),
                    ));
                    sink.detach();
                }
                Err(e) => warn!("Dropped sound: {}", e),
            }
        }
    }
}
