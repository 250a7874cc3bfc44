pub mod azimuth;
pub mod itd;

use std::f64::consts::PI;

use log::debug;

use crate::config::AcousticConfig;
use crate::params::SynthesisParameters;
pub use azimuth::Azimuth;
pub use itd::interaural_delay;

const LEFT: usize = 0;
const RIGHT: usize = 1;

/// Interleaved stereo samples: index `2 * i` is the left sample of frame `i`,
/// `2 * i + 1` the right one.
///
/// Only the synthesizer can fill or rescale a buffer; once handed out it is read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl SampleBuffer {
    pub const CHANNELS: u16 = 2;

    fn silent(frames: usize, sample_rate: u32) -> Self {
        Self {
            samples: vec![0.0; frames * Self::CHANNELS as usize],
            sample_rate,
        }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    /// Total number of samples across both channels
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn frames(&self) -> usize {
        self.samples.len() / Self::CHANNELS as usize
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn duration_secs(&self) -> f64 {
        self.frames() as f64 / self.sample_rate as f64
    }

    /// `(left, right)` pair for frame `index`
    pub fn frame(&self, index: usize) -> Option<(f32, f32)> {
        let base = index * Self::CHANNELS as usize;
        Some((*self.samples.get(base + LEFT)?, *self.samples.get(base + RIGHT)?))
    }

    pub fn left(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples.iter().step_by(2).copied()
    }

    pub fn right(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples.iter().skip(1).step_by(2).copied()
    }

    /// Largest absolute sample value
    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |max, s| max.max(s.abs()))
    }

    /// Scale so the loudest sample sits at full scale. Silence is left alone.
    fn normalize(&mut self) {
        let peak = self.peak();
        if peak > 0.0 {
            for s in &mut self.samples {
                *s /= peak;
            }
        }
    }
}

/// Inverse-distance gain applied to the carrier. Not physically calibrated.
pub fn attenuation(distance_m: f64) -> f64 {
    1.0 / (1.0 + distance_m)
}

/// Number of stereo frames in a clip of `duration_ms` (truncating)
pub fn frame_count(duration_ms: u32, sample_rate: u32) -> usize {
    (duration_ms as u64 * sample_rate as u64 / 1000) as usize
}

/// Renders a carrier tone orbiting the listener, panned purely by interaural delay
#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    config: AcousticConfig,
}

impl Synthesizer {
    pub fn new(config: AcousticConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AcousticConfig {
        &self.config
    }

    /// Render and normalize a clip so its peak sample is ±1.0
    pub fn generate(&self, params: &SynthesisParameters) -> SampleBuffer {
        let mut buffer = self.render_dry(params);
        let peak = buffer.peak();
        buffer.normalize();
        debug!("Normalized from peak {:.6}", peak);
        buffer
    }

    /// Render a clip without normalization.
    ///
    /// Every frame puts the carrier sample into the leading ear immediately and
    /// into the lagging ear `floor(|itd| * sample_rate)` frames later. Lagging
    /// copies that would land past the last frame are dropped, so the tail of the
    /// clip loses a little energy in the far ear.
    pub fn render_dry(&self, params: &SynthesisParameters) -> SampleBuffer {
        let sample_rate = self.config.sample_rate;
        let frames = frame_count(params.duration_ms, sample_rate);
        let mut buffer = SampleBuffer::silent(frames, sample_rate);

        if frames == 0 {
            debug!("Duration {} ms yields no frames", params.duration_ms);
            return buffer;
        }

        let mut azimuth = Azimuth::new(Azimuth::step_for(
            params.rotation_rate,
            params.duration_ms,
            sample_rate,
        ));
        let gain = self.config.carrier_amplitude * attenuation(params.distance_m);
        let omega = 2.0 * PI * self.config.carrier_hz / sample_rate as f64;

        debug!(
            "Rendering {} frames at {} Hz, {:.6} deg/frame, gain {:.4}",
            frames,
            sample_rate,
            azimuth.step(),
            gain
        );

        let samples = &mut buffer.samples;
        for i in 0..frames {
            let dt = interaural_delay(azimuth.degrees(), &self.config);
            let lag = (dt.abs() * sample_rate as f64).floor() as usize;
            let s = ((omega * i as f64).sin() * gain) as f32;

            let (lead, trail) = if dt > 0.0 { (RIGHT, LEFT) } else { (LEFT, RIGHT) };
            samples[i * 2 + lead] += s;
            if i + lag < frames {
                samples[(i + lag) * 2 + trail] += s;
            }

            azimuth.advance();
        }

        buffer
    }
}
