//! Render a single tone orbiting the listener's head.
//!
//! Spatialisation uses interaural time difference only: each frame reaches the
//! nearer ear immediately and the farther ear a few samples later. The result is
//! normalized to full scale and written as a 44-byte-header WAV with 32-bit
//! float samples.

pub mod analysis;
pub mod config;
pub mod error;
pub mod params;
pub mod render;
pub mod synth;
pub mod wav;

pub use config::AcousticConfig;
pub use error::{OrbitError, OrbitResult};
pub use params::SynthesisParameters;
pub use synth::{SampleBuffer, Synthesizer};
pub use wav::{write_wav, write_wav_file, FormatTag, PcmFormat};
