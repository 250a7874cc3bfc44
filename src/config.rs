/// Physical and synthesis constants bound into a [`Synthesizer`](crate::Synthesizer).
///
/// The defaults describe a 440 Hz tone heard by an average adult head in air
/// at room temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcousticConfig {
    /// Output sample rate (Hz)
    pub sample_rate: u32,
    /// Distance between the ears (meters)
    pub ear_distance_m: f64,
    /// Speed of sound (meters/second)
    pub sound_speed_mps: f64,
    /// Carrier tone frequency (Hz)
    pub carrier_hz: f64,
    /// Peak amplitude of the dry carrier before distance attenuation
    pub carrier_amplitude: f64,
}

impl AcousticConfig {
    pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

    /// Largest interaural delay the head can produce, in seconds
    pub fn max_itd(&self) -> f64 {
        self.ear_distance_m / self.sound_speed_mps
    }
}

impl Default for AcousticConfig {
    fn default() -> Self {
        Self {
            sample_rate: Self::DEFAULT_SAMPLE_RATE,
            ear_distance_m: 0.204,
            sound_speed_mps: 340.29,
            carrier_hz: 440.0,
            carrier_amplitude: 0.5,
        }
    }
}
