use std::ops::RangeInclusive;

use crate::error::{OrbitError, OrbitResult};

/// Allowed source distance (meters)
pub const DISTANCE_RANGE: RangeInclusive<f64> = 0.1..=10.0;
/// Allowed rotation rate (rotations per second)
pub const ROTATION_RATE_RANGE: RangeInclusive<f64> = 0.1..=5.0;
/// Allowed clip duration (milliseconds)
pub const DURATION_MS_RANGE: RangeInclusive<u32> = 100..=10000;

/// Inputs for one synthesis run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthesisParameters {
    /// Distance from the listener to the source, in meters. Louder when closer.
    pub distance_m: f64,
    /// Angular speed of the source, in rotations per second
    pub rotation_rate: f64,
    /// Clip length in milliseconds
    pub duration_ms: u32,
}

impl SynthesisParameters {
    pub fn new(distance_m: f64, rotation_rate: f64, duration_ms: u32) -> Self {
        Self {
            distance_m,
            rotation_rate,
            duration_ms,
        }
    }

    /// Check every field against its allowed range.
    ///
    /// The synthesizer itself never calls this; it trusts whatever it is given.
    pub fn validate(&self) -> OrbitResult<()> {
        check_range("distance", self.distance_m, &DISTANCE_RANGE)?;
        check_range("rotation rate", self.rotation_rate, &ROTATION_RATE_RANGE)?;
        if !DURATION_MS_RANGE.contains(&self.duration_ms) {
            return Err(OrbitError::InvalidParameter {
                name: "duration",
                value: self.duration_ms as f64,
                min: *DURATION_MS_RANGE.start() as f64,
                max: *DURATION_MS_RANGE.end() as f64,
            });
        }
        Ok(())
    }
}

impl Default for SynthesisParameters {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1000)
    }
}

fn check_range(name: &'static str, value: f64, range: &RangeInclusive<f64>) -> OrbitResult<()> {
    // NaN fails `contains`, which is what we want
    if range.contains(&value) {
        Ok(())
    } else {
        Err(OrbitError::InvalidParameter {
            name,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}
