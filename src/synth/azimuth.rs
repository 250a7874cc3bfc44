/// Running azimuth of the orbiting source, in degrees within `[0, 360)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Azimuth {
    degrees: f64,
    step: f64,
}

impl Azimuth {
    /// Start at 0 degrees (straight ahead), advancing `step` degrees per frame
    pub fn new(step: f64) -> Self {
        Self { degrees: 0.0, step }
    }

    /// Per-frame increment that sweeps `rotation_rate * 360` degrees across the clip
    pub fn step_for(rotation_rate: f64, duration_ms: u32, sample_rate: u32) -> f64 {
        360.0 * rotation_rate / (duration_ms as f64 / 1000.0) / sample_rate as f64
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Move to the next frame, wrapping back below 360
    pub fn advance(&mut self) {
        self.degrees += self.step;
        if self.degrees >= 360.0 {
            self.degrees -= 360.0;
        }
    }
}
