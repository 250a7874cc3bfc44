use thiserror::Error;

/// Errors produced while validating, writing or reading back a rendered clip
#[derive(Error, Debug)]
pub enum OrbitError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{name} must be between {min} and {max}, got {value}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Payload of {0} bytes does not fit in a 32-bit RIFF size field")]
    PayloadTooLarge(usize),

    #[error("Invalid WAV header: {0}")]
    InvalidHeader(String),

    #[error("Read back {read} samples, wrote {written}")]
    VerificationFailed { written: usize, read: usize },

    #[error("Failed to decode WAV: {0}")]
    Decode(#[from] hound::Error),
}

pub type OrbitResult<T> = Result<T, OrbitError>;
