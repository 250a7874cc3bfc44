//! RIFF/WAVE container for interleaved 32-bit float samples.
//!
//! The header is always the canonical 44 bytes (`RIFF`, a 16-byte `fmt ` chunk,
//! `data`) followed directly by the little-endian payload, with no padding or
//! trailing chunks.

use hound::{SampleFormat, WavReader};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{OrbitError, OrbitResult};

/// Size of the header written before the payload
pub const HEADER_LEN: usize = 44;

/// Value of the `fmt ` chunk's audio format field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatTag {
    /// Integer PCM (1). Kept as the default so output matches the legacy files
    /// byte for byte, even though the payload is float.
    #[default]
    Pcm,
    /// IEEE float (3), which is what the payload actually is
    IeeeFloat,
}

impl FormatTag {
    pub fn code(self) -> u16 {
        match self {
            FormatTag::Pcm => 1,
            FormatTag::IeeeFloat => 3,
        }
    }

    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            1 => Some(FormatTag::Pcm),
            3 => Some(FormatTag::IeeeFloat),
            _ => None,
        }
    }
}

/// Format parameters written into the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
    pub format_tag: FormatTag,
}

impl PcmFormat {
    /// Stereo, 32 bits per sample, legacy format tag
    pub fn stereo_f32(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            channels: 2,
            bits_per_sample: 32,
            format_tag: FormatTag::Pcm,
        }
    }

    pub fn with_format_tag(self, format_tag: FormatTag) -> Self {
        Self { format_tag, ..self }
    }

    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per frame across all channels
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}

impl Default for PcmFormat {
    fn default() -> Self {
        Self::stereo_f32(44100)
    }
}

/// Decoded header fields. Sizes are derived, never stored independently of the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    pub format: PcmFormat,
    /// Payload size in bytes (`subchunk2Size`)
    pub data_size: u32,
}

impl WavHeader {
    /// Header for `sample_count` samples (all channels) in `format`
    pub fn for_samples(format: PcmFormat, sample_count: usize) -> OrbitResult<Self> {
        let bytes = sample_count
            .checked_mul(format.bytes_per_sample() as usize)
            .ok_or(OrbitError::PayloadTooLarge(usize::MAX))?;
        let data_size = u32::try_from(bytes)
            .ok()
            .filter(|size| size.checked_add(36).is_some())
            .ok_or(OrbitError::PayloadTooLarge(bytes))?;
        Ok(Self { format, data_size })
    }

    /// RIFF chunk size: everything after the first 8 bytes
    pub fn chunk_size(&self) -> u32 {
        36 + self.data_size
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let f = &self.format;
        let mut out = [0u8; HEADER_LEN];
        out[0..4].copy_from_slice(b"RIFF");
        out[4..8].copy_from_slice(&self.chunk_size().to_le_bytes());
        out[8..12].copy_from_slice(b"WAVE");
        out[12..16].copy_from_slice(b"fmt ");
        out[16..20].copy_from_slice(&16u32.to_le_bytes());
        out[20..22].copy_from_slice(&f.format_tag.code().to_le_bytes());
        out[22..24].copy_from_slice(&f.channels.to_le_bytes());
        out[24..28].copy_from_slice(&f.sample_rate.to_le_bytes());
        out[28..32].copy_from_slice(&f.byte_rate().to_le_bytes());
        out[32..34].copy_from_slice(&f.block_align().to_le_bytes());
        out[34..36].copy_from_slice(&f.bits_per_sample.to_le_bytes());
        out[36..40].copy_from_slice(b"data");
        out[40..44].copy_from_slice(&self.data_size.to_le_bytes());
        out
    }
}

/// Parse the 44-byte header at the start of `bytes`
pub fn read_header(bytes: &[u8]) -> OrbitResult<WavHeader> {
    if bytes.len() < HEADER_LEN {
        return Err(OrbitError::InvalidHeader(format!(
            "need {} bytes, got {}",
            HEADER_LEN,
            bytes.len()
        )));
    }

    let u16_at = |at: usize| u16::from_le_bytes([bytes[at], bytes[at + 1]]);
    let u32_at =
        |at: usize| u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]);

    for (at, tag) in [(0, b"RIFF"), (8, b"WAVE"), (12, b"fmt "), (36, b"data")] {
        if &bytes[at..at + 4] != tag {
            return Err(OrbitError::InvalidHeader(format!(
                "expected {:?} at offset {}",
                String::from_utf8_lossy(tag),
                at
            )));
        }
    }
    if u32_at(16) != 16 {
        return Err(OrbitError::InvalidHeader(format!(
            "unexpected fmt chunk size {}",
            u32_at(16)
        )));
    }

    let format_tag = FormatTag::from_code(u16_at(20)).ok_or_else(|| {
        OrbitError::InvalidHeader(format!("unknown format tag {}", u16_at(20)))
    })?;
    let format = PcmFormat {
        sample_rate: u32_at(24),
        channels: u16_at(22),
        bits_per_sample: u16_at(34),
        format_tag,
    };
    let header = WavHeader {
        format,
        data_size: u32_at(40),
    };

    if u32_at(4) != header.chunk_size()
        || u32_at(28) != format.byte_rate()
        || u16_at(32) != format.block_align()
    {
        return Err(OrbitError::InvalidHeader(
            "derived size fields are inconsistent".into(),
        ));
    }

    Ok(header)
}

/// Write header and interleaved float payload to `sink`
pub fn write_wav<W: Write>(samples: &[f32], format: &PcmFormat, sink: &mut W) -> OrbitResult<()> {
    if format.bits_per_sample != 32 {
        return Err(OrbitError::UnsupportedFormat(format!(
            "float payload needs 32 bits per sample, format says {}",
            format.bits_per_sample
        )));
    }
    if format.channels == 0 || samples.len() % format.channels as usize != 0 {
        return Err(OrbitError::UnsupportedFormat(format!(
            "{} samples do not divide into {} channels",
            samples.len(),
            format.channels
        )));
    }

    let header = WavHeader::for_samples(*format, samples.len())?;
    sink.write_all(&header.to_bytes())?;
    for sample in samples {
        sink.write_all(&sample.to_le_bytes())?;
    }
    Ok(())
}

/// Create (or overwrite) `path` and write the clip into it.
///
/// A failure part way through may leave a truncated file behind.
pub fn write_wav_file<P: AsRef<Path>>(
    path: P,
    samples: &[f32],
    format: &PcmFormat,
) -> OrbitResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_wav(samples, format, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Decode a file written by [`write_wav_file`] back into its format and samples.
///
/// Files carrying the legacy integer tag are read as 32-bit integers and
/// reinterpreted bit for bit as floats.
pub fn read_wav_file<P: AsRef<Path>>(path: P) -> OrbitResult<(PcmFormat, Vec<f32>)> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();

    if spec.bits_per_sample != 32 {
        return Err(OrbitError::UnsupportedFormat(format!(
            "expected 32-bit samples, got {}",
            spec.bits_per_sample
        )));
    }

    let (format_tag, samples) = match spec.sample_format {
        SampleFormat::Float => (
            FormatTag::IeeeFloat,
            reader.samples::<f32>().collect::<Result<Vec<_>, _>>()?,
        ),
        SampleFormat::Int => (
            FormatTag::Pcm,
            reader
                .samples::<i32>()
                .map(|s| s.map(|bits| f32::from_bits(bits as u32)))
                .collect::<Result<Vec<_>, _>>()?,
        ),
    };

    let format = PcmFormat {
        sample_rate: spec.sample_rate,
        channels: spec.channels,
        bits_per_sample: spec.bits_per_sample,
        format_tag,
    };
    Ok((format, samples))
}
