use chrono::{DateTime, Local};
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::analysis::{summarize, ClipSummary};
use crate::error::{OrbitError, OrbitResult};
use crate::params::SynthesisParameters;
use crate::synth::Synthesizer;
use crate::wav::{read_wav_file, write_wav_file, FormatTag, PcmFormat, HEADER_LEN};

/// What a completed render produced
#[derive(Debug, Clone)]
pub struct RenderReport {
    pub path: PathBuf,
    pub frames: usize,
    pub bytes: u64,
    pub summary: ClipSummary,
}

/// Generate a clip and write it to `output_path`
pub fn render_to_file(
    synth: &Synthesizer,
    params: &SynthesisParameters,
    output_path: &Path,
    format_tag: FormatTag,
    verbose: bool,
) -> OrbitResult<RenderReport> {
    if verbose {
        println!("Generating sound with parameters:");
        println!("  Distance: {} meters", params.distance_m);
        println!("  Rotation speed: {} rotations/sec", params.rotation_rate);
        println!("  Duration: {} ms", params.duration_ms);
    }

    let buffer = synth.generate(params);
    let format = PcmFormat::stereo_f32(buffer.sample_rate()).with_format_tag(format_tag);
    let summary = summarize(&buffer);

    if verbose {
        println!(
            "Rendered {} frames at {} Hz ({:.2}s)",
            summary.frames, format.sample_rate, summary.duration_secs
        );
        for (name, stats) in [("left", &summary.left), ("right", &summary.right)] {
            println!(
                "  {:>5}: peak={:.3} rms={:.3} pitch={}",
                name,
                stats.peak,
                stats.rms,
                stats
                    .dominant_hz
                    .map(|hz| format!("{:.1} Hz", hz))
                    .unwrap_or_else(|| "-".into())
            );
        }
    }

    write_wav_file(output_path, buffer.as_slice(), &format)?;
    let bytes = (HEADER_LEN + buffer.len() * format.bytes_per_sample() as usize) as u64;
    info!("Wrote {} ({} bytes)", output_path.display(), bytes);

    if verbose {
        verify_written(output_path, buffer.len())?;
        println!("  Verified: {}", output_path.display());
    }

    Ok(RenderReport {
        path: output_path.to_path_buf(),
        frames: buffer.frames(),
        bytes,
        summary,
    })
}

/// Decode `path` again and check it holds `expected_samples` samples
pub fn verify_written(path: &Path, expected_samples: usize) -> OrbitResult<()> {
    let (_, samples) = read_wav_file(path)?;
    if samples.len() != expected_samples {
        return Err(OrbitError::VerificationFailed {
            written: expected_samples,
            read: samples.len(),
        });
    }
    debug!("Verified {} samples in {}", samples.len(), path.display());
    Ok(())
}

/// Output filename carrying the parameters and the local render time
pub fn generate_filename(params: &SynthesisParameters, base_time: DateTime<Local>) -> String {
    format!(
        "orbit_{:.1}m_{:.1}rps_{}ms_{}.wav",
        params.distance_m,
        params.rotation_rate,
        params.duration_ms,
        base_time.format("%Y-%m-%d_%H-%M-%S")
    )
}
