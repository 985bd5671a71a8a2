//! file-level conversion: decode an input, run the packing pipeline,
//! write the requested artifacts next to the caller's output directory

use anyhow::{Context, Result};
use libr8_audio::{
    derive_stream_seed, pack, PackError, PackOptions, SourceAudio, DEFAULT_RATE, DITHER_SCALE,
    R1_EXT, R8_EXT,
};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::audio;
use crate::ffmpeg;

/// Options for converting one file or a batch.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Directory the artifacts are written into.
    pub out_dir: PathBuf,
    /// Target sample rate in Hz.
    pub target_rate: u32,
    /// Write the `.r8` artifact.
    pub write_r8: bool,
    /// Write the `.r1` artifact.
    pub write_r1: bool,
    /// Peak-normalize before resampling.
    pub normalize: bool,
    /// Apply TPDF dither before quantization.
    pub dither: bool,
    /// Base seed; each file derives its own stream seed from this.
    pub seed: u32,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            target_rate: DEFAULT_RATE,
            write_r8: true,
            write_r1: true,
            normalize: true,
            dither: true,
            seed: 0,
        }
    }
}

/// Result of one successful conversion.
#[derive(Debug, Clone, Serialize)]
pub struct Converted {
    /// The input that was converted.
    pub input: PathBuf,
    /// Artifacts written, in `.r8`, `.r1` order.
    pub outputs: Vec<PathBuf>,
    /// Effective output rate in Hz.
    pub sample_rate: u32,
    /// Samples per artifact (bytes in `.r8`, bits in `.r1`).
    pub sample_count: usize,
}

/// One failed input in a batch.
#[derive(Debug, Clone, Serialize)]
pub struct Failure {
    pub input: PathBuf,
    pub error: String,
}

/// Per-item results of a batch run.
#[derive(Debug, Default, Serialize)]
pub struct BatchReport {
    pub converted: Vec<Converted>,
    pub failures: Vec<Failure>,
}

impl BatchReport {
    /// Did every input convert?
    pub fn all_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Decode an input file to mono float samples at its native rate.
///
/// WAV and AIFF go through the native container readers; everything else
/// is probed by symphonia, with an ffmpeg subprocess as the last resort.
/// No decoder for the extension is an `UnsupportedFormat` error, reported
/// once with its cause, never downgraded silently.
pub fn decode_source(input: &Path) -> Result<SourceAudio> {
    let ext = input
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "wav" => Ok(libr8_audio::read_wav_file(input)
            .with_context(|| format!("Failed to decode {}", input.display()))?),
        "aif" | "aiff" => Ok(libr8_audio::read_aiff_file(input)
            .with_context(|| format!("Failed to decode {}", input.display()))?),
        _ => match audio::read_audio_file(input) {
            Ok((samples, sample_rate, channels)) => {
                let mono = libr8_audio::downmix(&samples, channels)?;
                Ok(SourceAudio::new(mono, sample_rate)?)
            }
            Err(probe_err) => {
                if ffmpeg::have_ffmpeg() {
                    log::warn!(
                        "symphonia could not read {} ({probe_err:#}), trying ffmpeg",
                        input.display()
                    );
                    ffmpeg::decode_via_ffmpeg(input)
                } else {
                    let what = if ext.is_empty() {
                        input.display().to_string()
                    } else {
                        ext.clone()
                    };
                    Err(PackError::unsupported(what)).with_context(|| format!("{probe_err:#}"))
                }
            }
        },
    }
}

/// Convert one input file and write its artifacts.
///
/// Same input, options, and seed produce byte-identical outputs.
pub fn convert_file(input: &Path, options: &ConvertOptions) -> Result<Converted> {
    if !options.out_dir.is_dir() {
        return Err(PackError::conversion(format!(
            "output directory {} is not a directory",
            options.out_dir.display()
        ))
        .into());
    }

    let source = decode_source(input)?;

    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "out".to_string());

    let pack_options = PackOptions {
        target_rate: options.target_rate,
        write_r8: options.write_r8,
        write_r1: options.write_r1,
        normalize: options.normalize,
        dither: options.dither,
        dither_scale: DITHER_SCALE,
        seed: derive_stream_seed(options.seed, &stem),
    };
    let output = pack(&source, &pack_options)?;

    let mut outputs = Vec::new();
    if let Some(r8) = &output.r8 {
        let path = options.out_dir.join(format!("{}.{}", stem, R8_EXT));
        fs::write(&path, r8).with_context(|| format!("Failed to write {}", path.display()))?;
        outputs.push(path);
    }
    if let Some(r1) = &output.r1 {
        let path = options.out_dir.join(format!("{}.{}", stem, R1_EXT));
        fs::write(&path, r1).with_context(|| format!("Failed to write {}", path.display()))?;
        outputs.push(path);
    }

    Ok(Converted {
        input: input.to_path_buf(),
        outputs,
        sample_rate: output.sample_rate,
        sample_count: output.sample_count,
    })
}

/// Convert many inputs with per-item failure isolation.
///
/// One unreadable input is recorded as a failure and skipped; every other
/// input still produces its artifacts.
pub fn convert_batch(inputs: &[PathBuf], options: &ConvertOptions) -> BatchReport {
    let mut report = BatchReport::default();
    for input in inputs {
        match convert_file(input, options) {
            Ok(converted) => report.converted.push(converted),
            Err(e) => report.failures.push(Failure {
                input: input.clone(),
                error: format!("{e:#}"),
            }),
        }
    }
    report
}
