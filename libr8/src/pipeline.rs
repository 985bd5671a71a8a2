//! the in-memory pipeline: SourceAudio -> {r8 bytes, r1 bytes}
//!
//! Stage order is fixed: normalize -> resample -> dither -> quantize ->
//! artifacts. Every invocation is independent; with a fixed seed the same
//! input and options produce byte-identical output.

use crate::core::{SourceAudio, DITHER_SCALE, DEFAULT_RATE, MAX_RATE, MIN_RATE};
use crate::dpcm;
use crate::dsp::{normalize, resample_linear, tpdf_dither};
use crate::error::{PackError, PackResult};
use crate::quantize::quantize_u8;
use crate::rng::create_rng;

/// Options for one packing run.
#[derive(Debug, Clone)]
pub struct PackOptions {
    /// Target sample rate in Hz, within [`MIN_RATE`]..=[`MAX_RATE`].
    pub target_rate: u32,
    /// Produce the raw unsigned 8-bit artifact.
    pub write_r8: bool,
    /// Produce the packed 1-bit DPCM artifact.
    pub write_r1: bool,
    /// Peak-normalize before resampling.
    pub normalize: bool,
    /// Apply TPDF dither before quantization.
    pub dither: bool,
    /// Dither amplitude as a fraction of full scale.
    pub dither_scale: f32,
    /// Seed for the dither noise source.
    pub seed: u32,
}

impl Default for PackOptions {
    fn default() -> Self {
        Self {
            target_rate: DEFAULT_RATE,
            write_r8: true,
            write_r1: true,
            normalize: true,
            dither: true,
            dither_scale: DITHER_SCALE,
            seed: 0,
        }
    }
}

impl PackOptions {
    /// Set the target sample rate.
    pub fn with_rate(mut self, rate: u32) -> Self {
        self.target_rate = rate;
        self
    }

    /// Choose which artifacts to produce.
    pub fn with_outputs(mut self, r8: bool, r1: bool) -> Self {
        self.write_r8 = r8;
        self.write_r1 = r1;
        self
    }

    /// Enable or disable peak normalization.
    pub fn with_normalize(mut self, on: bool) -> Self {
        self.normalize = on;
        self
    }

    /// Enable or disable dithering.
    pub fn with_dither(mut self, on: bool) -> Self {
        self.dither = on;
        self
    }

    /// Set the dither seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }
}

/// Artifacts and metadata from one packing run.
#[derive(Debug, Clone)]
pub struct PackOutput {
    /// Raw unsigned 8-bit waveform, one byte per sample.
    pub r8: Option<Vec<u8>>,
    /// Packed 1-bit DPCM stream, `ceil(sample_count / 8)` bytes.
    pub r1: Option<Vec<u8>>,
    /// Effective output rate in Hz.
    pub sample_rate: u32,
    /// Samples in the quantized waveform.
    pub sample_count: usize,
}

/// Run the conversion pipeline over decoded source audio.
///
/// Fails with a conversion error when no artifact is requested or the
/// target rate is out of range; the degenerate single-sample resample is
/// surfaced as a warning, not an error.
pub fn pack(source: &SourceAudio, options: &PackOptions) -> PackResult<PackOutput> {
    if !options.write_r8 && !options.write_r1 {
        return Err(PackError::conversion(
            "no output selected: enable r8, r1, or both",
        ));
    }
    if !(MIN_RATE..=MAX_RATE).contains(&options.target_rate) {
        return Err(PackError::conversion(format!(
            "target rate {} outside {}..{} Hz",
            options.target_rate, MIN_RATE, MAX_RATE
        )));
    }

    let mut work = if options.normalize {
        normalize(&source.samples)
    } else {
        source.samples.to_vec()
    };

    work = resample_linear(&work, source.sample_rate, options.target_rate);
    if work.len() == 1 && source.samples.len() > 1 {
        log::warn!(
            "resample collapsed {} samples at {} Hz to a single sample",
            source.samples.len(),
            source.sample_rate
        );
    }

    if options.dither {
        let mut rng = create_rng(options.seed);
        work = tpdf_dither(&work, options.dither_scale, &mut rng);
    }

    let quantized = quantize_u8(&work);
    let sample_count = quantized.len();

    let r1 = options.write_r1.then(|| dpcm::encode(&quantized));
    let r8 = options.write_r8.then_some(quantized);

    Ok(PackOutput {
        r8,
        r1,
        sample_rate: options.target_rate,
        sample_count,
    })
}
