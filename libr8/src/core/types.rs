//! common types for the r8/r1 packing core

use crate::error::{PackError, PackResult};

// constants

/// Default target sample rate in Hz
pub const DEFAULT_RATE: u32 = 11025;

/// Lowest accepted target rate
pub const MIN_RATE: u32 = 2000;

/// Highest accepted target rate
pub const MAX_RATE: u32 = 48000;

/// File extension for raw unsigned 8-bit PCM output
pub const R8_EXT: &str = "r8";

/// File extension for packed 1-bit DPCM output
pub const R1_EXT: &str = "r1";

/// DPCM accumulator start value (mid-scale)
pub const ACC_START: u8 = 128;

// data structures

/// Decoded mono audio at a known sample rate.
///
/// Produced once by a container reader or external decoder and treated as
/// immutable afterward. Samples are nominally in [-1.0, 1.0] but are only
/// clamped downstream (normalizer, quantizer).
#[derive(Debug, Clone)]
pub struct SourceAudio {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl SourceAudio {
    /// new source audio, rejects a zero sample rate
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> PackResult<Self> {
        if sample_rate == 0 {
            return Err(PackError::decode("sample rate is zero"));
        }
        Ok(SourceAudio {
            samples,
            sample_rate,
        })
    }

    /// duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}
