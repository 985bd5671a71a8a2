//! libr8 - encoder core for the .r8/.r1 raw audio formats
//!
//! Converts decoded audio to the two header-less artifacts used by the
//! engine: `.r8` (unsigned 8-bit PCM, mono, fixed rate) and `.r1` (1-bit
//! DPCM where each bit steps an 8-bit accumulator toward the target
//! waveform, MSB-first). The pipeline is normalize -> resample -> dither
//! -> quantize -> pack, every stage a pure function over an owned sample
//! vector.
//!
//! Input decoding beyond WAV/AIFF, file writing, and the CLI live in the
//! `rer8` converter crate.

pub mod core;
pub mod dpcm;
pub mod dsp;
pub mod error;
pub mod pipeline;
pub mod quantize;
pub mod reader;
pub mod rng;

pub use crate::core::{
    SourceAudio, ACC_START, DEFAULT_RATE, DITHER_SCALE, MAX_RATE, MIN_RATE, NORMALIZE_PEAK,
    R1_EXT, R8_EXT, SILENCE_THRESHOLD,
};
pub use dpcm::{BitReader, BitWriter, DpcmEncoder};
pub use error::{PackError, PackResult};
pub use pipeline::{pack, PackOptions, PackOutput};
pub use quantize::{quantize, quantize_u8};
pub use reader::{downmix, read_aiff, read_aiff_file, read_wav, read_wav_file};
pub use rng::{create_rng, derive_stream_seed};
