//! rer8 - audio converter for the .r8/.r1 raw formats
//!
//! Decodes common audio inputs (WAV and AIFF natively, everything else
//! through symphonia or an ffmpeg fallback), runs the `libr8` packing
//! pipeline, and writes the header-less `.r8` / `.r1` artifacts.

pub mod audio;
pub mod convert;
pub mod ffmpeg;

/// Re-export the core options and error types
pub use libr8_audio::{PackError, PackOptions, PackResult};

pub use convert::{
    convert_batch, convert_file, decode_source, BatchReport, ConvertOptions, Converted, Failure,
};
