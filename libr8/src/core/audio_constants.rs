/// Peak target after normalization (99% of full scale)
pub const NORMALIZE_PEAK: f32 = 0.99;

/// Peaks below this count as silence and are left unscaled
pub const SILENCE_THRESHOLD: f32 = 1e-9;

/// Default TPDF dither amplitude, light enough for 8-bit output
pub const DITHER_SCALE: f32 = 1.0 / 512.0;

/// Inverse full-scale magnitude for 8-bit samples (1/128)
pub const I8_TO_F32_SCALE: f32 = 1.0 / 128.0;

/// Inverse full-scale magnitude for 16-bit samples (1/32768)
pub const I16_TO_F32_SCALE: f32 = 1.0 / 32768.0;

/// Inverse full-scale magnitude for 24-bit samples (1/8388608)
pub const I24_TO_F32_SCALE: f32 = 1.0 / 8388608.0;

/// Inverse full-scale magnitude for 32-bit samples (1/2147483648)
pub const I32_TO_F32_SCALE: f32 = 1.0 / 2147483648.0;

/// Convert an unsigned 8-bit sample (128 offset) to f32
#[inline]
pub fn u8_to_f32(sample: u8) -> f32 {
    (sample as f32 - 128.0) * I8_TO_F32_SCALE
}

/// Convert a signed 16-bit sample to f32
#[inline]
pub fn i16_to_f32(sample: i16) -> f32 {
    sample as f32 * I16_TO_F32_SCALE
}

/// Convert a sign-extended 24-bit sample to f32
#[inline]
pub fn i24_to_f32(sample: i32) -> f32 {
    sample as f32 * I24_TO_F32_SCALE
}

/// Convert a signed 32-bit sample to f32
#[inline]
pub fn i32_to_f32(sample: i32) -> f32 {
    sample as f32 * I32_TO_F32_SCALE
}
