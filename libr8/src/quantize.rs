//! float to unsigned 8-bit quantization

/// Quantize one sample: clamp to [-1, 1], map to [0, 255].
///
/// Rounding is half-away-from-zero (`f32::round`), so `quantize(0.0)` is
/// 128, the same mid-scale value the DPCM accumulator starts from. The
/// final clamp absorbs rounding at the extremes.
#[inline]
pub fn quantize(sample: f32) -> u8 {
    let x = sample.clamp(-1.0, 1.0);
    ((x * 0.5 + 0.5) * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Quantize a sample sequence to the target 8-bit waveform.
pub fn quantize_u8(samples: &[f32]) -> Vec<u8> {
    samples.iter().map(|&x| quantize(x)).collect()
}
