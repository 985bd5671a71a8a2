use rand::Rng;

/// Add triangular-PDF noise ahead of quantization.
///
/// Each output sample is `x + (u1 - 0.5 + u2 - 0.5) * scale` with two
/// independent uniform draws per sample, decorrelating quantization error
/// from the signal. Randomness is injected so callers control seeding;
/// see [`crate::rng::create_rng`].
pub fn tpdf_dither<R: Rng>(samples: &[f32], scale: f32, rng: &mut R) -> Vec<f32> {
    samples
        .iter()
        .map(|&x| {
            let noise = (rng.gen::<f32>() - 0.5) + (rng.gen::<f32>() - 0.5);
            x + noise * scale
        })
        .collect()
}
