use crate::core::{NORMALIZE_PEAK, SILENCE_THRESHOLD};

/// Scale samples so the peak magnitude reaches 99% of full scale.
///
/// Silence (peak below [`SILENCE_THRESHOLD`]) is returned unchanged to
/// avoid the division blow-up. The final clamp to [-1, 1] is a safety net
/// and does not trigger after a correct scale.
pub fn normalize(samples: &[f32]) -> Vec<f32> {
    let peak = samples.iter().fold(0.0f32, |p, &x| p.max(x.abs()));
    if peak < SILENCE_THRESHOLD {
        return samples.to_vec();
    }
    let gain = NORMALIZE_PEAK / peak;
    samples
        .iter()
        .map(|&x| (x * gain).clamp(-1.0, 1.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_reaches_target() {
        let out = normalize(&[0.25, -0.5, 0.1]);
        assert!((out[1] + 0.99).abs() < 1e-6);
    }

    #[test]
    fn test_silence_unchanged() {
        let input = vec![0.0f32; 16];
        assert_eq!(normalize(&input), input);
    }

    #[test]
    fn test_idempotent_on_normalized() {
        let once = normalize(&[0.3, -0.7, 0.2]);
        let twice = normalize(&once);
        for (a, b) in once.iter().zip(twice.iter()) {
            assert!((a - b).abs() < 1e-6);
        }
    }
}
