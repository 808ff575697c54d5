pub struct StatsHelper;

impl StatsHelper {
    pub fn rms(samples: &[f64]) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        let sum_sq: f64 = samples.iter().map(|&v| v * v).sum();
        (sum_sq / samples.len() as f64).sqrt()
    }

    /// Largest sample, or negative infinity for an empty sequence.
    /// NaN samples propagate through `f64::max` semantics (ignored unless
    /// every sample is NaN).
    pub fn max(samples: &[f64]) -> f64 {
        samples.iter().fold(f64::NEG_INFINITY, |acc, &v| acc.max(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rms_zero_sequence_yields_zero() {
        assert_eq!(StatsHelper::rms(&[]), 0.0);
        assert_eq!(StatsHelper::rms(&[0.0, 0.0]), 0.0);
    }

    #[test]
    fn rms_handles_single_value() {
        assert_eq!(StatsHelper::rms(&[4.0]), 4.0);
    }

    #[test]
    fn max_of_empty_is_negative_infinity() {
        assert_eq!(StatsHelper::max(&[]), f64::NEG_INFINITY);
    }

    #[test]
    fn max_picks_largest_sample() {
        assert_eq!(StatsHelper::max(&[-1.0, 3.5, 2.0]), 3.5);
    }
}
