//! Statistical acceptance testing for unit uniform sources.

use crate::error::InvalidParameter;
use crate::source::UnitRandom;

/// Acceptance test for sources claiming uniformity on `[0, 1)`.
///
/// Runs a number of independent trials; each trial draws `n` values,
/// centres them around zero and computes two normalised statistics:
///
/// - the sample mean statistic `s1 * sqrt(12 / n)`
/// - the lag-1 serial correlation statistic
///   `((n - 1) * cc + 1) * sqrt((n + 1) / (n * (n - 3)))`, where `cc` is the
///   circular autocorrelation coefficient closing the last draw against the
///   first
///
/// Under the uniformity hypothesis both statistics are approximately
/// standard normal, so a trial passes a statistic when its absolute value
/// stays within the threshold. The source is accepted when enough trials
/// pass for each statistic separately. Individual trials are expected to
/// fail occasionally; the pass quorum absorbs that.
///
/// # Examples
/// ```
/// use variate_rng::{LegacyJavaRandom, UniformityTester};
///
/// let tester = UniformityTester::default();
/// let mut rng = LegacyJavaRandom::new(7);
/// assert!(tester.test_source(&mut rng, 10000));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UniformityTester {
    trials: usize,
    required_passes: usize,
    threshold: f64,
}

impl Default for UniformityTester {
    /// 18 of 20 trials must pass each statistic within two standard
    /// deviations.
    fn default() -> Self {
        Self {
            trials: 20,
            required_passes: 18,
            threshold: 2.0,
        }
    }
}

impl UniformityTester {
    /// Creates a tester with a custom trial count, pass quorum and
    /// acceptance threshold.
    ///
    /// # Arguments
    /// * `trials` - Number of independent trials, must be positive
    /// * `required_passes` - Pass quorum per statistic, at most `trials`
    /// * `threshold` - Acceptance band for each statistic, must be positive
    pub fn new(
        trials: usize,
        required_passes: usize,
        threshold: f64,
    ) -> Result<Self, InvalidParameter> {
        if trials == 0 {
            return Err(InvalidParameter::NotPositive {
                name: "trials",
                value: 0.0,
            });
        }
        if required_passes > trials {
            return Err(InvalidParameter::OutOfRange {
                name: "required_passes",
                value: required_passes as f64,
                min: 0.0,
                max: trials as f64,
            });
        }
        if threshold <= 0.0 {
            return Err(InvalidParameter::NotPositive {
                name: "threshold",
                value: threshold,
            });
        }
        Ok(Self {
            trials,
            required_passes,
            threshold,
        })
    }

    /// Tests a stream of draws, consuming `n` values per trial.
    ///
    /// # Arguments
    /// * `draws` - The stream under test
    /// * `n` - Draws per trial
    ///
    /// # Returns
    /// `true` when the pass quorum is met for both statistics. A stream
    /// that runs dry fails the test.
    pub fn test<I: Iterator<Item = f64>>(&self, mut draws: I, n: usize) -> bool {
        let mut mean_passes = 0;
        let mut corr_passes = 0;
        for _ in 0..self.trials {
            let Some((mean_stat, corr_stat)) = trial(&mut draws, n) else {
                return false;
            };
            if mean_stat.abs() <= self.threshold {
                mean_passes += 1;
            }
            if corr_stat.abs() <= self.threshold {
                corr_passes += 1;
            }
        }
        mean_passes >= self.required_passes && corr_passes >= self.required_passes
    }

    /// Tests a [`UnitRandom`] source in place.
    ///
    /// # Arguments
    /// * `source` - The source under test
    /// * `n` - Draws per trial
    pub fn test_source<R: UnitRandom + ?Sized>(&self, source: &mut R, n: usize) -> bool {
        self.test(source.draws(), n)
    }
}

/// Runs one trial, returning the mean and serial correlation statistics,
/// or `None` when the stream runs dry.
fn trial<I: Iterator<Item = f64>>(draws: &mut I, n: usize) -> Option<(f64, f64)> {
    let nf = n as f64;
    let mut s1 = 0.0;
    let mut s2 = 0.0;
    let mut r = 0.0;
    let mut first = 0.0;
    let mut prev = 0.0;

    for i in 0..n {
        let x = draws.next()? - 0.5;
        s1 += x;
        s2 += x * x;
        if i == 0 {
            first = x;
        } else {
            r += prev * x;
        }
        prev = x;
    }
    r += prev * first;

    let mean_stat = s1 * (12.0 / nf).sqrt();
    let cc = (nf * r - s1 * s1) / (nf * s2 - s1 * s1);
    let corr_stat = ((nf - 1.0) * cc + 1.0) * ((nf + 1.0) / (nf * (nf - 3.0))).sqrt();
    Some((mean_stat, corr_stat))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lcg::LegacyJavaRandom;

    #[test]
    fn test_rejects_zero_trials() {
        assert!(UniformityTester::new(0, 0, 2.0).is_err());
    }

    #[test]
    fn test_rejects_quorum_above_trial_count() {
        assert!(UniformityTester::new(20, 21, 2.0).is_err());
    }

    #[test]
    fn test_rejects_non_positive_threshold() {
        assert!(UniformityTester::new(20, 18, 0.0).is_err());
        assert!(UniformityTester::new(20, 18, -1.0).is_err());
    }

    #[test]
    fn test_constant_stream_fails() {
        // Zero variance makes the correlation statistic undefined.
        let tester = UniformityTester::default();
        assert!(!tester.test(std::iter::repeat(0.5), 1000));
    }

    #[test]
    fn test_exhausted_stream_fails() {
        let tester = UniformityTester::default();
        let mut rng = LegacyJavaRandom::new(7);
        let short: Vec<f64> = rng.draws().take(500).collect();
        assert!(!tester.test(short.into_iter(), 1000));
    }

    #[test]
    fn test_alternating_stream_fails_serial_correlation() {
        // Perfectly anti-correlated draws have cc near -1, far outside the
        // acceptance band.
        let tester = UniformityTester::default();
        let stream = [0.25, 0.75].iter().copied().cycle();
        assert!(!tester.test(stream, 1000));
    }

    #[test]
    fn test_accepts_a_seeded_generator() {
        let tester = UniformityTester::default();
        let mut rng = LegacyJavaRandom::new(7);
        assert!(tester.test_source(&mut rng, 10000));
    }
}
