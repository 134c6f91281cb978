//! Drawing variates from a distribution through a borrowed uniform source.

use variate_rng::UnitRandom;

/// A stateful variate drawer for one distribution.
///
/// A sampler owns only its cross-call state (for example the cached second
/// half of a Box-Muller pair); the uniform source is borrowed per call, so
/// one source can feed several samplers sequentially.
pub trait Sampler {
    /// Draws the next variate, consuming as many unit draws from `source`
    /// as the transform needs.
    fn sample<R: UnitRandom + ?Sized>(&mut self, source: &mut R) -> f64;

    /// Borrows this sampler and a source as an endless iterator of
    /// variates.
    ///
    /// # Examples
    /// ```
    /// use variate_dist::{Distribution, Exponential, Sampler};
    /// use variate_rng::MersenneTwister;
    ///
    /// let dist = Exponential::new(3.0).unwrap();
    /// let mut sampler = dist.sampler();
    /// let mut rng = MersenneTwister::new(5489);
    /// let head: Vec<f64> = sampler.draws(&mut rng).take(3).collect();
    /// assert!(head.iter().all(|x| *x >= 0.0));
    /// ```
    fn draws<'a, R: UnitRandom + ?Sized>(&'a mut self, source: &'a mut R) -> Samples<'a, Self, R>
    where
        Self: Sized,
    {
        Samples {
            sampler: self,
            source,
        }
    }
}

/// Endless iterator over the variates of a borrowed sampler and source.
///
/// Created by [`Sampler::draws`].
#[derive(Debug)]
pub struct Samples<'a, S: Sampler, R: UnitRandom + ?Sized> {
    sampler: &'a mut S,
    source: &'a mut R,
}

impl<S: Sampler, R: UnitRandom + ?Sized> Iterator for Samples<'_, S, R> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.sampler.sample(self.source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::Distribution;
    use crate::uniform::Uniform;
    use variate_rng::LegacyJavaRandom;

    #[test]
    fn test_draws_continues_the_sampler_stream() {
        let dist = Uniform::bounded(3.0, 7.0).unwrap();
        let mut sampler = dist.sampler();
        let mut rng = LegacyJavaRandom::new(42);

        let first: Vec<f64> = sampler.draws(&mut rng).take(5).collect();
        let second: Vec<f64> = sampler.draws(&mut rng).take(5).collect();

        let mut reference = LegacyJavaRandom::new(42);
        let mut ref_sampler = dist.sampler();
        let whole: Vec<f64> = ref_sampler.draws(&mut reference).take(10).collect();

        assert_eq!(first, whole[..5]);
        assert_eq!(second, whole[5..]);
    }

    #[test]
    fn test_one_source_feeds_two_samplers() {
        let narrow = Uniform::bounded(0.0, 1.0).unwrap();
        let wide = Uniform::bounded(0.0, 10.0).unwrap();
        let mut a = narrow.sampler();
        let mut b = wide.sampler();
        let mut rng = LegacyJavaRandom::new(7);

        for _ in 0..100 {
            let x = a.sample(&mut rng);
            let y = b.sample(&mut rng);
            assert!((0.0..1.0).contains(&x));
            assert!((0.0..10.0).contains(&y));
        }
    }
}
