//! The uniform source abstraction shared by every generator engine.
//!
//! This module provides:
//! - `UnitRandom`: the capability of producing uniform draws in `[0, 1)`
//! - `Draws`: a lazy, endless iterator view over a borrowed source
//! - `clock_seed`: a wall-clock derived seed for non-reproducible streams

use chrono::Utc;

use crate::error::InvalidParameter;
use crate::improve::PoolImproved;

/// A deterministic source of uniform variates on the half-open unit interval.
///
/// Every engine in this crate implements this trait. A source owns its whole
/// state, so two sources built from the same seed produce identical streams
/// and a source is `Send` wherever its state is.
///
/// # Examples
/// ```
/// use variate_rng::{LegacyJavaRandom, UnitRandom};
///
/// let mut rng = LegacyJavaRandom::new(7);
/// let x = rng.next_unit();
/// assert!((0.0..1.0).contains(&x));
/// ```
pub trait UnitRandom {
    /// Advances the state and returns the next draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Returns the next draw scaled to `[0, max)`.
    ///
    /// # Arguments
    /// * `max` - Exclusive upper bound of the scaled draw
    fn next_below(&mut self, max: f64) -> f64 {
        max * self.next_unit()
    }

    /// Returns the next draw shifted and scaled to `[min, max)`.
    ///
    /// # Arguments
    /// * `min` - Inclusive lower bound of the draw
    /// * `max` - Exclusive upper bound of the draw
    fn next_in(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_unit()
    }

    /// Borrows this source as an endless iterator of unit draws.
    ///
    /// The iterator never resets the underlying state; calling `draws`
    /// again continues the stream where the previous view left off.
    ///
    /// # Examples
    /// ```
    /// use variate_rng::{MersenneTwister, UnitRandom};
    ///
    /// let mut rng = MersenneTwister::new(5489);
    /// let head: Vec<f64> = rng.draws().take(3).collect();
    /// assert_eq!(head.len(), 3);
    /// assert!(head.iter().all(|x| (0.0..1.0).contains(x)));
    /// ```
    fn draws(&mut self) -> Draws<'_, Self> {
        Draws { source: self }
    }

    /// Consumes this source and wraps it in a [`PoolImproved`] decorator.
    ///
    /// # Arguments
    /// * `pool_size` - Size of the shuffle pool, must be positive
    ///
    /// # Returns
    /// The decorated source, or `InvalidParameter::NotPositive` when
    /// `pool_size` is zero.
    fn improved(self, pool_size: usize) -> Result<PoolImproved<Self>, InvalidParameter>
    where
        Self: Sized,
    {
        PoolImproved::new(self, pool_size)
    }
}

impl<R: UnitRandom + ?Sized> UnitRandom for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Endless iterator over the draws of a borrowed [`UnitRandom`] source.
///
/// Created by [`UnitRandom::draws`].
#[derive(Debug)]
pub struct Draws<'a, R: UnitRandom + ?Sized> {
    source: &'a mut R,
}

impl<R: UnitRandom + ?Sized> Iterator for Draws<'_, R> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.source.next_unit())
    }
}

/// Derives a seed from the current wall-clock time in milliseconds.
///
/// Reproducibility is deliberately given up; use an explicit seed when
/// the stream must be replayed.
pub fn clock_seed() -> u64 {
    Utc::now().timestamp_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lcg::LegacyJavaRandom;

    #[test]
    fn test_next_below_scales_range() {
        let mut rng = LegacyJavaRandom::new(7);
        for _ in 0..1000 {
            let x = rng.next_below(7.0);
            assert!((0.0..7.0).contains(&x));
        }
    }

    #[test]
    fn test_next_in_shifts_range() {
        let mut rng = LegacyJavaRandom::new(7);
        for _ in 0..1000 {
            let x = rng.next_in(3.0, 7.0);
            assert!((3.0..7.0).contains(&x));
        }
    }

    #[test]
    fn test_draws_continues_the_stream() {
        let mut a = LegacyJavaRandom::new(42);
        let mut b = LegacyJavaRandom::new(42);

        let first: Vec<f64> = a.draws().take(5).collect();
        let second: Vec<f64> = a.draws().take(5).collect();
        let whole: Vec<f64> = b.draws().take(10).collect();

        assert_eq!(first, whole[..5]);
        assert_eq!(second, whole[5..]);
    }

    #[test]
    fn test_borrowed_source_implements_unit_random() {
        fn head<R: UnitRandom>(mut rng: R) -> f64 {
            rng.next_unit()
        }

        let mut rng = LegacyJavaRandom::new(11);
        let expected = LegacyJavaRandom::new(11).next_unit();
        assert_eq!(head(&mut rng), expected);
    }

    #[test]
    fn test_clock_seed_is_recent() {
        // Milliseconds since the epoch, well past 2020-01-01.
        assert!(clock_seed() > 1_577_836_800_000);
    }
}
