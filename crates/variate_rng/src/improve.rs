//! A pooling decorator that shuffles the output order of another source.

use crate::error::InvalidParameter;
use crate::source::UnitRandom;

/// Default shuffle pool size.
pub const DEFAULT_POOL_SIZE: usize = 97;

/// Decorator that breaks up short-range serial correlation of an underlying
/// source by serving draws out of a pre-filled pool in data-dependent order.
///
/// Each draw uses the previously served value to pick the next pool slot,
/// serves that slot and refills it from the underlying source. The marginal
/// distribution of the output stream is unchanged, so draws stay in
/// `[0, 1)`.
///
/// # Examples
/// ```
/// use variate_rng::{LegacyJavaRandom, UnitRandom};
///
/// let mut rng = LegacyJavaRandom::new(7)
///     .improved(variate_rng::DEFAULT_POOL_SIZE)
///     .unwrap();
/// let x = rng.next_unit();
/// assert!((0.0..1.0).contains(&x));
/// ```
#[derive(Debug, Clone)]
pub struct PoolImproved<R> {
    source: R,
    pool: Vec<f64>,
    cursor: usize,
}

impl<R: UnitRandom> PoolImproved<R> {
    /// Wraps a source with a shuffle pool of the given size.
    ///
    /// Filling the pool draws `pool_size` values from the source up front.
    ///
    /// # Arguments
    /// * `source` - The source to decorate
    /// * `pool_size` - Pool size, must be positive
    ///
    /// # Returns
    /// The decorated source, or `InvalidParameter::NotPositive` when
    /// `pool_size` is zero.
    pub fn new(mut source: R, pool_size: usize) -> Result<Self, InvalidParameter> {
        if pool_size == 0 {
            return Err(InvalidParameter::NotPositive {
                name: "pool_size",
                value: 0.0,
            });
        }
        let pool: Vec<f64> = (0..pool_size).map(|_| source.next_unit()).collect();
        Ok(Self {
            source,
            pool,
            cursor: pool_size - 1,
        })
    }

    /// Returns the underlying source, discarding the pool.
    pub fn into_inner(self) -> R {
        self.source
    }
}

impl<R: UnitRandom> UnitRandom for PoolImproved<R> {
    fn next_unit(&mut self) -> f64 {
        let scaled = self.pool.len() as f64 * self.pool[self.cursor];
        self.cursor = (scaled as usize).min(self.pool.len() - 1);
        let drawn = self.pool[self.cursor];
        self.pool[self.cursor] = self.source.next_unit();
        drawn
    }
}
