//! The continuous uniform family.

use variate_rng::{InvalidParameter, UnitRandom};

use crate::distribution::{Distribution, ModeBound};
use crate::sampler::Sampler;

/// A continuous uniform distribution over a closed interval.
///
/// The three shapes form a closed set: the unit interval, an interval
/// magnified from zero, and a fully general interval. Every shape is just an
/// affine image of the unit shape; the shapes exist so the common cases
/// carry their intent in the type.
///
/// # Examples
/// ```
/// use variate_dist::{Distribution, Uniform};
///
/// let dist = Uniform::bounded(17.0, 43.0).unwrap();
/// assert_eq!(dist.mean(), 30.0);
/// assert_eq!(dist.pdf(17.0), 1.0 / 26.0);
/// assert_eq!(dist.pdf(16.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Uniform {
    /// The unit interval `[0, 1]`.
    Unit,
    /// The interval `[0, max]`.
    Scaled {
        /// Upper bound of the support, positive.
        max: f64,
    },
    /// The interval `[min, max]`.
    Bounded {
        /// Lower bound of the support.
        min: f64,
        /// Upper bound of the support, greater than `min`.
        max: f64,
    },
}

impl Uniform {
    /// The uniform distribution on `[0, 1]`.
    pub fn unit() -> Self {
        Self::Unit
    }

    /// The uniform distribution on `[0, max]`.
    ///
    /// # Arguments
    /// * `max` - Upper bound, must be positive
    pub fn scaled(max: f64) -> Result<Self, InvalidParameter> {
        if max <= 0.0 {
            return Err(InvalidParameter::NotPositive { name: "max", value: max });
        }
        Ok(Self::Scaled { max })
    }

    /// The uniform distribution on `[min, max]`.
    ///
    /// # Arguments
    /// * `min` - Lower bound
    /// * `max` - Upper bound, must exceed `min`
    pub fn bounded(min: f64, max: f64) -> Result<Self, InvalidParameter> {
        if min >= max {
            return Err(InvalidParameter::InvalidOrdering(format!(
                "min {} must be less than max {}",
                min, max
            )));
        }
        Ok(Self::Bounded { min, max })
    }

    fn width(&self) -> f64 {
        self.max() - self.min()
    }
}

impl Distribution for Uniform {
    type Sampler = UniformSampler;

    fn min(&self) -> f64 {
        match self {
            Self::Unit | Self::Scaled { .. } => 0.0,
            Self::Bounded { min, .. } => *min,
        }
    }

    fn max(&self) -> f64 {
        match self {
            Self::Unit => 1.0,
            Self::Scaled { max } | Self::Bounded { max, .. } => *max,
        }
    }

    fn mean(&self) -> f64 {
        (self.min() + self.max()) / 2.0
    }

    fn variance(&self) -> f64 {
        let w = self.width();
        w * w / 12.0
    }

    fn median(&self) -> f64 {
        self.mean()
    }

    /// Every point of the support is modal, so the support bounds are
    /// reported.
    fn mode(&self, bound: ModeBound) -> f64 {
        match bound {
            ModeBound::Lower => self.min(),
            ModeBound::Upper => self.max(),
        }
    }

    fn pdf(&self, x: f64) -> f64 {
        if x < self.min() || x > self.max() {
            0.0
        } else {
            1.0 / self.width()
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        ((x - self.min()) / self.width()).clamp(0.0, 1.0)
    }

    fn sampler(&self) -> UniformSampler {
        UniformSampler {
            offset: self.min(),
            scale: self.width(),
        }
    }
}

/// Affine inverse transform sampler for the uniform family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformSampler {
    offset: f64,
    scale: f64,
}

impl Sampler for UniformSampler {
    fn sample<R: UnitRandom + ?Sized>(&mut self, source: &mut R) -> f64 {
        self.offset + self.scale * source.next_unit()
    }
}
