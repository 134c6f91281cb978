//! The triangular family.

use variate_rng::{InvalidParameter, UnitRandom};

use crate::distribution::{Distribution, ModeBound};
use crate::sampler::Sampler;

/// A triangular distribution with support `[min, max]` and peak `mode`.
///
/// Three shapes form a closed set: the standard shape on `[-1, 1]` peaking
/// at zero, a symmetric shape peaking at the midpoint of its support, and a
/// scalene shape with an arbitrary interior peak. [`Triangular::new`]
/// normalises a midpoint peak into the symmetric shape so the cheaper
/// difference sampler is used whenever it applies.
///
/// # Examples
/// ```
/// use variate_dist::{Distribution, Triangular};
///
/// let dist = Triangular::new(-1.0, 2.0, 1.0).unwrap();
/// assert!((dist.mean() - 2.0 / 3.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Triangular {
    /// Support `[-1, 1]`, peak at zero.
    Standard,
    /// Symmetric about the midpoint of `[min, max]`.
    Symmetric {
        /// Lower bound of the support.
        min: f64,
        /// Upper bound of the support, greater than `min`.
        max: f64,
    },
    /// General shape with an off-centre peak.
    Scalene {
        /// Lower bound of the support.
        min: f64,
        /// Upper bound of the support, greater than `min`.
        max: f64,
        /// Location of the peak, strictly between `min` and `max`.
        mode: f64,
    },
}

impl Triangular {
    /// The standard shape on `[-1, 1]` peaking at zero.
    pub fn standard() -> Self {
        Self::Standard
    }

    /// A symmetric shape on `[min, max]` peaking at the midpoint.
    ///
    /// # Arguments
    /// * `min` - Lower bound
    /// * `max` - Upper bound, must exceed `min`
    pub fn symmetric(min: f64, max: f64) -> Result<Self, InvalidParameter> {
        check_interval(min, max)?;
        Ok(Self::Symmetric { min, max })
    }

    /// A general shape on `[min, max]` peaking at `mode`.
    ///
    /// A peak exactly at the midpoint yields the symmetric shape.
    ///
    /// # Arguments
    /// * `min` - Lower bound
    /// * `max` - Upper bound, must exceed `min`
    /// * `mode` - Peak location, must lie strictly between `min` and `max`
    pub fn new(min: f64, max: f64, mode: f64) -> Result<Self, InvalidParameter> {
        check_interval(min, max)?;
        if min + max == 2.0 * mode {
            return Ok(Self::Symmetric { min, max });
        }
        if !(min < mode && mode < max) {
            return Err(InvalidParameter::InvalidOrdering(format!(
                "mode {} must lie strictly between min {} and max {}",
                mode, min, max
            )));
        }
        Ok(Self::Scalene { min, max, mode })
    }

    /// The `(min, max, mode)` parameters of any shape.
    fn params(&self) -> (f64, f64, f64) {
        match *self {
            Self::Standard => (-1.0, 1.0, 0.0),
            Self::Symmetric { min, max } => (min, max, (min + max) / 2.0),
            Self::Scalene { min, max, mode } => (min, max, mode),
        }
    }
}

fn check_interval(min: f64, max: f64) -> Result<(), InvalidParameter> {
    if min >= max {
        return Err(InvalidParameter::InvalidOrdering(format!(
            "min {} must be less than max {}",
            min, max
        )));
    }
    Ok(())
}

impl Distribution for Triangular {
    type Sampler = TriangularSampler;

    fn min(&self) -> f64 {
        self.params().0
    }

    fn max(&self) -> f64 {
        self.params().1
    }

    fn mean(&self) -> f64 {
        let (a, b, c) = self.params();
        (a + b + c) / 3.0
    }

    fn variance(&self) -> f64 {
        let (a, b, c) = self.params();
        (a * a + b * b + c * c - a * b - b * c - c * a) / 18.0
    }

    fn median(&self) -> f64 {
        let (a, b, c) = self.params();
        if c >= (a + b) / 2.0 {
            a + ((b - a) * (c - a) / 2.0).sqrt()
        } else {
            b - ((b - a) * (b - c) / 2.0).sqrt()
        }
    }

    fn mode(&self, _bound: ModeBound) -> f64 {
        self.params().2
    }

    fn pdf(&self, x: f64) -> f64 {
        let (a, b, c) = self.params();
        if x < a || x > b {
            0.0
        } else if x == c {
            2.0 / (b - a)
        } else if x < c {
            2.0 * (x - a) / ((b - a) * (c - a))
        } else {
            2.0 * (b - x) / ((b - a) * (b - c))
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        let (a, b, c) = self.params();
        if x <= a {
            0.0
        } else if x >= b {
            1.0
        } else if x < c {
            (x - a) * (x - a) / ((b - a) * (c - a))
        } else {
            1.0 - (b - x) * (b - x) / ((b - a) * (b - c))
        }
    }

    fn sampler(&self) -> TriangularSampler {
        let kind = match *self {
            Self::Standard => SamplerKind::Difference {
                min: -1.0,
                half_width: 1.0,
            },
            Self::Symmetric { min, max } => SamplerKind::Difference {
                min,
                half_width: (max - min) / 2.0,
            },
            Self::Scalene { min, max, mode } => SamplerKind::InverseCdf {
                a: min,
                b: max,
                peak_quantile: (mode - min) / (max - min),
                width: max - min,
                rise: mode - min,
            },
        };
        TriangularSampler { kind }
    }
}

/// Sampler for the triangular family.
///
/// Symmetric shapes use the difference of two unit draws, which has the
/// right density without any transcendental calls; scalene shapes invert
/// the piecewise quadratic cumulative function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangularSampler {
    kind: SamplerKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum SamplerKind {
    Difference {
        min: f64,
        half_width: f64,
    },
    InverseCdf {
        a: f64,
        b: f64,
        peak_quantile: f64,
        width: f64,
        rise: f64,
    },
}

impl Sampler for TriangularSampler {
    fn sample<R: UnitRandom + ?Sized>(&mut self, source: &mut R) -> f64 {
        match self.kind {
            SamplerKind::Difference { min, half_width } => {
                let u1 = source.next_unit();
                let u2 = source.next_unit();
                (u1 - u2 + 1.0) * half_width + min
            }
            SamplerKind::InverseCdf {
                a,
                b,
                peak_quantile,
                width,
                rise,
            } => {
                let r = source.next_unit();
                if r < peak_quantile {
                    a + (r * width * rise).sqrt()
                } else {
                    b - ((1.0 - r) * width * (width - rise)).sqrt()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use variate_rng::LegacyJavaRandom;

    #[test]
    fn test_symmetric_rejects_bad_intervals() {
        assert!(Triangular::symmetric(1.0, 1.0).is_err());
        assert!(Triangular::symmetric(2.0, 1.0).is_err());
    }

    #[test]
    fn test_new_rejects_peak_outside_support() {
        assert!(Triangular::new(1.0, 2.0, 0.0).is_err());
        assert!(Triangular::new(1.0, 2.0, 3.0).is_err());
    }

    #[test]
    fn test_new_normalises_midpoint_peak() {
        let dist = Triangular::new(1.0, 3.0, 2.0).unwrap();
        assert_eq!(dist, Triangular::Symmetric { min: 1.0, max: 3.0 });
    }

    #[test]
    fn test_new_rejects_boundary_peaks() {
        assert!(Triangular::new(0.0, 2.0, 0.0).is_err());
        assert!(Triangular::new(0.0, 2.0, 2.0).is_err());
    }

    #[test]
    fn test_standard_statistics() {
        let dist = Triangular::standard();
        assert_eq!(dist.range(), (-1.0, 1.0));
        assert_eq!(dist.mean(), 0.0);
        assert_relative_eq!(dist.variance(), 1.0 / 6.0, epsilon = 1e-15);
        assert_eq!(dist.median(), 0.0);
        assert_eq!(dist.mode(ModeBound::Lower), 0.0);
        assert_eq!(dist.mode(ModeBound::Upper), 0.0);
    }

    #[test]
    fn test_symmetric_statistics() {
        let dist = Triangular::symmetric(1.0, 4.0).unwrap();
        assert_relative_eq!(dist.mean(), 2.5, epsilon = 1e-15);
        assert_relative_eq!(dist.variance(), 9.0 / 24.0, epsilon = 1e-15);
        assert_relative_eq!(dist.median(), 2.5, epsilon = 1e-12);
        assert_eq!(dist.mode(ModeBound::Lower), 2.5);
    }

    #[test]
    fn test_scalene_statistics() {
        let dist = Triangular::new(-1.0, 2.0, 1.0).unwrap();
        assert_relative_eq!(dist.mean(), 2.0 / 3.0, epsilon = 1e-12);
        // (a² + b² + c² - ab - bc - ca) / 18 with a = -1, b = 2, c = 1
        assert_relative_eq!(dist.variance(), 7.0 / 18.0, epsilon = 1e-12);
        assert_eq!(dist.mode(ModeBound::Lower), 1.0);
        assert_eq!(dist.mode(ModeBound::Upper), 1.0);
    }

    #[test]
    fn test_scalene_median_left_and_right_of_midpoint() {
        // Peak right of the midpoint: median on the rising side.
        let right = Triangular::new(0.0, 4.0, 3.0).unwrap();
        assert_relative_eq!(right.median(), (4.0 * 3.0 / 2.0_f64).sqrt(), epsilon = 1e-12);

        // Peak left of the midpoint: median on the falling side.
        let left = Triangular::new(0.0, 4.0, 1.0).unwrap();
        assert_relative_eq!(
            left.median(),
            4.0 - (4.0 * 3.0 / 2.0_f64).sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_pdf_peak_and_boundaries() {
        let dist = Triangular::new(-1.0, 2.0, 1.0).unwrap();
        assert_eq!(dist.pdf(-1.5), 0.0);
        assert_eq!(dist.pdf(-1.0), 0.0);
        assert_relative_eq!(dist.pdf(1.0), 2.0 / 3.0, epsilon = 1e-15);
        assert_eq!(dist.pdf(2.0), 0.0);
        assert_eq!(dist.pdf(2.5), 0.0);
    }

    #[test]
    fn test_pdf_linear_on_both_edges() {
        let dist = Triangular::new(0.0, 3.0, 1.0).unwrap();
        // Rising edge: 2(x - a) / ((b - a)(c - a))
        assert_relative_eq!(dist.pdf(0.5), 2.0 * 0.5 / 3.0, epsilon = 1e-15);
        // Falling edge: 2(b - x) / ((b - a)(b - c))
        assert_relative_eq!(dist.pdf(2.0), 2.0 / 6.0, epsilon = 1e-15);
    }

    #[test]
    fn test_cdf_quadratic_pieces_and_clamping() {
        let dist = Triangular::new(0.0, 3.0, 1.0).unwrap();
        assert_eq!(dist.cdf(-1.0), 0.0);
        assert_eq!(dist.cdf(0.0), 0.0);
        assert_relative_eq!(dist.cdf(0.5), 0.25 / 3.0, epsilon = 1e-15);
        // At the peak both pieces meet at (c - a) / (b - a).
        assert_relative_eq!(dist.cdf(1.0), 1.0 / 3.0, epsilon = 1e-15);
        assert_relative_eq!(dist.cdf(2.0), 1.0 - 1.0 / 6.0, epsilon = 1e-15);
        assert_eq!(dist.cdf(3.0), 1.0);
        assert_eq!(dist.cdf(4.0), 1.0);
    }

    #[test]
    fn test_cdf_at_symmetric_midpoint_is_one_half() {
        let dist = Triangular::symmetric(1.0, 4.0).unwrap();
        assert_relative_eq!(dist.cdf(2.5), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_difference_sampler_stays_inside_support() {
        let dist = Triangular::symmetric(1.0, 4.0).unwrap();
        let mut sampler = dist.sampler();
        let mut rng = LegacyJavaRandom::new(7);
        for _ in 0..10000 {
            let x = sampler.sample(&mut rng);
            assert!((1.0..=4.0).contains(&x));
        }
    }

    #[test]
    fn test_inverse_cdf_sampler_stays_inside_support() {
        let dist = Triangular::new(-1.0, 2.0, 1.0).unwrap();
        let mut sampler = dist.sampler();
        let mut rng = LegacyJavaRandom::new(7);
        for _ in 0..10000 {
            let x = sampler.sample(&mut rng);
            assert!((-1.0..=2.0).contains(&x));
        }
    }

    #[test]
    fn test_inverse_cdf_sampler_inverts_the_cdf() {
        // Pushing a draw back through the cdf must recover the unit draw.
        let dist = Triangular::new(-1.0, 2.0, 1.0).unwrap();
        let mut sampler = dist.sampler();
        let mut rng = LegacyJavaRandom::new(42);
        let mut reference = LegacyJavaRandom::new(42);
        for _ in 0..1000 {
            let x = sampler.sample(&mut rng);
            let u = reference.next_unit();
            assert_relative_eq!(dist.cdf(x), u, epsilon = 1e-9);
        }
    }
}
