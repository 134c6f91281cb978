//! Log-gamma and regularized incomplete gamma functions.
//!
//! These support the normal cumulative distribution; they are generic over
//! the float width so the same code serves `f64` and `f32`.

use num_traits::Float;

/// Iteration cap shared by the series and continued fraction expansions.
///
/// Hitting the cap signals non-convergence by returning NaN; callers must
/// treat NaN as failure, never as a probability.
pub const MAX_ITERATIONS: usize = 1000;

/// Natural logarithm of the gamma function for positive arguments.
///
/// Uses the Stirling asymptotic series with Bernoulli number coefficients
/// after shifting the argument above 8 through the recurrence
/// `ln Γ(x) = ln Γ(x + 1) - ln x`.
///
/// # Arguments
/// * `x` - Evaluation point, must be positive
///
/// # Examples
/// ```
/// use variate_dist::gamma::ln_gamma;
///
/// // Γ(5) = 24
/// let v: f64 = ln_gamma(5.0);
/// assert!((v - 24.0_f64.ln()).abs() < 1e-12);
/// ```
pub fn ln_gamma<T: Float>(x: T) -> T {
    let b2 = T::from(1.0 / 6.0).unwrap();
    let b4 = T::from(-1.0 / 30.0).unwrap();
    let b6 = T::from(1.0 / 42.0).unwrap();
    let b8 = T::from(-1.0 / 30.0).unwrap();
    let b10 = T::from(5.0 / 66.0).unwrap();
    let b12 = T::from(-691.0 / 2730.0).unwrap();
    let b14 = T::from(7.0 / 6.0).unwrap();
    let b16 = T::from(-3617.0 / 510.0).unwrap();

    let half = T::from(0.5).unwrap();
    let eight = T::from(8.0).unwrap();
    let ln_two_pi = T::from(std::f64::consts::TAU).unwrap().ln();

    let mut v = T::one();
    let mut t = x;
    while t < eight {
        v = v * t;
        t = t + T::one();
    }

    let coeff = |b: T, k: f64| b / T::from(k * (k - 1.0)).unwrap();
    let w = T::one() / (t * t);
    let series = (((((((coeff(b16, 16.0) * w + coeff(b14, 14.0)) * w + coeff(b12, 12.0)) * w
        + coeff(b10, 10.0))
        * w
        + coeff(b8, 8.0))
        * w
        + coeff(b6, 6.0))
        * w
        + coeff(b4, 4.0))
        * w
        + coeff(b2, 2.0))
        / t;

    series + half * ln_two_pi - v.ln() - t + (t - half) * t.ln()
}

/// The regularized lower incomplete gamma function `P(a, x)`.
///
/// Evaluates the power series for `x < 1 + a` and the complement of the
/// continued fraction otherwise. Returns NaN when the expansion fails to
/// converge within [`MAX_ITERATIONS`].
///
/// # Arguments
/// * `a` - Shape parameter, must be positive
/// * `x` - Evaluation point, must be non-negative
/// * `ln_gamma_a` - Precomputed `ln Γ(a)`
pub fn lower_regularized<T: Float>(a: T, x: T, ln_gamma_a: T) -> T {
    if x >= T::one() + a {
        return T::one() - upper_regularized(a, x, ln_gamma_a);
    }
    if x == T::zero() {
        return T::zero();
    }

    let mut term = (a * x.ln() - x - ln_gamma_a).exp() / a;
    let mut sum = term;
    for k in 1..MAX_ITERATIONS {
        term = term * (x / (a + T::from(k).unwrap()));
        let prev = sum;
        sum = sum + term;
        if sum == prev {
            return sum;
        }
    }
    T::nan()
}

/// The regularized upper incomplete gamma function `Q(a, x) = 1 - P(a, x)`.
///
/// Evaluates the Legendre continued fraction for `x >= 1 + a` and the
/// complement of the power series otherwise. Returns NaN when the expansion
/// fails to converge within [`MAX_ITERATIONS`].
///
/// # Arguments
/// * `a` - Shape parameter, must be positive
/// * `x` - Evaluation point, must be non-negative
/// * `ln_gamma_a` - Precomputed `ln Γ(a)`
pub fn upper_regularized<T: Float>(a: T, x: T, ln_gamma_a: T) -> T {
    if x < T::one() + a {
        return T::one() - lower_regularized(a, x, ln_gamma_a);
    }

    let mut w = (a * x.ln() - x - ln_gamma_a).exp();
    let mut la = T::one();
    let mut lb = T::one() + x - a;
    let mut sum = w / lb;
    for k in 2..MAX_ITERATIONS {
        let kf = T::from(k).unwrap();
        let next = ((kf - T::one() - a) * (lb - la) + (kf + x) * lb) / kf;
        la = lb;
        lb = next;
        w = w * ((kf - T::one() - a) / kf);
        let prev = sum;
        sum = sum + w / (la * lb);
        if sum == prev {
            return sum;
        }
    }
    T::nan()
}
