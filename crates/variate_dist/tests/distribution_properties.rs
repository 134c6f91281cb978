//! Property tests for the distribution contracts.

use proptest::prelude::*;

use variate_dist::{Distribution, Exponential, Normal, Triangular, Uniform};

fn assert_cdf_properties<D: Distribution>(dist: &D, xs: &[f64]) {
    let mut prev = None;
    for &x in xs {
        let p = dist.pdf(x);
        let c = dist.cdf(x);
        assert!(p >= 0.0, "pdf({}) = {}", x, p);
        assert!((0.0..=1.0).contains(&c), "cdf({}) = {}", x, c);
        assert!((dist.ccdf(x) - (1.0 - c)).abs() < 1e-15);
        if let Some(prev) = prev {
            assert!(c >= prev, "cdf not monotone at {}", x);
        }
        prev = Some(c);
    }
}

fn grid(lo: f64, hi: f64) -> Vec<f64> {
    (0..=200).map(|i| lo + (hi - lo) * i as f64 / 200.0).collect()
}

proptest! {
    #[test]
    fn uniform_cdf_properties(min in -100.0..100.0f64, width in 0.001..100.0f64) {
        let dist = Uniform::bounded(min, min + width).unwrap();
        assert_cdf_properties(&dist, &grid(min - width, min + 2.0 * width));
    }

    #[test]
    fn triangular_cdf_properties(
        min in -50.0..50.0f64,
        width in 0.01..50.0f64,
        peak in 0.001..0.999f64,
    ) {
        let dist = Triangular::new(min, min + width, min + peak * width).unwrap();
        assert_cdf_properties(&dist, &grid(min - width, min + 2.0 * width));
    }

    #[test]
    fn exponential_cdf_properties(lambda in 0.01..50.0f64) {
        let dist = Exponential::new(lambda).unwrap();
        assert_cdf_properties(&dist, &grid(-1.0, 10.0 / lambda));
    }

    #[test]
    fn normal_cdf_properties(mu in -50.0..50.0f64, sigma2 in 0.01..100.0f64) {
        let dist = Normal::new(mu, sigma2).unwrap();
        let sigma = sigma2.sqrt();
        assert_cdf_properties(&dist, &grid(mu - 5.0 * sigma, mu + 5.0 * sigma));
    }

    #[test]
    fn triangular_median_splits_the_mass(
        min in -50.0..50.0f64,
        width in 0.01..50.0f64,
        peak in 0.001..0.999f64,
    ) {
        let dist = Triangular::new(min, min + width, min + peak * width).unwrap();
        prop_assert!((dist.cdf(dist.median()) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn exponential_median_splits_the_mass(lambda in 0.01..50.0f64) {
        let dist = Exponential::new(lambda).unwrap();
        prop_assert!((dist.cdf(dist.median()) - 0.5).abs() < 1e-12);
    }
}
