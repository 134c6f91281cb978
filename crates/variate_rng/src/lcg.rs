//! Linear congruential engines.
//!
//! This module provides:
//! - `Lcg`: a general power-of-two-modulus linear congruential generator
//! - `LegacyJavaRandom`: the classic 48-bit `java.util.Random` recurrence

use crate::error::InvalidParameter;
use crate::source::{clock_seed, UnitRandom};

/// Largest integer exactly representable in an `f64`, `2^53 - 1`.
const MAX_EXACT_F64: f64 = 9007199254740991.0;

/// A linear congruential generator with a power-of-two modulus.
///
/// The state advances as `s' = (s * a + c) mod 2^p` with all arithmetic on
/// fixed-width 64-bit words; wrapping multiplication is exact modulo `2^64`,
/// and masking to `p` bits is exact because `2^p` divides `2^64`.
///
/// # Examples
/// ```
/// use variate_rng::{Lcg, UnitRandom};
///
/// let mut rng = Lcg::new(1566083941, 1, 32, 12345).unwrap();
/// let x = rng.next_unit();
/// assert!((0.0..1.0).contains(&x));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Lcg {
    multiplier: u64,
    increment: u64,
    mask: u64,
    // Draws keep at most the top 53 state bits so the quotient stays below one.
    shift: u32,
    modulus: f64,
    state: u64,
}

impl Lcg {
    /// Creates a generator with multiplier `a`, increment `c`, modulus `2^p`
    /// and the given seed.
    ///
    /// The seed is reduced modulo `2^p`. Negative multipliers, increments and
    /// seeds are unrepresentable by the unsigned parameter types.
    ///
    /// # Arguments
    /// * `a` - State multiplier, must be positive
    /// * `c` - State increment
    /// * `p` - Word width in bits, in `[1, 64]`
    /// * `seed` - Initial state
    ///
    /// # Returns
    /// The generator, or `InvalidParameter` when `a` is zero or `p` is
    /// outside `[1, 64]`.
    pub fn new(a: u64, c: u64, p: u32, seed: u64) -> Result<Self, InvalidParameter> {
        if a == 0 {
            return Err(InvalidParameter::NotPositive {
                name: "a",
                value: 0.0,
            });
        }
        if p == 0 || p > 64 {
            return Err(InvalidParameter::OutOfRange {
                name: "p",
                value: f64::from(p),
                min: 1.0,
                max: 64.0,
            });
        }

        let mask = if p == 64 { u64::MAX } else { (1 << p) - 1 };
        let shift = p.saturating_sub(53);
        Ok(Self {
            multiplier: a,
            increment: c,
            mask,
            shift,
            modulus: 2f64.powi((p - shift) as i32),
            state: seed & mask,
        })
    }

    /// Creates a generator seeded from the wall clock.
    ///
    /// # Arguments
    /// * `a` - State multiplier, must be positive
    /// * `c` - State increment
    /// * `p` - Word width in bits, in `[1, 64]`
    pub fn from_clock(a: u64, c: u64, p: u32) -> Result<Self, InvalidParameter> {
        Self::new(a, c, p, clock_seed())
    }

    /// Advances the state and returns the raw `p`-bit register.
    pub fn next_word(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(self.multiplier)
            .wrapping_add(self.increment)
            & self.mask;
        self.state
    }
}

impl UnitRandom for Lcg {
    fn next_unit(&mut self) -> f64 {
        (self.next_word() >> self.shift) as f64 / self.modulus
    }
}

/// The 48-bit linear congruential recurrence of classic `java.util.Random`.
///
/// Uses the pinned parameters `a = 25214903917`, `c = 11`, `p = 48`. Each
/// unit draw combines 26 and then 27 high bits of two successive states into
/// a 53-bit integer divided by `2^53 - 1`, reproducing the historical
/// sequence bit for bit.
///
/// # Examples
/// ```
/// use variate_rng::{LegacyJavaRandom, UnitRandom};
///
/// let mut rng = LegacyJavaRandom::new(0);
/// assert_eq!(rng.next_unit(), 0.7309677873766571);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyJavaRandom {
    state: u64,
}

impl LegacyJavaRandom {
    /// State multiplier of the historical recurrence.
    pub const MULTIPLIER: u64 = 25214903917;
    /// State increment of the historical recurrence.
    pub const INCREMENT: u64 = 11;
    /// Mask keeping the low 48 state bits.
    pub const STATE_MASK: u64 = (1 << 48) - 1;

    /// Creates a generator from the given seed.
    ///
    /// The seed is scrambled with the multiplier before use, exactly as the
    /// historical implementation does.
    pub fn new(seed: u64) -> Self {
        Self {
            state: (seed ^ Self::MULTIPLIER) & Self::STATE_MASK,
        }
    }

    /// Creates a generator seeded from the wall clock.
    pub fn from_clock() -> Self {
        Self::new(clock_seed())
    }

    fn next_bits(&mut self, bits: u32) -> u64 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
            & Self::STATE_MASK;
        self.state >> (48 - bits)
    }
}

impl UnitRandom for LegacyJavaRandom {
    fn next_unit(&mut self) -> f64 {
        let hi = self.next_bits(26);
        let lo = self.next_bits(27);
        ((hi << 27) + lo) as f64 / MAX_EXACT_F64
    }
}
