//! The Wichmann-Hill combined congruential generator.

use crate::error::InvalidParameter;
use crate::source::UnitRandom;

/// Valid closed range for each of the three seed registers.
const SEED_MIN: i32 = 1;
const SEED_MAX: i32 = 30000;

/// The classic three-register Wichmann-Hill generator.
///
/// Three small congruential generators with moduli 30269, 30307 and 30323
/// advance in lockstep; the unit draw is the fractional part of the sum of
/// the three register fractions. Each register update is factorised so all
/// intermediate products fit comfortably in 32-bit arithmetic.
///
/// # Examples
/// ```
/// use variate_rng::{UnitRandom, WichmannHill};
///
/// let mut rng = WichmannHill::new(2, 3, 5).unwrap();
/// let x = rng.next_unit();
/// assert!((0.0..1.0).contains(&x));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WichmannHill {
    x: i32,
    y: i32,
    z: i32,
}

impl WichmannHill {
    /// Creates a generator from three seed registers.
    ///
    /// # Arguments
    /// * `x` - First register, in `[1, 30000]`
    /// * `y` - Second register, in `[1, 30000]`
    /// * `z` - Third register, in `[1, 30000]`
    ///
    /// # Returns
    /// The generator, or `InvalidParameter::OutOfRange` naming the first
    /// register outside `[1, 30000]`.
    pub fn new(x: i32, y: i32, z: i32) -> Result<Self, InvalidParameter> {
        for (name, value) in [("x", x), ("y", y), ("z", z)] {
            if !(SEED_MIN..=SEED_MAX).contains(&value) {
                return Err(InvalidParameter::OutOfRange {
                    name,
                    value: f64::from(value),
                    min: f64::from(SEED_MIN),
                    max: f64::from(SEED_MAX),
                });
            }
        }
        Ok(Self { x, y, z })
    }
}

impl Default for WichmannHill {
    fn default() -> Self {
        Self { x: 1, y: 1, z: 1 }
    }
}

impl UnitRandom for WichmannHill {
    fn next_unit(&mut self) -> f64 {
        self.x = 171 * (self.x % 177) - 2 * (self.x / 177);
        self.y = 172 * (self.y % 176) - 35 * (self.y / 176);
        self.z = 170 * (self.z % 178) - 63 * (self.z / 178);

        if self.x < 0 {
            self.x += 30269;
        }
        if self.y < 0 {
            self.y += 30307;
        }
        if self.z < 0 {
            self.z += 30323;
        }

        let r = f64::from(self.x) / 30269.0
            + f64::from(self.y) / 30307.0
            + f64::from(self.z) / 30323.0;
        r.fract()
    }
}
