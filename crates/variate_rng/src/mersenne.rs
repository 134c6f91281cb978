//! The Mersenne Twister generator (MT19937).

use crate::error::InvalidParameter;
use crate::source::{clock_seed, UnitRandom};

/// State size in 32-bit words.
const N: usize = 624;
/// Twist offset.
const M: usize = 397;
/// Twist matrix constant.
const MATRIX_A: u32 = 0x9908_B0DF;
/// Mask selecting the top state bit.
const UPPER_MASK: u32 = 0x8000_0000;
/// Mask selecting the low 31 state bits.
const LOWER_MASK: u32 = 0x7FFF_FFFF;

/// Largest integer exactly representable in an `f64`, `2^53 - 1`.
const MAX_EXACT_F64: f64 = 9007199254740991.0;

/// The MT19937 Mersenne Twister with a period of `2^19937 - 1`.
///
/// The 624-word state is twisted one word at a time with three rolling
/// cursors instead of a block regeneration pass. Unit draws combine 26 and
/// then 27 tempered bits of two successive words into a 53-bit integer, the
/// same way [`LegacyJavaRandom`](crate::LegacyJavaRandom) does.
///
/// # Examples
/// ```
/// use variate_rng::MersenneTwister;
///
/// let mut rng = MersenneTwister::new(5489);
/// assert_eq!(rng.next_word(), 3499211612);
/// ```
#[derive(Debug, Clone)]
pub struct MersenneTwister {
    words: [u32; N],
    p: usize,
    q: usize,
    r: usize,
}

impl MersenneTwister {
    /// Creates a generator from a single word seed using the standard
    /// `1812433253` initialisation recurrence.
    pub fn new(seed: u32) -> Self {
        let mut words = [0u32; N];
        words[0] = seed;
        for i in 1..N {
            words[i] = 1812433253u32
                .wrapping_mul(words[i - 1] ^ (words[i - 1] >> 30))
                .wrapping_add(i as u32);
        }
        Self {
            words,
            p: 0,
            q: 1,
            r: M,
        }
    }

    /// Creates a generator from an array seed using the standard
    /// `init_by_array` mixing passes.
    ///
    /// # Arguments
    /// * `seeds` - Seed words, must be non-empty
    ///
    /// # Returns
    /// The generator, or `InvalidParameter::NotPositive` when `seeds` is
    /// empty.
    pub fn from_slice(seeds: &[u32]) -> Result<Self, InvalidParameter> {
        if seeds.is_empty() {
            return Err(InvalidParameter::NotPositive {
                name: "seeds.len()",
                value: 0.0,
            });
        }

        let mut rng = Self::new(19650218);
        let x = &mut rng.words;

        let mut i = 1usize;
        let mut j = 0usize;
        for _ in 0..N.max(seeds.len()) {
            x[i] = (x[i] ^ (x[i - 1] ^ (x[i - 1] >> 30)).wrapping_mul(1664525))
                .wrapping_add(seeds[j])
                .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= N {
                x[0] = x[N - 1];
                i = 1;
            }
            if j >= seeds.len() {
                j = 0;
            }
        }
        for _ in 0..N - 1 {
            x[i] = (x[i] ^ (x[i - 1] ^ (x[i - 1] >> 30)).wrapping_mul(1566083941))
                .wrapping_sub(i as u32);
            i += 1;
            if i >= N {
                x[0] = x[N - 1];
                i = 1;
            }
        }
        x[0] = 0x8000_0000;
        Ok(rng)
    }

    /// Creates a generator seeded from the wall clock.
    pub fn from_clock() -> Self {
        Self::new(clock_seed() as u32)
    }

    /// Advances the state and returns the next tempered 32-bit word.
    pub fn next_word(&mut self) -> u32 {
        let mixed = (self.words[self.p] & UPPER_MASK) | (self.words[self.q] & LOWER_MASK);
        let twisted = self.words[self.r]
            ^ (mixed >> 1)
            ^ if mixed & 1 == 1 { MATRIX_A } else { 0 };
        self.words[self.p] = twisted;

        self.p = (self.p + 1) % N;
        self.q = (self.q + 1) % N;
        self.r = (self.r + 1) % N;

        let mut y = twisted;
        y ^= y >> 11;
        y ^= (y << 7) & 0x9D2C_5680;
        y ^= (y << 15) & 0xEFC6_0000;
        y ^= y >> 18;
        y
    }
}

impl UnitRandom for MersenneTwister {
    fn next_unit(&mut self) -> f64 {
        let hi = u64::from(self.next_word() >> 6);
        let lo = u64::from(self.next_word() >> 5);
        ((hi << 27) + lo) as f64 / MAX_EXACT_F64
    }
}
