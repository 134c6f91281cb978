//! A maximal-length shift register sequence generator.

use crate::lcg::Lcg;
use crate::source::{clock_seed, UnitRandom};

/// Register length in 32-bit words; the underlying sequence period is
/// `2^521 - 1`.
const N: usize = 521;
/// Feedback tap offset.
const M: usize = 32;

/// A 521-bit linear feedback shift register generator.
///
/// The register is seeded from a small congruential generator, stretched to
/// the full 521 words with the `x^521 + x^32 + 1` tap recurrence and stirred
/// four times before the first draw. Draws are served a word at a time; the
/// whole register is advanced again every 521 draws.
///
/// Unit draws divide the word by `2^32 - 1`, so the all-ones word maps to
/// exactly 1.0; that closed upper endpoint has probability `2^-32` per draw.
///
/// # Examples
/// ```
/// use variate_rng::{MSequence, UnitRandom};
///
/// let mut rng = MSequence::new(17);
/// let x = rng.next_unit();
/// assert!((0.0..1.0).contains(&x));
/// ```
#[derive(Debug, Clone)]
pub struct MSequence {
    words: [u32; N],
    cursor: usize,
}

impl MSequence {
    /// Creates a generator from the given seed.
    pub fn new(seed: u64) -> Self {
        let mut boot =
            Lcg::new(1566083941, 1, 32, seed).expect("fixed seeding parameters are valid");

        let mut words = [0u32; N];
        // Fill 17 words bit by bit, keeping the top bit of each boot draw.
        for word in words.iter_mut().take(17) {
            let mut u = 0u32;
            for _ in 0..32 {
                u = (u >> 1) | (boot.next_word() as u32 & 0x8000_0000);
            }
            *word = u;
        }
        words[16] = (words[16] << 23) ^ (words[0] >> 9) ^ words[15];
        for i in 17..N {
            words[i] = (words[i - 17] << 23) ^ (words[i - 16] >> 9) ^ words[i - 1];
        }

        let mut rng = Self { words, cursor: 0 };
        for _ in 0..4 {
            rng.shake();
        }
        rng
    }

    /// Creates a generator seeded from the wall clock.
    pub fn from_clock() -> Self {
        Self::new(clock_seed())
    }

    /// Advances the register and returns the next raw 32-bit word.
    pub fn next_word(&mut self) -> u32 {
        if self.cursor == N {
            self.shake();
            self.cursor = 0;
        }
        let word = self.words[self.cursor];
        self.cursor += 1;
        word
    }

    /// Advances the whole register by one generation.
    fn shake(&mut self) {
        for i in 0..M {
            self.words[i] ^= self.words[i + N - M];
        }
        for i in M..N {
            self.words[i] ^= self.words[i - M];
        }
    }
}

impl UnitRandom for MSequence {
    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_word()) / 4294967295.0
    }
}
