//! # variate_rng: Uniform Random Number Engines
//!
//! ## Generator Layer Role
//!
//! variate_rng is the bottom layer of the two-crate workspace, providing:
//! - The unit uniform source capability (`source::UnitRandom`)
//! - Linear congruential engines (`lcg::Lcg`, `lcg::LegacyJavaRandom`)
//! - A 521-bit shift register engine (`msequence::MSequence`)
//! - The MT19937 Mersenne Twister (`mersenne::MersenneTwister`)
//! - The Wichmann-Hill combined engine (`wichmann_hill::WichmannHill`)
//! - A pool shuffling decorator (`improve::PoolImproved`)
//! - A statistical acceptance tester (`tester::UniformityTester`)
//! - Error types: `InvalidParameter` (`error`)
//!
//! Every engine is an explicit value seeded by the caller; there is no
//! process-wide default generator. Seeding from the wall clock is spelled
//! out with `from_clock` constructors or [`clock_seed`].
//!
//! ## Usage Examples
//!
//! ```rust
//! use variate_rng::{LegacyJavaRandom, UniformityTester, UnitRandom};
//!
//! // Deterministic stream from an explicit seed
//! let mut rng = LegacyJavaRandom::new(7);
//! let x = rng.next_unit();
//! assert!((0.0..1.0).contains(&x));
//!
//! // Decorated stream with the output order shuffled through a pool
//! let mut shuffled = LegacyJavaRandom::new(7).improved(97).unwrap();
//! assert!((0.0..1.0).contains(&shuffled.next_unit()));
//!
//! // Statistical acceptance
//! let tester = UniformityTester::default();
//! assert!(tester.test_source(&mut LegacyJavaRandom::new(7), 10000));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for the error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod improve;
pub mod lcg;
pub mod mersenne;
pub mod msequence;
pub mod source;
pub mod tester;
pub mod wichmann_hill;

pub use error::InvalidParameter;
pub use improve::{PoolImproved, DEFAULT_POOL_SIZE};
pub use lcg::{Lcg, LegacyJavaRandom};
pub use mersenne::MersenneTwister;
pub use msequence::MSequence;
pub use source::{clock_seed, Draws, UnitRandom};
pub use tester::UniformityTester;
pub use wichmann_hill::WichmannHill;
