//! # variate_dist: Probability Distributions and Samplers
//!
//! ## Distribution Layer Role
//!
//! variate_dist sits on top of `variate_rng`, providing:
//! - The distribution contract (`distribution::Distribution`, `ModeBound`)
//! - The variate drawing contract (`sampler::Sampler`)
//! - The uniform family (`uniform::Uniform`)
//! - The triangular family (`triangular::Triangular`)
//! - The exponential family (`exponential::Exponential`)
//! - The normal family (`normal::Normal`)
//! - Log-gamma and incomplete gamma support functions (`gamma`)
//!
//! Distributions are immutable value types; all sampling state lives in the
//! sampler values they create, and all randomness comes from a
//! caller-supplied `variate_rng::UnitRandom` source.
//!
//! ## Usage Examples
//!
//! ```rust
//! use variate_dist::{Distribution, Normal, Sampler};
//! use variate_rng::MersenneTwister;
//!
//! let dist = Normal::new(3.0, 0.5).unwrap();
//! assert_eq!(dist.mean(), 3.0);
//!
//! let mut sampler = dist.sampler();
//! let mut rng = MersenneTwister::new(5489);
//! let x = sampler.sample(&mut rng);
//! assert!(x.is_finite());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for the distribution parameter types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod distribution;
pub mod exponential;
pub mod gamma;
pub mod normal;
pub mod sampler;
pub mod triangular;
pub mod uniform;

pub use distribution::{Distribution, ModeBound};
pub use exponential::{Exponential, ExponentialSampler};
pub use normal::{Normal, NormalSampler};
pub use sampler::{Sampler, Samples};
pub use triangular::{Triangular, TriangularSampler};
pub use uniform::{Uniform, UniformSampler};

pub use variate_rng::InvalidParameter;
