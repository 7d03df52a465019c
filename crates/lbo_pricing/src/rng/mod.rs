//! # Random Number Generation
//!
//! This module provides the explicit random-source handle used by the Monte
//! Carlo simulator and by mock deal generation.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: All generators are seeded; no global seed exists
//! - **Independence**: Parallel trials use disjoint streams derived from a
//!   base seed, see [`DealRng::for_stream`]
//!
//! ## Usage Example
//!
//! ```rust
//! use lbo_pricing::rng::DealRng;
//!
//! let mut rng = DealRng::from_seed(12345);
//!
//! let u = rng.gen_uniform();
//! let z = rng.gen_normal();
//! let x = rng.gen_range(6.0, 10.0);
//! assert!((6.0..10.0).contains(&x));
//! ```

mod prng;

pub use prng::DealRng;
