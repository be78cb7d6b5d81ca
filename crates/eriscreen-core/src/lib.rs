//! # eriscreen Core Library
//!
//! A fast integral-screening (sieving) engine for electronic-structure codes,
//! implementing Cauchy-Schwarz and CSAM bounds on two-electron integral
//! magnitudes.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict two-layer architecture to keep the
//! screening algorithms separate from the data they consume.
//!
//! - **[`core`]: The Foundation.** Contains the read-only basis-set
//!   enumeration model (`BasisSet`), the dense symmetric pair-table storage
//!   (`PairMatrix`), and the seam to the external integral-evaluation
//!   machinery (`TwoElectronIntegrals`).
//!
//! - **[`screen`]: The Engine.** This stateful layer builds the magnitude and
//!   exchange bound tables, applies a numerical cutoff to derive
//!   significant-pair index structures, and answers shell-quartet
//!   significance queries. Its entry point is [`screen::sieve::Sieve`].

pub mod core;
pub mod screen;
