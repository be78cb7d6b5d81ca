//! # Screening Module
//!
//! The integral sieve itself: bound-table construction, threshold
//! application, and quartet significance queries.
//!
//! ## Overview
//!
//! Screening happens in two phases. At construction, [`sieve::Sieve`] asks
//! the integral service for the "self" block of every canonical shell pair
//! and distills it into dense magnitude tables (plus exchange-bound tables
//! when CSAM mode is enabled). Applying a cutoff then derives the
//! significant-pair lists, reverse maps, and adjacency lists the integral
//! loop iterates over; the cutoff can be re-applied at any time and every
//! derived structure is rebuilt atomically.
//!
//! ## Key Components
//!
//! - **Configuration** ([`config`]) - Cutoff value and screening method,
//!   with optional TOML loading
//! - **Bound Tables** (`bounds`) - Cauchy-Schwarz magnitude and CSAM
//!   exchange-bound construction
//! - **Pair Indices** (`pairs`) - Significant-pair lists, reverse maps,
//!   and adjacency views derived from a threshold
//! - **The Sieve** ([`sieve`]) - Public entry point tying the above together
//! - **Error Handling** ([`error`]) - Screening-specific error types

pub(crate) mod bounds;
pub mod config;
pub mod error;
pub(crate) mod pairs;
pub(crate) mod report;
pub mod sieve;
