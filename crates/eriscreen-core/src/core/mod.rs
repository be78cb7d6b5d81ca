//! # Core Module
//!
//! This module provides the foundation the screening engine is built on:
//! stateless data models and the interface to the external integral
//! machinery.
//!
//! ## Key Components
//!
//! - **Basis Enumeration** ([`basis`]) - Shells, their function counts, and
//!   the global function indexing derived from them
//! - **Pair Tables** ([`matrix`]) - Dense symmetric matrices stored flat for
//!   cache-friendly row scans
//! - **Integral Service** ([`integrals`]) - The seam to the two-electron
//!   integral evaluation machinery, treated as an opaque block-oriented
//!   service
//!
//! Everything in this layer is read-only from the perspective of the
//! screening engine: the basis set is shared immutable state, and integral
//! blocks are consumed as they are produced.

pub mod basis;
pub mod integrals;
pub mod matrix;
