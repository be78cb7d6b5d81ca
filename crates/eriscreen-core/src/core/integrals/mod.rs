//! # Integral Service Module
//!
//! The seam between the screening engine and the machinery that actually
//! evaluates electron-repulsion integrals. The engine never computes an
//! integral itself; it requests whole shell-quartet blocks through
//! [`TwoElectronIntegrals`] and consumes the returned buffer.
//!
//! [`tabulated`] provides a backend that serves blocks out of a precomputed
//! dense tensor, used throughout the test suite and by consumers that
//! already hold their integrals in memory.

pub mod tabulated;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntegralError {
    #[error("shell index {index} out of range for basis with {nshell} shells")]
    ShellOutOfRange { index: usize, nshell: usize },
    #[error("integral tensor has {found} entries, expected {expected} for {nbf} basis functions")]
    TensorShape {
        found: usize,
        expected: usize,
        nbf: usize,
    },
    #[error("integral backend failed for shell quartet ({p}, {q}, {r}, {s}): {message}")]
    Backend {
        p: usize,
        q: usize,
        r: usize,
        s: usize,
        message: String,
    },
}

/// Service computing electron-repulsion integral blocks over shell quartets.
///
/// `compute_shell` returns a view into scratch storage owned by the service;
/// the next call overwrites it. The mutable borrow makes that contract
/// explicit: the block must be consumed before another one is requested, and
/// a single service instance cannot be shared across threads mid-block.
///
/// The block is laid out row-major over the quartet's function indices:
/// element `(fp, fq, fr, fs)` lives at `((fp * nq + fq) * nr + fr) * ns + fs`,
/// where `nq`, `nr`, `ns` are the function counts of shells `q`, `r`, `s`.
pub trait TwoElectronIntegrals {
    fn compute_shell(
        &mut self,
        p: usize,
        q: usize,
        r: usize,
        s: usize,
    ) -> Result<&[f64], IntegralError>;
}
