use super::{IntegralError, TwoElectronIntegrals};
use crate::core::basis::BasisSet;

/// Integral service backed by a precomputed dense ERI tensor.
///
/// Holds the full `nbf⁴` tensor row-major (`((a·nbf + b)·nbf + c)·nbf + d`
/// for functions `a, b, c, d`) and serves shell blocks by copying the
/// requested sub-block into an internal scratch buffer, which the next
/// request overwrites.
#[derive(Debug, Clone)]
pub struct TabulatedIntegrals {
    nbf: usize,
    offsets: Vec<usize>,
    counts: Vec<usize>,
    tensor: Vec<f64>,
    scratch: Vec<f64>,
}

impl TabulatedIntegrals {
    /// Wraps `tensor`, which must hold exactly `nbf⁴` entries for the given
    /// basis.
    pub fn new(basis: &BasisSet, tensor: Vec<f64>) -> Result<Self, IntegralError> {
        let nbf = basis.nbf();
        let expected = nbf * nbf * nbf * nbf;
        if tensor.len() != expected {
            return Err(IntegralError::TensorShape {
                found: tensor.len(),
                expected,
                nbf,
            });
        }

        let offsets = (0..basis.nshell())
            .map(|shell| basis.function_offset(shell))
            .collect();
        let counts = basis
            .shells()
            .iter()
            .map(|shell| shell.nfunctions())
            .collect();

        Ok(Self {
            nbf,
            offsets,
            counts,
            tensor,
            scratch: Vec::new(),
        })
    }

    fn check_shell(&self, index: usize) -> Result<(), IntegralError> {
        if index >= self.counts.len() {
            return Err(IntegralError::ShellOutOfRange {
                index,
                nshell: self.counts.len(),
            });
        }
        Ok(())
    }
}

impl TwoElectronIntegrals for TabulatedIntegrals {
    fn compute_shell(
        &mut self,
        p: usize,
        q: usize,
        r: usize,
        s: usize,
    ) -> Result<&[f64], IntegralError> {
        for shell in [p, q, r, s] {
            self.check_shell(shell)?;
        }

        let (off_p, np) = (self.offsets[p], self.counts[p]);
        let (off_q, nq) = (self.offsets[q], self.counts[q]);
        let (off_r, nr) = (self.offsets[r], self.counts[r]);
        let (off_s, ns) = (self.offsets[s], self.counts[s]);

        self.scratch.clear();
        self.scratch.reserve(np * nq * nr * ns);
        for fp in 0..np {
            for fq in 0..nq {
                for fr in 0..nr {
                    for fs in 0..ns {
                        let a = off_p + fp;
                        let b = off_q + fq;
                        let c = off_r + fr;
                        let d = off_s + fs;
                        self.scratch
                            .push(self.tensor[((a * self.nbf + b) * self.nbf + c) * self.nbf + d]);
                    }
                }
            }
        }

        Ok(&self.scratch)
    }
}
