use crate::core::basis::BasisSet;
use crate::core::integrals::TwoElectronIntegrals;
use crate::core::matrix::PairMatrix;
use crate::screen::error::ScreenError;
use tracing::debug;

/// Cauchy-Schwarz magnitude tables.
///
/// For every shell pair (P, Q) the largest diagonal element `|(pq|pq)|` of
/// the self block is recorded at shell granularity, copied into every
/// function-pair slot of the (P, Q) block, and folded into the global
/// maximum `max`. Immutable once built.
#[derive(Debug, Clone)]
pub(crate) struct PairBounds {
    pub(crate) shell_values: PairMatrix,
    pub(crate) function_values: PairMatrix,
    pub(crate) max: f64,
}

impl PairBounds {
    pub(crate) fn compute(
        basis: &BasisSet,
        eri: &mut dyn TwoElectronIntegrals,
    ) -> Result<Self, ScreenError> {
        let nshell = basis.nshell();
        let nbf = basis.nbf();
        let mut shell_values = PairMatrix::zeros(nshell);
        let mut function_values = PairMatrix::zeros(nbf);
        let mut max = 0.0_f64;

        for p in 0..nshell {
            for q in 0..=p {
                let np = basis.shell(p).nfunctions();
                let nq = basis.shell(q).nfunctions();
                let off_p = basis.function_offset(p);
                let off_q = basis.function_offset(q);

                let block = eri.compute_shell(p, q, p, q)?;
                let mut pair_max = 0.0_f64;
                for fp in 0..np {
                    for fq in 0..nq {
                        // Diagonal element (fp, fq, fp, fq) of the self block.
                        let value = block[((fp * nq + fq) * np + fp) * nq + fq].abs();
                        pair_max = pair_max.max(value);
                    }
                }

                max = max.max(pair_max);
                shell_values.set_symmetric(p, q, pair_max);
                for fp in 0..np {
                    for fq in 0..nq {
                        function_values.set_symmetric(off_p + fp, off_q + fq, pair_max);
                    }
                }
            }
        }

        debug!(
            "Computed Cauchy-Schwarz magnitude tables for {} shells ({} functions), max = {:.3e}",
            nshell, nbf, max
        );

        Ok(Self {
            shell_values,
            function_values,
            max,
        })
    }
}

/// CSAM exchange-bound tables.
///
/// Each shell-pair entry is the largest `|(pp|qq)|` element of the exchange
/// block, normalized by the same-shell square roots `sqrt(|(pp|pp)|)` of the
/// two functions involved. A basis function with a vanishing self-integral
/// makes the normalization divide by zero; such bases are outside the
/// engine's support and the degenerate value propagates.
#[derive(Debug, Clone)]
pub(crate) struct ExchangeBounds {
    pub(crate) shell_values: PairMatrix,
    pub(crate) function_sqrt: Vec<f64>,
}

impl ExchangeBounds {
    pub(crate) fn compute(
        basis: &BasisSet,
        eri: &mut dyn TwoElectronIntegrals,
    ) -> Result<Self, ScreenError> {
        let nshell = basis.nshell();
        let nbf = basis.nbf();
        let mut shell_values = PairMatrix::zeros(nshell);
        let mut function_sqrt = vec![0.0_f64; nbf];

        for p in 0..nshell {
            // Q runs downward so the same-shell block (Q == P) is visited
            // first: it fills the square-root denominators for shell P, and
            // shells below P filled theirs in earlier outer iterations.
            for q in (0..=p).rev() {
                let np = basis.shell(p).nfunctions();
                let nq = basis.shell(q).nfunctions();
                let off_p = basis.function_offset(p);
                let off_q = basis.function_offset(q);

                let block = eri.compute_shell(p, p, q, q)?;

                if q == p {
                    for fp in 0..np {
                        let idx = ((fp * np + fp) * np + fp) * np + fp;
                        function_sqrt[off_p + fp] = block[idx].abs().sqrt();
                    }
                }

                let mut pair_max = 0.0_f64;
                for fp in 0..np {
                    for fq in 0..nq {
                        // Element (fp, fp, fq, fq) of the (P, P, Q, Q) block.
                        let value = block[((fp * np + fp) * nq + fq) * nq + fq].abs()
                            / (function_sqrt[off_p + fp] * function_sqrt[off_q + fq]);
                        pair_max = pair_max.max(value);
                    }
                }
                shell_values.set_symmetric(p, q, pair_max);
            }
        }

        debug!(
            "Computed CSAM exchange-bound tables for {} shells",
            nshell
        );

        Ok(Self {
            shell_values,
            function_sqrt,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::basis::Shell;
    use crate::core::integrals::tabulated::TabulatedIntegrals;
    use nalgebra::Point3;

    fn basis(sizes: &[usize]) -> BasisSet {
        let shells = sizes
            .iter()
            .map(|&n| Shell::new(Point3::origin(), n))
            .collect();
        BasisSet::new(shells).unwrap()
    }

    fn tensor_index(nbf: usize, a: usize, b: usize, c: usize, d: usize) -> usize {
        ((a * nbf + b) * nbf + c) * nbf + d
    }

    /// Writes the `(ab|ab)`-type diagonal for both orientations of (a, b).
    fn set_self_value(tensor: &mut [f64], nbf: usize, a: usize, b: usize, value: f64) {
        tensor[tensor_index(nbf, a, b, a, b)] = value;
        tensor[tensor_index(nbf, b, a, b, a)] = value;
    }

    #[test]
    fn shell_table_holds_largest_block_diagonal() {
        let basis = basis(&[2, 1]);
        let nbf = basis.nbf();
        let mut tensor = vec![0.0; nbf * nbf * nbf * nbf];
        set_self_value(&mut tensor, nbf, 0, 0, 0.5);
        set_self_value(&mut tensor, nbf, 1, 1, 0.25);
        set_self_value(&mut tensor, nbf, 1, 0, -0.75);
        set_self_value(&mut tensor, nbf, 2, 0, 0.125);
        set_self_value(&mut tensor, nbf, 2, 1, 0.0625);
        set_self_value(&mut tensor, nbf, 2, 2, 1.5);
        let mut eri = TabulatedIntegrals::new(&basis, tensor).unwrap();

        let bounds = PairBounds::compute(&basis, &mut eri).unwrap();

        // Shell pair (0, 0) spans function diagonals 0.5, 0.25 and |-0.75|.
        assert_eq!(bounds.shell_values.get(0, 0), 0.75);
        assert_eq!(bounds.shell_values.get(1, 0), 0.125);
        assert_eq!(bounds.shell_values.get(1, 1), 1.5);
        assert_eq!(bounds.max, 1.5);
    }

    #[test]
    fn tables_are_symmetric() {
        let basis = basis(&[1, 2, 1]);
        let nbf = basis.nbf();
        let mut tensor = vec![0.0; nbf * nbf * nbf * nbf];
        for a in 0..nbf {
            for b in 0..=a {
                set_self_value(&mut tensor, nbf, a, b, ((a + 1) * (b + 2)) as f64);
            }
        }
        let mut eri = TabulatedIntegrals::new(&basis, tensor).unwrap();

        let bounds = PairBounds::compute(&basis, &mut eri).unwrap();

        for m in 0..basis.nshell() {
            for n in 0..basis.nshell() {
                assert_eq!(
                    bounds.shell_values.get(m, n),
                    bounds.shell_values.get(n, m)
                );
            }
        }
        for f in 0..nbf {
            for g in 0..nbf {
                assert_eq!(
                    bounds.function_values.get(f, g),
                    bounds.function_values.get(g, f)
                );
            }
        }
    }

    #[test]
    fn function_pairs_share_their_shell_block_value() {
        let basis = basis(&[2, 1]);
        let nbf = basis.nbf();
        let mut tensor = vec![0.0; nbf * nbf * nbf * nbf];
        set_self_value(&mut tensor, nbf, 2, 0, 0.5);
        set_self_value(&mut tensor, nbf, 2, 1, 0.25);
        let mut eri = TabulatedIntegrals::new(&basis, tensor).unwrap();

        let bounds = PairBounds::compute(&basis, &mut eri).unwrap();

        // Both functions of shell 0 see the (1, 0) block maximum.
        assert_eq!(bounds.function_values.get(2, 0), 0.5);
        assert_eq!(bounds.function_values.get(2, 1), 0.5);
    }

    #[test]
    fn exchange_table_normalizes_by_function_square_roots() {
        let basis = basis(&[1, 1]);
        let nbf = basis.nbf();
        let mut tensor = vec![0.0; nbf * nbf * nbf * nbf];
        tensor[tensor_index(nbf, 0, 0, 0, 0)] = 4.0;
        tensor[tensor_index(nbf, 1, 1, 1, 1)] = 9.0;
        tensor[tensor_index(nbf, 1, 1, 0, 0)] = 1.2;
        let mut eri = TabulatedIntegrals::new(&basis, tensor).unwrap();

        let exchange = ExchangeBounds::compute(&basis, &mut eri).unwrap();

        assert_eq!(exchange.function_sqrt, vec![2.0, 3.0]);
        assert_eq!(exchange.shell_values.get(0, 0), 1.0);
        assert_eq!(exchange.shell_values.get(1, 1), 1.0);
        let off_diag = exchange.shell_values.get(1, 0);
        assert!((off_diag - 0.2).abs() < 1e-15);
        assert_eq!(exchange.shell_values.get(0, 1), off_diag);
    }
}
