use std::sync::Arc;

use tracing::{info, trace};

use crate::core::basis::BasisSet;
use crate::core::integrals::TwoElectronIntegrals;
use crate::screen::bounds::{ExchangeBounds, PairBounds};
use crate::screen::config::{ScreeningConfig, ScreeningMethod};
use crate::screen::error::ScreenError;
use crate::screen::pairs::PairIndex;

/// Two-electron integral sieve.
///
/// Precomputes Cauchy-Schwarz magnitude bounds (and, in CSAM mode, exchange
/// bounds) over a basis set, applies a numerical cutoff to derive
/// significant-pair index structures, and answers shell-quartet significance
/// queries for the surrounding integral-evaluation loop.
///
/// The integral service is consulted only during construction; afterwards
/// every query reads the owned tables. The basis set is shared immutable
/// state and must describe the same system the service evaluates.
#[derive(Debug, Clone)]
pub struct Sieve {
    basis: Arc<BasisSet>,
    method: ScreeningMethod,
    bounds: PairBounds,
    exchange: Option<ExchangeBounds>,
    cutoff: f64,
    cutoff2: f64,
    cutoff_over_max: f64,
    cutoff2_over_max: f64,
    shell_pairs: PairIndex,
    function_pairs: PairIndex,
}

impl Sieve {
    /// Builds the bound tables by querying `eri` for every canonical shell
    /// pair, then applies the initial cutoff from `config`.
    ///
    /// Fails on a non-finite or negative cutoff, on
    /// [`ScreeningMethod::Qqr`] (see [`Sieve::shell_significant_qqr`]), and
    /// on any error propagated from the integral service. CSAM mode
    /// additionally requires every basis function to have a nonvanishing
    /// self-integral: the exchange-bound normalization divides by the
    /// square roots of those self-integrals and degenerate values propagate.
    pub fn new(
        basis: Arc<BasisSet>,
        eri: &mut dyn TwoElectronIntegrals,
        config: &ScreeningConfig,
    ) -> Result<Self, ScreenError> {
        if !config.cutoff.is_finite() || config.cutoff < 0.0 {
            return Err(ScreenError::InvalidCutoff(config.cutoff));
        }
        if config.method == ScreeningMethod::Qqr {
            return Err(ScreenError::QqrUnsupported);
        }

        let bounds = PairBounds::compute(&basis, eri)?;
        let exchange = match config.method {
            ScreeningMethod::Csam => Some(ExchangeBounds::compute(&basis, eri)?),
            _ => None,
        };

        let mut sieve = Self {
            basis,
            method: config.method,
            bounds,
            exchange,
            cutoff: 0.0,
            cutoff2: 0.0,
            cutoff_over_max: 0.0,
            cutoff2_over_max: 0.0,
            shell_pairs: PairIndex::default(),
            function_pairs: PairIndex::default(),
        };
        sieve.set_cutoff(config.cutoff)?;

        info!(
            "Sieve ready: {} shells, {} functions, {} significant shell pairs at cutoff {:.3e}",
            sieve.basis.nshell(),
            sieve.basis.nbf(),
            sieve.shell_pairs.pairs().len(),
            sieve.cutoff
        );
        Ok(sieve)
    }

    /// Applies a new cutoff and rebuilds every derived index structure from
    /// scratch.
    ///
    /// The rebuild is all-or-nothing: the significant-pair lists, reverse
    /// maps, and adjacency lists always describe the same threshold, and
    /// re-applying an unchanged cutoff reproduces identical structures. The
    /// comparison against the max-normalized squared cutoff is inclusive.
    pub fn set_cutoff(&mut self, cutoff: f64) -> Result<(), ScreenError> {
        if !cutoff.is_finite() || cutoff < 0.0 {
            return Err(ScreenError::InvalidCutoff(cutoff));
        }

        self.cutoff = cutoff;
        self.cutoff2 = cutoff * cutoff;
        self.cutoff_over_max = self.cutoff / self.bounds.max;
        self.cutoff2_over_max = self.cutoff2 / self.bounds.max;

        self.shell_pairs = PairIndex::build(&self.bounds.shell_values, self.cutoff2_over_max);
        self.function_pairs = PairIndex::build(&self.bounds.function_values, self.cutoff2_over_max);

        trace!(
            "Rebuilt sieve indices at cutoff {:.3e}: {} shell pairs, {} function pairs",
            self.cutoff,
            self.shell_pairs.pairs().len(),
            self.function_pairs.pairs().len()
        );
        Ok(())
    }

    /// CSAM significance test for the shell quartet (M, N | R, S).
    ///
    /// Combines the Cauchy-Schwarz magnitudes of the bra and ket pairs with
    /// the larger of the two exchange-bound pairings and compares the
    /// product against the squared cutoff (inclusive). Errors when the sieve
    /// was built without CSAM mode.
    #[inline]
    pub fn shell_significant_csam(
        &self,
        m: usize,
        n: usize,
        r: usize,
        s: usize,
    ) -> Result<bool, ScreenError> {
        let exchange = self.exchange.as_ref().ok_or(ScreenError::CsamDisabled)?;

        let mn_mn = self.bounds.shell_values.get(n, m);
        let rs_rs = self.bounds.shell_values.get(s, r);

        let mm_rr = exchange.shell_values.get(r, m);
        let nn_ss = exchange.shell_values.get(s, n);
        let mm_ss = exchange.shell_values.get(s, m);
        let nn_rr = exchange.shell_values.get(r, n);

        let csam2 = (mm_rr * nn_ss).max(mm_ss * nn_rr);
        let mnrs2 = mn_mn * rs_rs * csam2;

        Ok(mnrs2.abs() >= self.cutoff2)
    }

    /// Long-range QQR significance test. Always errors.
    ///
    /// The estimate needs per-pair extents and contracted centers, and no
    /// working estimator for them exists; without that data the predicate
    /// could only return plausible-looking but meaningless answers. It is
    /// surfaced as an explicitly unsupported capability instead.
    pub fn shell_significant_qqr(
        &self,
        _m: usize,
        _n: usize,
        _r: usize,
        _s: usize,
    ) -> Result<bool, ScreenError> {
        Err(ScreenError::QqrUnsupported)
    }

    /// Raw Cauchy-Schwarz magnitude for shell pair (m, n); a standalone
    /// bound cheaper than the quartet predicates.
    #[inline]
    pub fn shell_pair_value(&self, m: usize, n: usize) -> f64 {
        self.bounds.shell_values.get(m, n)
    }

    /// Raw magnitude for function pair (f, g); shared by all function pairs
    /// of the same shell-pair block.
    #[inline]
    pub fn function_pair_value(&self, f: usize, g: usize) -> f64 {
        self.bounds.function_values.get(f, g)
    }

    /// Significant canonical shell pairs (M ≥ N), outer index ascending.
    pub fn shell_pairs(&self) -> &[(usize, usize)] {
        self.shell_pairs.pairs()
    }

    /// Significant canonical function pairs (f ≥ g), outer index ascending.
    pub fn function_pairs(&self) -> &[(usize, usize)] {
        self.function_pairs.pairs()
    }

    /// Compact offset of shell pair (m, n) in [`Sieve::shell_pairs`], in
    /// either argument order; `None` when the pair is insignificant.
    pub fn shell_pair_offset(&self, m: usize, n: usize) -> Option<usize> {
        self.shell_pairs.offset(m, n)
    }

    /// Compact offset of function pair (f, g) in [`Sieve::function_pairs`].
    pub fn function_pair_offset(&self, f: usize, g: usize) -> Option<usize> {
        self.function_pairs.offset(f, g)
    }

    /// Shells N (full range) for which pair (m, N) is significant, ascending.
    pub fn shell_neighbors(&self, m: usize) -> &[usize] {
        self.shell_pairs.neighbors(m)
    }

    /// Functions g (full range) for which pair (f, g) is significant,
    /// ascending.
    pub fn function_neighbors(&self, f: usize) -> &[usize] {
        self.function_pairs.neighbors(f)
    }

    pub fn basis(&self) -> &Arc<BasisSet> {
        &self.basis
    }

    pub fn method(&self) -> ScreeningMethod {
        self.method
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    pub fn cutoff_squared(&self) -> f64 {
        self.cutoff2
    }

    /// Largest magnitude-table entry; the normalization reference for the
    /// threshold comparisons.
    pub fn max_bound(&self) -> f64 {
        self.bounds.max
    }

    pub fn cutoff_over_max(&self) -> f64 {
        self.cutoff_over_max
    }

    pub fn cutoff_squared_over_max(&self) -> f64 {
        self.cutoff2_over_max
    }

    pub(crate) fn bounds(&self) -> &PairBounds {
        &self.bounds
    }

    pub(crate) fn exchange(&self) -> Option<&ExchangeBounds> {
        self.exchange.as_ref()
    }
}
