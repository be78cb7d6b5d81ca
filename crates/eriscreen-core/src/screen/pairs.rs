use crate::core::matrix::PairMatrix;
use itertools::iproduct;

/// Significance index structures at one granularity (shells or functions).
///
/// Built from a symmetric magnitude table and an inclusive threshold:
///
/// - `pairs` lists the significant canonical pairs (outer ≥ inner) in
///   deterministic order, outer index ascending, inner ascending;
/// - `reverse` maps a canonical pair back to its compact offset in `pairs`,
///   `None` marking pairs below threshold;
/// - `neighbors` lists, for every index, all partners over the full range
///   whose pair passes the same threshold. Table symmetry makes this agree
///   with `pairs` membership in both directions.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct PairIndex {
    pairs: Vec<(usize, usize)>,
    reverse: Vec<Option<usize>>,
    neighbors: Vec<Vec<usize>>,
}

impl PairIndex {
    pub(crate) fn build(values: &PairMatrix, threshold: f64) -> Self {
        let dim = values.dim();

        let mut pairs = Vec::new();
        let mut reverse = vec![None; dim * (dim + 1) / 2];
        let mut offset = 0;
        for m in 0..dim {
            for n in 0..=m {
                if values.get(m, n) >= threshold {
                    pairs.push((m, n));
                    reverse[Self::triangle_index(m, n)] = Some(offset);
                    offset += 1;
                }
            }
        }

        let mut neighbors = vec![Vec::new(); dim];
        for (m, n) in iproduct!(0..dim, 0..dim) {
            if values.get(m, n) >= threshold {
                neighbors[m].push(n);
            }
        }

        Self {
            pairs,
            reverse,
            neighbors,
        }
    }

    pub(crate) fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Compact offset of pair (m, n) in the significant list, accepted in
    /// either argument order; `None` when the pair is below threshold.
    pub(crate) fn offset(&self, m: usize, n: usize) -> Option<usize> {
        let (outer, inner) = if m >= n { (m, n) } else { (n, m) };
        self.reverse[Self::triangle_index(outer, inner)]
    }

    pub(crate) fn neighbors(&self, m: usize) -> &[usize] {
        &self.neighbors[m]
    }

    #[inline]
    fn triangle_index(m: usize, n: usize) -> usize {
        m * (m + 1) / 2 + n
    }
}
