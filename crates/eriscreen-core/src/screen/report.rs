use std::fmt;

use crate::core::matrix::PairMatrix;
use crate::screen::sieve::Sieve;

impl Sieve {
    /// Renders the threshold state, bound tables, and every derived index
    /// structure to `out` as text.
    ///
    /// Diagnostic only; the format is not a stable contract.
    pub fn write_report(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "==> Integral Sieve <==")?;
        writeln!(out)?;
        writeln!(out, "    Cutoff       = {:11.3e}", self.cutoff())?;
        writeln!(out, "    Cutoff^2     = {:11.3e}", self.cutoff_squared())?;
        writeln!(out, "    Max          = {:11.3e}", self.max_bound())?;
        writeln!(out, "    Cutoff/Max   = {:11.3e}", self.cutoff_over_max())?;
        writeln!(
            out,
            "    Cutoff^2/Max = {:11.3e}",
            self.cutoff_squared_over_max()
        )?;
        writeln!(out)?;

        write_matrix(out, "Shell Pair Values", &self.bounds().shell_values)?;
        write_matrix(out, "Function Pair Values", &self.bounds().function_values)?;
        if let Some(exchange) = self.exchange() {
            write_matrix(out, "Shell Pair Exchange Values", &exchange.shell_values)?;
        }

        write_pairs(out, "Significant Shell Pairs", self.shell_pairs())?;
        write_pairs(out, "Significant Function Pairs", self.function_pairs())?;

        write_offsets(out, "Shell Pair Offsets", self.basis().nshell(), |m, n| {
            self.shell_pair_offset(m, n)
        })?;
        write_offsets(out, "Function Pair Offsets", self.basis().nbf(), |f, g| {
            self.function_pair_offset(f, g)
        })?;

        write_adjacency(out, "Shell to Shell", self.basis().nshell(), |m| {
            self.shell_neighbors(m)
        })?;
        write_adjacency(out, "Function to Function", self.basis().nbf(), |f| {
            self.function_neighbors(f)
        })?;

        Ok(())
    }
}

fn write_matrix(out: &mut dyn fmt::Write, title: &str, matrix: &PairMatrix) -> fmt::Result {
    writeln!(out, "   => {title} <=")?;
    for row in 0..matrix.dim() {
        for col in 0..matrix.dim() {
            writeln!(out, "    ({row:3}, {col:3}| = {:11.3e}", matrix.get(row, col))?;
        }
    }
    writeln!(out)
}

fn write_pairs(out: &mut dyn fmt::Write, title: &str, pairs: &[(usize, usize)]) -> fmt::Result {
    writeln!(out, "   => {title} <=")?;
    for (offset, (m, n)) in pairs.iter().enumerate() {
        writeln!(out, "    {offset:6} = ({m:3}, {n:3}|")?;
    }
    writeln!(out)
}

fn write_offsets(
    out: &mut dyn fmt::Write,
    title: &str,
    dim: usize,
    offset: impl Fn(usize, usize) -> Option<usize>,
) -> fmt::Result {
    writeln!(out, "   => {title} <=")?;
    for m in 0..dim {
        for n in 0..=m {
            match offset(m, n) {
                Some(value) => writeln!(out, "    {value:6} = ({m:3}, {n:3}|")?,
                None => writeln!(out, "         - = ({m:3}, {n:3}|")?,
            }
        }
    }
    writeln!(out)
}

fn write_adjacency<'a>(
    out: &mut dyn fmt::Write,
    title: &str,
    dim: usize,
    neighbors: impl Fn(usize) -> &'a [usize],
) -> fmt::Result {
    writeln!(out, "   => {title} <=")?;
    for m in 0..dim {
        for n in neighbors(m) {
            writeln!(out, "    ({m:3}, {n:3}|")?;
        }
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::basis::{BasisSet, Shell};
    use crate::core::integrals::tabulated::TabulatedIntegrals;
    use crate::screen::config::{ScreeningConfig, ScreeningMethod};
    use nalgebra::Point3;
    use std::sync::Arc;

    fn sieve(method: ScreeningMethod) -> Sieve {
        let basis = Arc::new(
            BasisSet::new(vec![
                Shell::new(Point3::origin(), 1),
                Shell::new(Point3::new(0.0, 0.0, 1.4), 1),
            ])
            .unwrap(),
        );
        let nbf = basis.nbf();
        let mut eri =
            TabulatedIntegrals::new(&basis, vec![1.0; nbf * nbf * nbf * nbf]).unwrap();
        Sieve::new(basis, &mut eri, &ScreeningConfig::new(0.5, method)).unwrap()
    }

    #[test]
    fn report_lists_every_section() {
        let mut text = String::new();
        sieve(ScreeningMethod::Schwarz).write_report(&mut text).unwrap();

        for section in [
            "Shell Pair Values",
            "Function Pair Values",
            "Significant Shell Pairs",
            "Significant Function Pairs",
            "Shell Pair Offsets",
            "Function Pair Offsets",
            "Shell to Shell",
            "Function to Function",
        ] {
            assert!(text.contains(section), "missing section: {section}");
        }
        assert!(!text.contains("Shell Pair Exchange Values"));
    }

    #[test]
    fn report_includes_exchange_table_in_csam_mode() {
        let mut text = String::new();
        sieve(ScreeningMethod::Csam).write_report(&mut text).unwrap();

        assert!(text.contains("Shell Pair Exchange Values"));
    }
}
