use nalgebra::Point3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BasisError {
    #[error("basis set contains no shells")]
    NoShells,
    #[error("shell {0} contains no basis functions")]
    EmptyShell(usize),
}

/// A group of basis functions sharing contraction data, screened as a unit.
///
/// The screening engine never looks inside a shell; it only needs the
/// function count and, through [`BasisSet`], the global index of the first
/// function the shell owns.
#[derive(Debug, Clone, PartialEq)]
pub struct Shell {
    center: Point3<f64>,
    nfunctions: usize,
}

impl Shell {
    pub fn new(center: Point3<f64>, nfunctions: usize) -> Self {
        Self { center, nfunctions }
    }

    pub fn center(&self) -> &Point3<f64> {
        &self.center
    }

    pub fn nfunctions(&self) -> usize {
        self.nfunctions
    }
}

/// Read-only enumeration view of a basis set.
///
/// Owns the shells and precomputes the per-shell function offsets, the total
/// function count, and the function-to-shell back map. Shells are identified
/// by index in `[0, nshell)`, basis functions by index in `[0, nbf)`.
#[derive(Debug, Clone, PartialEq)]
pub struct BasisSet {
    shells: Vec<Shell>,
    function_offsets: Vec<usize>,
    function_to_shell: Vec<usize>,
    nbf: usize,
}

impl BasisSet {
    /// Builds the index maps over `shells`. An empty shell list or a shell
    /// with zero functions is rejected up front; every later size-derived
    /// quantity in the engine assumes both counts are positive.
    pub fn new(shells: Vec<Shell>) -> Result<Self, BasisError> {
        if shells.is_empty() {
            return Err(BasisError::NoShells);
        }

        let mut function_offsets = Vec::with_capacity(shells.len());
        let mut function_to_shell = Vec::new();
        let mut nbf = 0;
        for (index, shell) in shells.iter().enumerate() {
            if shell.nfunctions() == 0 {
                return Err(BasisError::EmptyShell(index));
            }
            function_offsets.push(nbf);
            function_to_shell.extend(std::iter::repeat(index).take(shell.nfunctions()));
            nbf += shell.nfunctions();
        }

        Ok(Self {
            shells,
            function_offsets,
            function_to_shell,
            nbf,
        })
    }

    pub fn nshell(&self) -> usize {
        self.shells.len()
    }

    pub fn nbf(&self) -> usize {
        self.nbf
    }

    pub fn shell(&self, index: usize) -> &Shell {
        &self.shells[index]
    }

    pub fn shells(&self) -> &[Shell] {
        &self.shells
    }

    /// Global index of the first basis function owned by `shell`.
    pub fn function_offset(&self, shell: usize) -> usize {
        self.function_offsets[shell]
    }

    /// Index of the shell owning global basis function `function`.
    pub fn shell_of_function(&self, function: usize) -> usize {
        self.function_to_shell[function]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell(nfunctions: usize) -> Shell {
        Shell::new(Point3::origin(), nfunctions)
    }

    #[test]
    fn computes_function_offsets_and_totals() {
        let basis = BasisSet::new(vec![shell(1), shell(3), shell(5)]).unwrap();

        assert_eq!(basis.nshell(), 3);
        assert_eq!(basis.nbf(), 9);
        assert_eq!(basis.function_offset(0), 0);
        assert_eq!(basis.function_offset(1), 1);
        assert_eq!(basis.function_offset(2), 4);
    }

    #[test]
    fn maps_functions_back_to_their_shells() {
        let basis = BasisSet::new(vec![shell(2), shell(1), shell(3)]).unwrap();

        assert_eq!(basis.shell_of_function(0), 0);
        assert_eq!(basis.shell_of_function(1), 0);
        assert_eq!(basis.shell_of_function(2), 1);
        assert_eq!(basis.shell_of_function(3), 2);
        assert_eq!(basis.shell_of_function(5), 2);
    }

    #[test]
    fn rejects_empty_shell_list() {
        assert_eq!(BasisSet::new(vec![]), Err(BasisError::NoShells));
    }

    #[test]
    fn rejects_shell_without_functions() {
        let result = BasisSet::new(vec![shell(2), shell(0)]);
        assert_eq!(result, Err(BasisError::EmptyShell(1)));
    }

    #[test]
    fn keeps_shell_centers() {
        let basis = BasisSet::new(vec![Shell::new(Point3::new(0.0, 0.0, 1.4), 1)]).unwrap();
        assert_eq!(basis.shell(0).center().z, 1.4);
    }
}
