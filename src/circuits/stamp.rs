//! Conductance stamping helpers for DC nodal analysis.

use nalgebra::{DMatrix, DVector};

use crate::linalg::{self, SolveError};
use crate::math::Scalar;

/// Node index (0-based). The ground node is represented by `None`.
pub type Node = Option<usize>;

/// Real-valued conductance matrix used in DC nodal analysis.
pub type ConductanceMatrix = DMatrix<Scalar>;
/// Net current injection vector.
pub type InjectionVector = DVector<Scalar>;

/// Assembled nodal system `G · v = i`.
#[derive(Debug, Clone)]
pub struct NodalSystem {
    /// System conductance matrix.
    pub conductance: ConductanceMatrix,
    /// Net current injection vector.
    pub injection: InjectionVector,
}

impl NodalSystem {
    /// Solves for node voltages through the Cramer core.
    ///
    /// # Errors
    ///
    /// Propagates [`SolveError::SingularMatrix`] for degenerate topologies
    /// (e.g. a floating node with no conductance attached).
    pub fn solve(&self) -> Result<DVector<Scalar>, SolveError> {
        linalg::solve_cramer(&self.conductance, &self.injection)
    }
}

/// Builder for nodal systems using element stamping.
pub struct NodalBuilder {
    g: ConductanceMatrix,
    i: InjectionVector,
}

impl NodalBuilder {
    /// Creates a stamping context with `node_count` non-ground nodes.
    #[must_use]
    pub fn new(node_count: usize) -> Self {
        Self {
            g: DMatrix::zeros(node_count, node_count),
            i: DVector::zeros(node_count),
        }
    }

    /// Stamps a resistor of resistance `r` between nodes `a` and `b`.
    pub fn stamp_resistor(&mut self, a: Node, b: Node, r: Scalar) {
        if r == 0.0 {
            return; // avoid inf conductance; shorts are not modeled here
        }
        self.stamp_conductance(a, b, 1.0 / r);
    }

    /// Stamps a current source `i` flowing from node `pos` to `neg`
    /// (injecting into `pos`).
    pub fn stamp_current_source(&mut self, pos: Node, neg: Node, i: Scalar) {
        if let Some(p) = pos {
            self.i[p] += i;
        }
        if let Some(n) = neg {
            self.i[n] -= i;
        }
    }

    /// Internal: stamp a conductance `g` between nodes.
    fn stamp_conductance(&mut self, a: Node, b: Node, g: Scalar) {
        match (a, b) {
            (Some(i), Some(j)) => {
                self.g[(i, i)] += g;
                self.g[(j, j)] += g;
                self.g[(i, j)] -= g;
                self.g[(j, i)] -= g;
            }
            (Some(i), None) => {
                self.g[(i, i)] += g;
            }
            (None, Some(j)) => {
                self.g[(j, j)] += g;
            }
            (None, None) => {}
        }
    }

    /// Finalizes the builder into a [`NodalSystem`].
    #[must_use]
    pub fn build(self) -> NodalSystem {
        NodalSystem {
            conductance: self.g,
            injection: self.i,
        }
    }
}
