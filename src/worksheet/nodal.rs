//! Three-node DC nodal analysis with a Norton-transformed source.
//!
//! One current-balance equation per node, stamped as conductances; the
//! voltage source `u` behind `r1` enters as its Norton equivalent `u / r1`.
//! The 3×3 system goes through the Cramer core.

use crate::circuits::stamp::NodalBuilder;
use crate::linalg::SolveError;
use crate::math::Scalar;

/// Sources and resistor values for the three-node network.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodalParams {
    /// Source voltage behind `r1` (V).
    pub u: Scalar,
    /// Current source between nodes C and B (A).
    pub i1: Scalar,
    /// Current source into node C (A).
    pub i2: Scalar,
    /// Resistance r1 (Ω), in series with the voltage source.
    pub r1: Scalar,
    /// Resistance r2 (Ω), the measured branch from node A to ground.
    pub r2: Scalar,
    /// Resistance r3 (Ω), between nodes A and B.
    pub r3: Scalar,
    /// Resistance r4 (Ω), from node C to ground.
    pub r4: Scalar,
    /// Resistance r5 (Ω), between nodes B and C.
    pub r5: Scalar,
}

/// Solved node voltages and the `r2` readout.
#[derive(Debug, Clone, PartialEq)]
pub struct NodalSolution {
    /// Stamped conductance rows, kept for the verbose trace (S).
    pub conductance_rows: [[Scalar; 3]; 3],
    /// Voltages at nodes A, B, C (V).
    pub node_voltages: [Scalar; 3],
    /// Voltage across `r2` (V), node A against ground.
    pub branch_voltage: Scalar,
    /// Current through `r2` (A).
    pub branch_current: Scalar,
}

/// Stamps the network and solves for the node voltages.
///
/// # Errors
///
/// Propagates [`SolveError`] from the linear solve; the fixed topology keeps
/// the conductance matrix non-singular for any positive resistances.
pub fn solve(p: &NodalParams) -> Result<NodalSolution, SolveError> {
    let mut builder = NodalBuilder::new(3);

    // Norton transform of the source u behind r1, injecting into node A.
    builder.stamp_resistor(Some(0), None, p.r1);
    builder.stamp_current_source(Some(0), None, p.u / p.r1);

    builder.stamp_resistor(Some(0), None, p.r2);
    builder.stamp_resistor(Some(0), Some(1), p.r3);
    builder.stamp_resistor(Some(1), Some(2), p.r5);
    builder.stamp_resistor(Some(2), None, p.r4);

    builder.stamp_current_source(Some(1), Some(2), p.i1);
    builder.stamp_current_source(Some(2), None, p.i2);

    let system = builder.build();
    let v = system.solve()?;

    let mut conductance_rows = [[0.0; 3]; 3];
    for (row, out) in conductance_rows.iter_mut().enumerate() {
        for (col, slot) in out.iter_mut().enumerate() {
            *slot = system.conductance[(row, col)];
        }
    }

    let branch_voltage = v[0];
    Ok(NodalSolution {
        conductance_rows,
        node_voltages: [v[0], v[1], v[2]],
        branch_voltage,
        branch_current: branch_voltage / p.r2,
    })
}

impl NodalSolution {
    /// Formatted one-line reading.
    #[must_use]
    pub fn reading(&self) -> String {
        format!(
            "Ur2 = {:.4} V, Ir2 = {:.4} A",
            self.branch_voltage, self.branch_current
        )
    }

    /// Intermediate quantities for verbose output.
    #[must_use]
    pub fn trace(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .conductance_rows
            .iter()
            .map(|row| format!("G row         [{:.6}, {:.6}, {:.6}]", row[0], row[1], row[2]))
            .collect();
        lines.push(format!(
            "Ua / Ub / Uc  {:.3} / {:.3} / {:.3} V",
            self.node_voltages[0], self.node_voltages[1], self.node_voltages[2]
        ));
        lines
    }
}
