//! Three-loop AC mesh analysis with complex impedances.
//!
//! One KVL equation per loop at ω = 2πf, impedances taken from the lumped
//! component models; shared branches enter the off-diagonals with opposite
//! sign. The complex 3×3 system goes through the Cramer core, and the
//! readout is the voltage phasor across `l2`, carried by the difference of
//! its two adjacent loop currents.

use nalgebra::{DMatrix, DVector};

use crate::circuits::component::{Capacitor, Component, Inductor, Resistor, VoltageSource};
use crate::linalg::{solve_cramer, SolveError};
use crate::math::{angular_frequency, CScalar, Scalar};

/// Sources and element values for the three-loop network.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshParams {
    /// First source amplitude (V).
    pub u1: Scalar,
    /// Second source amplitude (V).
    pub u2: Scalar,
    /// Resistance r1 (Ω).
    pub r1: Scalar,
    /// Resistance r2 (Ω).
    pub r2: Scalar,
    /// Inductance l1 (H).
    pub l1: Scalar,
    /// Inductance l2 (H), the measured branch.
    pub l2: Scalar,
    /// Capacitance c1 (F).
    pub c1: Scalar,
    /// Capacitance c2 (F).
    pub c2: Scalar,
    /// Source frequency (Hz).
    pub frequency: Scalar,
}

/// Solved loop currents and the `l2` readout.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshSolution {
    /// Angular frequency ω (rad/s).
    pub omega: Scalar,
    /// Branch impedances `[z_r1, z_r2, z_l1, z_l2, z_c1, z_c2]` (Ω).
    pub impedances: [CScalar; 6],
    /// Loop current phasors (A).
    pub loop_currents: [CScalar; 3],
    /// Current through `l2` (A), difference of the adjacent loop currents.
    pub inductor_current: CScalar,
    /// Voltage phasor across `l2` (V).
    pub inductor_voltage: CScalar,
    /// Voltage magnitude |U_l2| (V).
    pub magnitude: Scalar,
    /// Voltage phase (rad).
    pub phase: Scalar,
}

/// Assembles the loop system at the source frequency and solves it.
///
/// # Errors
///
/// Propagates [`SolveError`] from the linear solve; resonance-free element
/// values keep the loop matrix non-singular.
pub fn solve(p: &MeshParams) -> Result<MeshSolution, SolveError> {
    let omega = angular_frequency(p.frequency);

    let z_r1 = Resistor::new("R1", p.r1).impedance(omega);
    let z_r2 = Resistor::new("R2", p.r2).impedance(omega);
    let z_l1 = Inductor::new("L1", p.l1).impedance(omega);
    let z_l2 = Inductor::new("L2", p.l2).impedance(omega);
    let z_c1 = Capacitor::new("C1", p.c1).impedance(omega);
    let z_c2 = Capacitor::new("C2", p.c2).impedance(omega);

    let e1 = VoltageSource::new("U1", p.u1, 0.0).phasor();
    let e2 = VoltageSource::new("U2", p.u2, 0.0).phasor();

    // KVL loop equations: self-impedance on the diagonal, shared branches
    // negative off-diagonal, source drops on the right-hand side.
    let matrix = DMatrix::from_row_slice(
        3,
        3,
        &[
            z_r1 + z_c1 + z_l2,
            -z_l2,
            -z_c1,
            -z_l2,
            z_r2 + z_c2 + z_l2,
            -z_r2,
            -z_c1,
            -z_r2,
            z_r2 + z_c1 + z_l1,
        ],
    );
    let rhs = DVector::from_vec(vec![-e1, -e2, CScalar::default()]);

    let x = solve_cramer(&matrix, &rhs)?;
    let inductor_current = x[0] - x[1];
    let inductor_voltage = inductor_current * z_l2;

    Ok(MeshSolution {
        omega,
        impedances: [z_r1, z_r2, z_l1, z_l2, z_c1, z_c2],
        loop_currents: [x[0], x[1], x[2]],
        inductor_current,
        inductor_voltage,
        magnitude: inductor_voltage.norm(),
        phase: inductor_voltage.arg(),
    })
}

fn fmt_complex(z: CScalar) -> String {
    format!("{:.4}{:+.4}j", z.re, z.im)
}

impl MeshSolution {
    /// Formatted one-line reading.
    #[must_use]
    pub fn reading(&self) -> String {
        format!(
            "|Ul2| = {:.4} ({}) V, phi = {:.4} rad ({:.2}°)",
            self.magnitude,
            fmt_complex(self.inductor_voltage),
            self.phase,
            self.phase.to_degrees()
        )
    }

    /// Intermediate quantities for verbose output.
    #[must_use]
    pub fn trace(&self) -> Vec<String> {
        let [z_r1, z_r2, z_l1, z_l2, z_c1, z_c2] = self.impedances;
        let [i1, i2, i3] = self.loop_currents;
        vec![
            format!("omega         {:.3} rad/s", self.omega),
            format!("Zr            {} / {} Ω", fmt_complex(z_r1), fmt_complex(z_r2)),
            format!("Zl            {} / {} Ω", fmt_complex(z_l1), fmt_complex(z_l2)),
            format!("Zc            {} / {} Ω", fmt_complex(z_c1), fmt_complex(z_c2)),
            format!(
                "loop currents {} / {} / {} A",
                fmt_complex(i1),
                fmt_complex(i2),
                fmt_complex(i3)
            ),
            format!("Il2           {} A", fmt_complex(self.inductor_current)),
            format!("Ul2           {} V", fmt_complex(self.inductor_voltage)),
        ]
    }
}
