//! Two-source resistive ladder reduced by series/parallel and delta-wye steps.
//!
//! The network is collapsed around `r6`: the inner branch `r2 + (r3 ∥ r4)`
//! closes a delta with `r1` and `r5`, which the wye transform opens into
//! three star legs. What remains is a plain series/parallel ladder, a total
//! current, and a current divider onto the `r6` branch.

use crate::circuits::reduction::{delta_to_wye, parallel};
use crate::math::Scalar;

/// Source and resistor values for the ladder network.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LadderParams {
    /// First source voltage (V).
    pub u1: Scalar,
    /// Second source voltage (V).
    pub u2: Scalar,
    /// Resistance r1 (Ω).
    pub r1: Scalar,
    /// Resistance r2 (Ω).
    pub r2: Scalar,
    /// Resistance r3 (Ω).
    pub r3: Scalar,
    /// Resistance r4 (Ω).
    pub r4: Scalar,
    /// Resistance r5 (Ω).
    pub r5: Scalar,
    /// Resistance r6 (Ω), the measured branch.
    pub r6: Scalar,
    /// Resistance r7 (Ω).
    pub r7: Scalar,
    /// Resistance r8 (Ω).
    pub r8: Scalar,
}

/// Solved ladder quantities, intermediate steps included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LadderSolution {
    /// Inner branch `r2 + (r3 ∥ r4)` (Ω).
    pub inner_branch: Scalar,
    /// Wye legs replacing the `(r1, r5, inner)` delta (Ω).
    pub star: [Scalar; 3],
    /// Lower path after the transform, star leg plus `r7` (Ω).
    pub lower_path: Scalar,
    /// Upper path after the transform, star leg plus `r6` (Ω).
    pub upper_path: Scalar,
    /// Equivalent resistance seen by the series sources (Ω).
    pub equivalent_resistance: Scalar,
    /// Total source current (A).
    pub total_current: Scalar,
    /// Current through `r6` (A).
    pub branch_current: Scalar,
    /// Voltage across `r6` (V).
    pub branch_voltage: Scalar,
}

/// Reduces the ladder and reads current and voltage on `r6`.
#[must_use]
pub fn solve(p: &LadderParams) -> LadderSolution {
    let inner_branch = p.r2 + parallel(&[p.r3, p.r4]);
    let star = delta_to_wye(p.r1, p.r5, inner_branch);
    let [star_a, star_b, star_c] = star;

    let lower_path = star_b + p.r7;
    let upper_path = star_c + p.r6;
    let equivalent_resistance = star_a + parallel(&[upper_path, lower_path]) + p.r8;
    let total_current = (p.u1 + p.u2) / equivalent_resistance;
    let branch_current = total_current * lower_path / (upper_path + lower_path);

    LadderSolution {
        inner_branch,
        star,
        lower_path,
        upper_path,
        equivalent_resistance,
        total_current,
        branch_current,
        branch_voltage: branch_current * p.r6,
    }
}

impl LadderSolution {
    /// Formatted one-line reading.
    #[must_use]
    pub fn reading(&self) -> String {
        format!(
            "U6 = {:.4} V, I6 = {:.4} mA",
            self.branch_voltage,
            self.branch_current * 1.0e3
        )
    }

    /// Intermediate quantities for verbose output.
    #[must_use]
    pub fn trace(&self) -> Vec<String> {
        vec![
            format!("inner branch  {:.3} Ω", self.inner_branch),
            format!(
                "wye legs      {:.3} / {:.3} / {:.3} Ω",
                self.star[0], self.star[1], self.star[2]
            ),
            format!("upper path    {:.3} Ω", self.upper_path),
            format!("lower path    {:.3} Ω", self.lower_path),
            format!("R equivalent  {:.3} Ω", self.equivalent_resistance),
            format!("I total       {:.6} A", self.total_current),
            format!("I6            {:.6} A", self.branch_current),
        ]
    }
}
