//! Thevenin equivalent of a resistive bridge, seen from the `r3` branch.
//!
//! With `r3` lifted out, the remaining network is two voltage dividers whose
//! midpoint difference is the open-circuit voltage; the equivalent source
//! resistance is the sum of the two dividers' parallel halves.

use crate::circuits::reduction::{parallel, series};
use crate::math::Scalar;

/// Source and resistor values for the bridge network.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TheveninParams {
    /// Source voltage (V).
    pub u: Scalar,
    /// Resistance r1 (Ω).
    pub r1: Scalar,
    /// Resistance r2 (Ω).
    pub r2: Scalar,
    /// Resistance r3 (Ω), the load branch.
    pub r3: Scalar,
    /// Resistance r4 (Ω).
    pub r4: Scalar,
    /// Resistance r5 (Ω).
    pub r5: Scalar,
    /// Resistance r6 (Ω).
    pub r6: Scalar,
}

/// Solved Thevenin quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TheveninSolution {
    /// Equivalent source resistance seen by `r3` (Ω).
    pub thevenin_resistance: Scalar,
    /// Left divider midpoint voltage (V).
    pub left_divider_voltage: Scalar,
    /// Right divider midpoint voltage (V).
    pub right_divider_voltage: Scalar,
    /// Open-circuit (Thevenin) voltage across the lifted branch (V).
    pub thevenin_voltage: Scalar,
    /// Current through `r3` once reconnected (A).
    pub load_current: Scalar,
    /// Voltage across `r3` (V).
    pub load_voltage: Scalar,
}

/// Collapses the bridge to its Thevenin equivalent and reloads `r3`.
#[must_use]
pub fn solve(p: &TheveninParams) -> TheveninSolution {
    let left_branch = series(&[p.r4, p.r5]);
    let thevenin_resistance = parallel(&[p.r2, p.r6]) + parallel(&[left_branch, p.r1]);
    let left_divider_voltage = p.u * left_branch / (p.r1 + left_branch);
    let right_divider_voltage = p.u * p.r6 / (p.r2 + p.r6);
    let thevenin_voltage = left_divider_voltage - right_divider_voltage;

    let load_current = thevenin_voltage / (thevenin_resistance + p.r3);
    let load_voltage = thevenin_voltage * p.r3 / (p.r3 + thevenin_resistance);

    TheveninSolution {
        thevenin_resistance,
        left_divider_voltage,
        right_divider_voltage,
        thevenin_voltage,
        load_current,
        load_voltage,
    }
}

impl TheveninSolution {
    /// Formatted one-line reading.
    #[must_use]
    pub fn reading(&self) -> String {
        format!(
            "Ur3 = {:.4} V, Ir3 = {:7.4} mA",
            self.load_voltage,
            self.load_current * 1.0e3
        )
    }

    /// Intermediate quantities for verbose output.
    #[must_use]
    pub fn trace(&self) -> Vec<String> {
        vec![
            format!("R thevenin    {:.3} Ω", self.thevenin_resistance),
            format!("U left        {:.3} V", self.left_divider_voltage),
            format!("U right       {:.3} V", self.right_divider_voltage),
            format!("U thevenin    {:.3} V", self.thevenin_voltage),
            format!("I load        {:.6} A", self.load_current),
        ]
    }
}
