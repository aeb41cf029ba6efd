//! First-order RL step response in closed form.
//!
//! No linear solve: switching a DC source onto a series RL branch gives
//! `i(t) = U/R + (I0 − U/R) · exp(−(R/L) · t)` directly.

use crate::math::Scalar;

/// Source and element values for the RL branch.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RlStepParams {
    /// Source voltage (V).
    pub u: Scalar,
    /// Inductance (H).
    pub l: Scalar,
    /// Resistance (Ω).
    pub r: Scalar,
    /// Inductor current at the switching instant (A).
    pub i0: Scalar,
}

/// Closed-form RL step response `i(t) = steady + natural · exp(rate · t)`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RlStepResponse {
    /// Forced (steady-state) current `U/R` (A).
    pub steady_current: Scalar,
    /// Natural-response amplitude `I0 − U/R` (A).
    pub natural_amplitude: Scalar,
    /// Exponential rate `−R/L` (1/s).
    pub decay_rate: Scalar,
}

/// Evaluates the closed-form response coefficients.
#[must_use]
pub fn solve(p: &RlStepParams) -> RlStepResponse {
    let steady_current = p.u / p.r;
    RlStepResponse {
        steady_current,
        natural_amplitude: p.i0 - steady_current,
        decay_rate: -p.r / p.l,
    }
}

impl RlStepResponse {
    /// Inductor current at time `t` after switching (A).
    #[must_use]
    pub fn current_at(&self, t: Scalar) -> Scalar {
        self.steady_current + self.natural_amplitude * (self.decay_rate * t).exp()
    }

    /// Time constant τ = L/R (s).
    #[must_use]
    pub fn time_constant(&self) -> Scalar {
        -1.0 / self.decay_rate
    }

    /// Formatted one-line reading.
    #[must_use]
    pub fn reading(&self) -> String {
        format!(
            "i(t) = {:.4} + {:.4} * exp({:.4} * t) A",
            self.steady_current, self.natural_amplitude, self.decay_rate
        )
    }

    /// Intermediate quantities for verbose output.
    #[must_use]
    pub fn trace(&self) -> Vec<String> {
        vec![
            format!("I steady      {:.6} A", self.steady_current),
            format!("tau           {:.6} s", self.time_constant()),
            format!("i(tau)        {:.6} A", self.current_at(self.time_constant())),
        ]
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::worksheet::{tables, Group};

    #[test]
    fn group_a_coefficients() {
        let s = solve(&tables::transient(Group::A));
        assert_relative_eq!(s.steady_current, 4.0, epsilon = 1.0e-12);
        assert_relative_eq!(s.natural_amplitude, 12.0, epsilon = 1.0e-12);
        assert_relative_eq!(s.decay_rate, -0.2, epsilon = 1.0e-12);
    }

    #[test]
    fn response_starts_at_the_initial_current() {
        let p = tables::transient(Group::E);
        let s = solve(&p);
        assert_relative_eq!(s.current_at(0.0), p.i0, epsilon = 1.0e-12);
    }

    #[test]
    fn response_settles_to_the_forced_current() {
        let p = tables::transient(Group::H);
        let s = solve(&p);
        let settled = s.current_at(20.0 * s.time_constant());
        assert_relative_eq!(settled, p.u / p.r, epsilon = 1.0e-6);
    }

    #[test]
    fn reading_prints_the_closed_form() {
        let s = solve(&tables::transient(Group::A));
        assert_eq!(s.reading(), "i(t) = 4.0000 + 12.0000 * exp(-0.2000 * t) A");
    }
}
