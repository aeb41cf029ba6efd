//! Convenience re-exports for driving the worksheet from code.

pub use crate::circuits::component::{Capacitor, Component, Inductor, Resistor, VoltageSource};
pub use crate::circuits::reduction::{delta_to_wye, parallel, series};
pub use crate::circuits::stamp::{Node, NodalBuilder, NodalSystem};
pub use crate::errors::CircuitLabError;
pub use crate::linalg::{
    determinant, solve_cramer, solve_cramer_with_epsilon, SolveError, SINGULARITY_EPSILON,
};
pub use crate::math::{angular_frequency, phasor, CScalar, Scalar};
pub use crate::select::{preset, GroupSelector, SelectionError, TaskCode, TaskRange, PRESETS};
pub use crate::units::{Ampere, Current, Farad, Henry, Impedance, Ohm, Quantity, Unit, Volt, Voltage};
pub use crate::worksheet::{evaluate, Group, Task, TaskReport};
