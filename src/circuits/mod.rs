//! Circuit primitives shared by the worksheet problems.

/// Lumped component definitions and traits.
pub mod component;
/// Scalar series/parallel/delta-wye reduction helpers.
pub mod reduction;
/// Conductance stamping helpers for DC nodal analysis.
pub mod stamp;

pub use component::{Capacitor, Component, Inductor, Resistor, VoltageSource};
pub use reduction::{delta_to_wye, parallel, series};
pub use stamp::{NodalBuilder, NodalSystem};
