#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Shared numerical primitives (scalar aliases, phasor helpers).
pub mod math;
/// Strongly typed unit helpers and quantity abstractions.
pub mod units;
/// Dense determinant and Cramer's-rule solvers over real and complex fields.
pub mod linalg;
/// Circuit components, reduction helpers, and nodal stamping.
pub mod circuits;
/// The five worksheet problems, parameter tables, and dispatch.
pub mod worksheet;
/// Task-code, range, and preset parsing for the command-line surface.
pub mod select;
/// Error types shared between submodules.
pub mod errors;

/// Common exports for downstream code.
pub mod prelude;
