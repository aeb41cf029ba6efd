//! Scalar reduction helpers for resistive networks.

use crate::math::Scalar;

/// Equivalent resistance of resistors connected in series.
#[must_use]
pub fn series(resistances: &[Scalar]) -> Scalar {
    resistances.iter().sum()
}

/// Equivalent resistance of resistors connected in parallel, folded pairwise
/// via product-over-sum. A single resistor reduces to itself;
/// `parallel(&[6.0, 3.0])` is `2.0`.
///
/// # Panics
///
/// Panics on an empty slice.
#[must_use]
pub fn parallel(resistances: &[Scalar]) -> Scalar {
    assert!(
        !resistances.is_empty(),
        "parallel reduction needs at least one resistor"
    );
    resistances[1..]
        .iter()
        .fold(resistances[0], |acc, r| acc * r / (acc + r))
}

/// Transforms a delta (triangle) of resistances into the equivalent wye
/// (star). `r_ab`, `r_bc`, `r_ca` are the triangle sides between corners
/// `a`, `b`, `c`; the result is the star resistance attached to each corner,
/// `[r_a, r_b, r_c]`.
#[must_use]
pub fn delta_to_wye(r_ab: Scalar, r_bc: Scalar, r_ca: Scalar) -> [Scalar; 3] {
    let total = r_ab + r_bc + r_ca;
    [
        r_ab * r_ca / total,
        r_ab * r_bc / total,
        r_bc * r_ca / total,
    ]
}
