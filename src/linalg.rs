//! Dense determinant and Cramer's-rule solvers.
//!
//! The worksheet problems assemble their linear systems symbolically from
//! circuit topology, so the solver favors the textbook closed form over
//! asymptotic efficiency: a cofactor-expansion determinant and Cramer's rule,
//! valid because every system here is tiny (n ≤ 4) and hand-verifiable.
//! Both operations are generic over [`nalgebra::ComplexField`], covering the
//! real (`f64`) DC systems and the complex (`Complex<f64>`) AC systems with
//! the same code path.

use nalgebra::{ComplexField, DMatrix, DVector};
use thiserror::Error;

use crate::math::Scalar;

/// Determinant magnitude below which a matrix is treated as singular.
pub const SINGULARITY_EPSILON: Scalar = 1.0e-12;

/// Error types for the dense Cramer solver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Matrix/vector shapes are inconsistent. This indicates a defect in the
    /// calling formulation, not bad runtime data.
    #[error("dimension mismatch: {rows}x{cols} matrix with length-{rhs_len} right-hand side")]
    DimensionMismatch {
        /// Matrix row count.
        rows: usize,
        /// Matrix column count.
        cols: usize,
        /// Right-hand-side length.
        rhs_len: usize,
    },
    /// Determinant magnitude fell below the singularity tolerance; the system
    /// has no unique solution.
    #[error("matrix is singular within tolerance")]
    SingularMatrix,
}

/// Determinant by cofactor expansion along the first row.
///
/// Cost is factorial in `n`; intended for the small fixed-size systems this
/// crate assembles, not for general matrices.
///
/// # Panics
///
/// Panics if `matrix` is empty or not square.
#[must_use]
pub fn determinant<T: ComplexField>(matrix: &DMatrix<T>) -> T {
    let n = matrix.nrows();
    assert!(
        n > 0 && matrix.ncols() == n,
        "determinant requires a non-empty square matrix"
    );
    cofactor_expand(matrix)
}

fn cofactor_expand<T: ComplexField>(matrix: &DMatrix<T>) -> T {
    let n = matrix.nrows();
    if n == 1 {
        return matrix[(0, 0)].clone();
    }
    let mut acc = T::zero();
    for col in 0..n {
        let minor = matrix.clone().remove_row(0).remove_column(col);
        let term = matrix[(0, col)].clone() * cofactor_expand(&minor);
        if col % 2 == 0 {
            acc += term;
        } else {
            acc -= term;
        }
    }
    acc
}

/// Solves `A x = b` by Cramer's rule with [`SINGULARITY_EPSILON`].
///
/// # Errors
///
/// Returns [`SolveError::DimensionMismatch`] when `matrix` is not square or
/// `rhs` has the wrong length, and [`SolveError::SingularMatrix`] when the
/// determinant magnitude is at or below the tolerance. A near-zero
/// determinant is rejected rather than divided through, so the solution never
/// contains `inf` or `nan`.
pub fn solve_cramer<T: ComplexField>(
    matrix: &DMatrix<T>,
    rhs: &DVector<T>,
) -> Result<DVector<T>, SolveError> {
    solve_cramer_with_epsilon(matrix, rhs, nalgebra::convert(SINGULARITY_EPSILON))
}

/// Solves `A x = b` by Cramer's rule, treating `|det A| <= epsilon` as
/// singular.
///
/// Each unknown is the ratio of two determinants: the matrix with the
/// corresponding column replaced by `rhs`, over the matrix itself.
///
/// # Errors
///
/// Same conditions as [`solve_cramer`].
pub fn solve_cramer_with_epsilon<T: ComplexField>(
    matrix: &DMatrix<T>,
    rhs: &DVector<T>,
    epsilon: T::RealField,
) -> Result<DVector<T>, SolveError> {
    let n = matrix.nrows();
    if matrix.ncols() != n || rhs.len() != n {
        return Err(SolveError::DimensionMismatch {
            rows: matrix.nrows(),
            cols: matrix.ncols(),
            rhs_len: rhs.len(),
        });
    }

    let det = determinant(matrix);
    if det.clone().modulus() <= epsilon {
        return Err(SolveError::SingularMatrix);
    }

    let unknowns = (0..n).map(|d| {
        let mut replaced = matrix.clone();
        replaced.set_column(d, rhs);
        determinant(&replaced) / det.clone()
    });
    Ok(DVector::from_iterator(n, unknowns))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use num_complex::Complex;

    use super::*;
    use crate::math::CScalar;

    // SplitMix64 mixer, enough to derive reproducible test matrices.
    fn splitmix64(state: &mut u64) -> u64 {
        *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = *state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    fn uniform(state: &mut u64) -> Scalar {
        (splitmix64(state) >> 11) as Scalar / (1u64 << 53) as Scalar * 2.0 - 1.0
    }

    #[test]
    fn identity_determinants_are_one() {
        for n in 1..=4 {
            let real = DMatrix::<Scalar>::identity(n, n);
            assert_relative_eq!(determinant(&real), 1.0, epsilon = 1.0e-9);

            let complex = DMatrix::<CScalar>::identity(n, n);
            let d = determinant(&complex);
            assert_relative_eq!(d.re, 1.0, epsilon = 1.0e-9);
            assert_relative_eq!(d.im, 0.0, epsilon = 1.0e-9);
        }
    }

    #[test]
    fn small_real_determinants_match_hand_values() {
        let two = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_relative_eq!(determinant(&two), -2.0, epsilon = 1.0e-9);

        let three = DMatrix::from_row_slice(3, 3, &[2.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 3.0, 4.0]);
        assert_relative_eq!(determinant(&three), 11.0, epsilon = 1.0e-9);
    }

    #[test]
    fn diagonal_system_solves_exactly() {
        let a = DMatrix::from_row_slice(3, 3, &[2.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 4.0]);
        let b = DVector::from_vec(vec![4.0, 9.0, 8.0]);
        let x = solve_cramer(&a, &b).expect("non-singular");
        assert_relative_eq!(x[0], 2.0, epsilon = 1.0e-9);
        assert_relative_eq!(x[1], 3.0, epsilon = 1.0e-9);
        assert_relative_eq!(x[2], 2.0, epsilon = 1.0e-9);
    }

    #[test]
    fn complex_impedance_system_satisfies_substitution() {
        // Diagonally dominant loop system from r = 1, z_c = -j, z_l = j.
        let r = CScalar::new(1.0, 0.0);
        let zc = CScalar::new(0.0, -1.0);
        let zl = CScalar::new(0.0, 1.0);
        let a = DMatrix::from_row_slice(
            3,
            3,
            &[
                r + r + zl,
                -r,
                CScalar::default(),
                -r,
                r + r + zc,
                -r,
                CScalar::default(),
                -r,
                r + r + zl,
            ],
        );
        let b = DVector::from_vec(vec![
            CScalar::new(1.0, 0.0),
            CScalar::new(0.0, 0.0),
            CScalar::new(2.0, 0.0),
        ]);

        let x = solve_cramer(&a, &b).expect("non-singular");
        let residual = &a * &x - &b;
        for k in 0..3 {
            assert_relative_eq!(residual[k].norm(), 0.0, epsilon = 1.0e-9);
        }
    }

    #[test]
    fn zero_row_is_singular_not_nan() {
        let a = DMatrix::from_row_slice(3, 3, &[0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        let b = DVector::from_vec(vec![1.0, 1.0, 1.0]);
        assert_eq!(solve_cramer(&a, &b), Err(SolveError::SingularMatrix));
    }

    #[test]
    fn wrong_rhs_length_is_a_dimension_mismatch() {
        let a = DMatrix::<Scalar>::identity(3, 3);
        let b = DVector::from_vec(vec![1.0, 2.0]);
        assert_eq!(
            solve_cramer(&a, &b),
            Err(SolveError::DimensionMismatch {
                rows: 3,
                cols: 3,
                rhs_len: 2,
            })
        );
    }

    #[test]
    fn real_roundtrip_over_random_systems() {
        let mut state = 0x1234_5678_u64;
        for n in 1..=4 {
            // Diagonal dominance keeps every generated matrix non-singular.
            let mut a = DMatrix::from_fn(n, n, |_, _| uniform(&mut state));
            for i in 0..n {
                a[(i, i)] += n as Scalar + 1.0;
            }
            let b = DVector::from_fn(n, |_, _| uniform(&mut state));

            let x = solve_cramer(&a, &b).expect("diagonally dominant");
            let residual = &a * &x - &b;
            for k in 0..n {
                assert_relative_eq!(residual[k], 0.0, epsilon = 1.0e-6);
            }
        }
    }

    #[test]
    fn complex_roundtrip_over_random_systems() {
        let mut state = 0x9abc_def0_u64;
        for n in 1..=4 {
            let mut a = DMatrix::from_fn(n, n, |_, _| {
                Complex::new(uniform(&mut state), uniform(&mut state))
            });
            for i in 0..n {
                a[(i, i)] += Complex::new(n as Scalar + 1.0, 0.0);
            }
            let b = DVector::from_fn(n, |_, _| {
                Complex::new(uniform(&mut state), uniform(&mut state))
            });

            let x = solve_cramer(&a, &b).expect("diagonally dominant");
            let residual = &a * &x - &b;
            for k in 0..n {
                assert_relative_eq!(residual[k].norm(), 0.0, epsilon = 1.0e-6);
            }
        }
    }
}
