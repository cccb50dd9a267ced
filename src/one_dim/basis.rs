//! Hat-function basis of the piecewise-linear interpolant.
//!
//! Basis function `j` is 1 at node `j`, falls linearly to 0 at the neighboring
//! nodes, and is 0 beyond them. The first and last basis functions are
//! half-hats that keep their slope when extrapolating outside the grid.
//!
//! ```rust
//! use pwl_interp::one_dim::basis::pwl_basis_1d;
//!
//! let xd = [0.0_f64, 2.0, 5.0, 10.0];
//! let xi = [1.0_f64, -1.0];
//!
//! // One row of weights per observation point
//! let mut b = [0.0; 8];
//! pwl_basis_1d(&xd, &xi, &mut b).unwrap();
//!
//! assert_eq!(&b[..4], &[0.5, 0.5, 0.0, 0.0]);
//! assert_eq!(&b[4..], &[1.5, 0.0, 0.0, 0.0]);
//! ```

use num_traits::Float;

use super::segment_t;

/// Evaluate each hat basis function defined by nodes `xd` at each point of `xi`.
///
/// The output is an `xi.len()` by `xd.len()` matrix in C ordering,
/// `out[i * xd.len() + j]` being basis function `j` at `xi[i]`.
///
/// Inside `[xd[0], xd[nd - 1]]` each row sums to one, and its dot product with
/// the node values is the interpolant from [`super::linear::pwl_value_1d`].
/// Outside, only the boundary basis function is nonzero.
///
/// Assumes `xd` is monotonically _increasing_. This is not checked.
///
/// # Errors
/// * If `xd` is empty
/// * If `out` does not have `xi.len() * xd.len()` entries
pub fn pwl_basis_1d<T: Float>(xd: &[T], xi: &[T], out: &mut [T]) -> Result<(), &'static str> {
    let nd = xd.len();
    if nd == 0 {
        return Err("Need at least one data point");
    }
    if out.len() != xi.len() * nd {
        return Err("Length mismatch");
    }

    for (i, row) in out.chunks_exact_mut(nd).enumerate() {
        fill_row(xd, xi[i], row);
    }

    Ok(())
}

/// Evaluate basis functions, allocating a new Vec for the output matrix.
#[cfg(feature = "std")]
pub fn pwl_basis_1d_alloc<T: Float>(xd: &[T], xi: &[T]) -> Result<Vec<T>, &'static str> {
    let mut out = vec![T::zero(); xi.len() * xd.len()];
    pwl_basis_1d(xd, xi, &mut out)?;
    Ok(out)
}

/// Write the weight of every node at `x` to `row`.
/// `row` and `xd` must have the same nonzero length.
#[inline]
pub(crate) fn fill_row<T: Float>(xd: &[T], x: T, row: &mut [T]) {
    let nd = xd.len();
    row.fill(T::zero());

    if nd == 1 {
        row[0] = T::one();
        return;
    }

    // First matching rule wins
    for j in 0..nd {
        if j == 0 && x <= xd[0] {
            row[j] = T::one() - segment_t(x, xd[0], xd[1]);
        } else if j == nd - 1 && xd[j] <= x {
            row[j] = segment_t(x, xd[j - 1], xd[j]);
        } else if j > 0 && xd[j - 1] < x && x <= xd[j] {
            // Rising edge
            row[j] = segment_t(x, xd[j - 1], xd[j]);
        } else if j < nd - 1 && xd[j] <= x && x < xd[j + 1] {
            // Falling edge
            row[j] = T::one() - segment_t(x, xd[j], xd[j + 1]);
        }
    }
}
