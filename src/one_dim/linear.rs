//! Piecewise-linear interpolation / extrapolation of node values.
//!
//! ```rust
//! use pwl_interp::one_dim::linear::pwl_value_1d;
//!
//! // Samples of (x - 1)(x - 4)(x - 7)
//! let xd = [0.0_f64, 2.0, 5.0, 10.0];
//! let yd = [-28.0_f64, 10.0, -8.0, 162.0];
//!
//! let xi = [1.0_f64, 11.0];
//! let mut yi = [0.0; 2];
//! pwl_value_1d(&xd, &yd, &xi, &mut yi).unwrap();
//!
//! assert_eq!(yi[0], -9.0);
//! assert!((yi[1] - 196.0).abs() < 1e-12);
//! ```

use num_traits::Float;

use super::{basis, blend, segment_t, Extrap, Interp1D};
use crate::bracket::bracket5;

/// Evaluate the piecewise-linear interpolant through `(xd, yd)` at each of `xi`,
/// writing the results to `yi`.
///
/// Points at or below the first node extrapolate along the first segment,
/// and points at or above the second-to-last node use the last segment.
/// The remaining points are located by a linear scan over the segments.
/// A single node gives a constant interpolant.
///
/// Assumes `xd` is monotonically _increasing_. This is not checked; an unordered
/// grid gives finite but meaningless values. If no segment contains an
/// observation point, which only happens when it or a node is NaN,
/// its output is set to zero.
///
/// # Errors
/// * If `xd` and `yd` differ in length
/// * If `xi` and `yi` differ in length
/// * If `xd` is empty
pub fn pwl_value_1d<T: Float>(
    xd: &[T],
    yd: &[T],
    xi: &[T],
    yi: &mut [T],
) -> Result<(), &'static str> {
    let nd = xd.len();
    if nd != yd.len() || xi.len() != yi.len() {
        return Err("Length mismatch");
    }
    if nd == 0 {
        return Err("Need at least one data point");
    }

    if nd == 1 {
        yi.fill(yd[0]);
        return Ok(());
    }

    for i in 0..xi.len() {
        yi[i] = value_scan(xd, yd, xi[i]);
    }

    Ok(())
}

/// Evaluate interpolant, allocating a new Vec for the output.
#[cfg(feature = "std")]
pub fn pwl_value_1d_alloc<T: Float>(xd: &[T], yd: &[T], xi: &[T]) -> Result<Vec<T>, &'static str> {
    let mut yi = vec![T::zero(); xi.len()];
    pwl_value_1d(xd, yd, xi, &mut yi)?;
    Ok(yi)
}

/// Value at a single point for `nd >= 2`, with the boundary segments
/// checked before the interior scan.
#[inline]
fn value_scan<T: Float>(xd: &[T], yd: &[T], x: T) -> T {
    let nd = xd.len();

    if x <= xd[0] {
        let t = segment_t(x, xd[0], xd[1]);
        return blend(t, yd[0], yd[1]);
    }

    if x >= xd[nd - 2] {
        let t = segment_t(x, xd[nd - 2], xd[nd - 1]);
        return blend(t, yd[nd - 2], yd[nd - 1]);
    }

    for k in 1..nd {
        if xd[k - 1] <= x && x <= xd[k] {
            let t = segment_t(x, xd[k - 1], xd[k]);
            return blend(t, yd[k - 1], yd[k]);
        }
    }

    T::zero()
}

/// Piecewise-linear interpolator / extrapolator over borrowed nodes and values.
///
/// Evaluates the same interpolant as [`pwl_value_1d`], but locates the
/// interior segment by bisection, so a single evaluation costs
/// O(log2(nodes)) instead of O(nodes).
///
/// Assumes `xd` is monotonically _increasing_. Checking this is expensive, and is
/// left to the user; see [`crate::bracket::ascends_strictly`].
#[derive(Clone, Copy, Debug)]
pub struct PiecewiseLinear1D<'a, T: Float> {
    /// Node locations
    xd: &'a [T],

    /// Values at each node
    yd: &'a [T],
}

impl<'a, T: Float> PiecewiseLinear1D<'a, T> {
    /// # Errors
    /// * If `xd` and `yd` differ in length
    /// * If `xd` is empty
    pub fn new(xd: &'a [T], yd: &'a [T]) -> Result<Self, &'static str> {
        if xd.len() != yd.len() {
            return Err("Length mismatch");
        }
        if xd.is_empty() {
            return Err("Need at least one data point");
        }

        Ok(Self { xd, yd })
    }

    /// Node locations, as borrowed at construction
    pub fn nodes(&self) -> &'a [T] {
        self.xd
    }

    /// Values at each node
    pub fn values(&self) -> &'a [T] {
        self.yd
    }

    /// Get the index of the lower node of the segment used at `loc`,
    /// and whether `loc` is outside the node range.
    ///
    /// Returns `None` for a single-node grid, or if no segment holds `loc`.
    #[inline]
    pub fn locate(&self, loc: T) -> Option<(usize, Extrap)> {
        let nd = self.xd.len();
        if nd < 2 {
            return None;
        }

        if loc <= self.xd[0] {
            let extrap = match loc < self.xd[0] {
                true => Extrap::OutsideLow,
                false => Extrap::Inside,
            };
            return Some((0, extrap));
        }

        if loc >= self.xd[nd - 2] {
            let extrap = match loc > self.xd[nd - 1] {
                true => Extrap::OutsideHigh,
                false => Extrap::Inside,
            };
            return Some((nd - 2, extrap));
        }

        bracket5(self.xd, loc).map(|b| (b, Extrap::Inside))
    }

    /// Evaluate every hat basis function at `loc`, writing one weight per node to `row`.
    ///
    /// # Errors
    /// * If `row` does not have one entry per node
    pub fn basis_one(&self, loc: T, row: &mut [T]) -> Result<(), &'static str> {
        if row.len() != self.xd.len() {
            return Err("Length mismatch");
        }

        basis::fill_row(self.xd, loc, row);

        Ok(())
    }
}

impl<'a, T: Float> Interp1D<T> for PiecewiseLinear1D<'a, T> {
    #[inline]
    fn eval_one(&self, loc: T) -> T {
        if self.xd.len() == 1 {
            return self.yd[0];
        }

        match self.locate(loc) {
            Some((i, _)) => {
                let t = segment_t(loc, self.xd[i], self.xd[i + 1]);
                blend(t, self.yd[i], self.yd[i + 1])
            }
            None => T::zero(),
        }
    }
}
