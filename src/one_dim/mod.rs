//! Piecewise-linear interpolation on a one-dimensional set of nodes,
//! either as point values or as the matrix of hat-function weights
//! that produces those values.

pub mod basis;
pub mod linear;

use num_traits::Float;

/// Extrapolation flag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extrap {
    Inside,
    OutsideLow,
    OutsideHigh,
}

/// A one-dimensional interpolator.
pub trait Interp1D<T: Float> {
    /// Evaluate the interpolant at an observation point.
    ///
    /// It is highly recommended to inline implementations of this function.
    fn eval_one(&self, loc: T) -> T;

    /// Evaluate the interpolant at a set of observation points.
    #[inline]
    fn eval(&self, locs: &[T], out: &mut [T]) -> Result<(), &'static str> {
        if locs.len() != out.len() {
            return Err("Length mismatch");
        }

        for i in 0..locs.len() {
            out[i] = self.eval_one(locs[i]);
        }

        Ok(())
    }

    /// Evaluate the interpolant at a set of observation points, allocating
    /// for the output values for convenience.
    #[cfg(feature = "std")]
    #[inline]
    fn eval_alloc(&self, locs: &[T]) -> Result<Vec<T>, &'static str> {
        let mut out = vec![T::zero(); locs.len()];
        self.eval(locs, &mut out)?;
        Ok(out)
    }
}

/// Normalized position of `x` on the segment from `x0` to `x1`;
/// 0 at `x0`, 1 at `x1`, and outside `[0, 1]` when extrapolating.
#[inline]
pub(crate) fn segment_t<T: Float>(x: T, x0: T, x1: T) -> T {
    (x - x0) / (x1 - x0)
}

/// Weighted average `(1 - t) * y0 + t * y1`.
#[inline]
pub(crate) fn blend<T: Float>(t: T, y0: T, y1: T) -> T {
    (T::one() - t) * y0 + t * y1
}
