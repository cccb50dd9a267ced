//! Piecewise-linear interpolation/extrapolation in one dimension, no-std and no-alloc compatible.
//!
//! Given nodes `xd` (monotonically increasing) and values `yd`, the interpolant is the
//! polyline through `(xd[j], yd[j])`, continued past the first and last node along the
//! first and last segment. It can be evaluated either directly at a set of observation
//! points, or as the matrix of hat-function weights whose product with `yd` gives those
//! values inside the grid.
//!
//! | Method                            | RAM       | Cost per observation point   |
//! |-----------------------------------|-----------|------------------------------|
//! | one_dim::linear::pwl_value_1d     | O(1)      | O(nodes), linear scan        |
//! | one_dim::linear::PiecewiseLinear1D| O(1)      | O(log2(nodes)), bisection    |
//! | one_dim::basis::pwl_basis_1d      | O(1)      | O(nodes), one output row     |
//!
//! # Example
//! ```rust
//! use pwl_interp::{pwl_basis_1d, pwl_value_1d, Interp1D, PiecewiseLinear1D};
//!
//! // Nodes and values
//! let xd = [0.0_f64, 2.0, 5.0, 10.0];
//! let yd = [-28.0_f64, 10.0, -8.0, 162.0];
//!
//! // Observation points to interpolate/extrapolate
//! let xi = [-1.0_f64, 1.0, 7.5];
//!
//! // Storage for output
//! let mut yi = [0.0; 3];
//! let mut b = [0.0; 12];
//!
//! // Point values, by linear scan
//! pwl_value_1d(&xd, &yd, &xi, &mut yi).unwrap();
//!
//! // Same values, by bisection
//! let mut yi_bisect = [0.0; 3];
//! PiecewiseLinear1D::new(&xd, &yd).unwrap().eval(&xi, &mut yi_bisect).unwrap();
//! assert_eq!(yi, yi_bisect);
//!
//! // Basis weights, one row of 4 per observation point
//! pwl_basis_1d(&xd, &xi, &mut b).unwrap();
//! assert_eq!(&b[4..8], &[0.5, 0.5, 0.0, 0.0]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

pub mod bracket;
pub use bracket::{ascends_strictly, bracket5, bracket_clamped};

pub mod one_dim;
pub use one_dim::{
    basis::pwl_basis_1d, linear::pwl_value_1d, linear::PiecewiseLinear1D, Extrap, Interp1D,
};

pub mod problems;

#[cfg(feature = "std")]
pub mod utils;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;
