//! Bisection search for the grid segment containing an observation point.
//!
//! All methods assume the node sequence is monotonically _increasing_.
//! Checking this is O(n), and is left to the user; see [`ascends_strictly`].

use num_traits::Float;

/// Find `b` such that `xd[b] <= xi <= xd[b + 1]` by bisection.
///
/// Returns `None` if `xi` is outside `[xd[0], xd[n - 1]]`, or if there are
/// fewer than two nodes to bracket with. An exact hit on an interior node
/// resolves to the segment starting at that node; a hit on the last node
/// resolves to the last segment.
///
/// ```rust
/// use pwl_interp::bracket::bracket5;
///
/// let xd = [0.0_f64, 2.0, 5.0, 10.0];
/// assert_eq!(bracket5(&xd, 3.0), Some(1));
/// assert_eq!(bracket5(&xd, 2.0), Some(1));
/// assert_eq!(bracket5(&xd, 10.0), Some(2));
/// assert_eq!(bracket5(&xd, 10.5), None);
/// ```
#[inline]
pub fn bracket5<T: Float>(xd: &[T], xi: T) -> Option<usize> {
    let n = xd.len();
    if n < 2 || !(xd[0] <= xi && xi <= xd[n - 1]) {
        return None;
    }

    Some(bisect(xd, xi))
}

/// Index of the lower node of the segment to use for `xi`,
/// saturating to the first or last segment when `xi` is outside the grid.
///
/// Returns 0 for grids with fewer than two nodes.
#[inline]
pub fn bracket_clamped<T: Float>(xd: &[T], xi: T) -> usize {
    let n = xd.len();
    if n < 2 || xi <= xd[0] {
        return 0;
    }
    if xi >= xd[n - 1] {
        return n - 2;
    }

    bisect(xd, xi)
}

/// Check whether each node is strictly greater than the one before it.
/// Empty and single-node sequences pass.
pub fn ascends_strictly<T: Float>(xd: &[T]) -> bool {
    xd.windows(2).all(|w| w[0] < w[1])
}

/// Bisection on `[0, n - 1]` with the bounds already known to hold `xi`.
#[inline]
fn bisect<T: Float>(xd: &[T], xi: T) -> usize {
    let mut left = 0;
    let mut right = xd.len() - 1;

    while right - left > 1 {
        let mid = (left + right) / 2;
        if xi < xd[mid] {
            right = mid;
        } else {
            left = mid;
        }
    }

    left
}
