//! Convenience methods for building observation grids and measuring error,
//! echoing (but not exactly matching) methods common in scripting languages.
use num_traits::Float;

/// Generates evenly spaced values from start to stop,
/// including the endpoint. A single value is just `start`.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    if n < 2 {
        return vec![start; n];
    }
    let dx: T = (stop - start) / T::from(n - 1).unwrap();
    (0..n).map(|i| start + T::from(i).unwrap() * dx).collect()
}

/// Euclidean norm of the difference `a - b`.
///
/// # Errors
/// * If `a` and `b` differ in length
pub fn norm_affine<T: Float>(a: &[T], b: &[T]) -> Result<T, &'static str> {
    if a.len() != b.len() {
        return Err("Length mismatch");
    }

    let sumsq = a
        .iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&x, &y)| acc + (x - y) * (x - y));

    Ok(sumsq.sqrt())
}

#[cfg(test)]
mod test {
    use super::{linspace, norm_affine};

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
        assert!(linspace(3.0, 7.0, 0).is_empty());
    }

    #[test]
    fn test_norm_affine() {
        assert_eq!(norm_affine(&[4.0, 1.0], &[1.0, 5.0]).unwrap(), 5.0);
        assert_eq!(norm_affine::<f64>(&[], &[]).unwrap(), 0.0);
        assert!(norm_affine(&[1.0], &[1.0, 2.0]).is_err());
    }
}
