//! A fixed battery of one-dimensional datasets for exercising the interpolants.
//!
//! Every dataset has strictly increasing nodes and one value per node.
//! Indices run from 1 to [`PROBLEM_COUNT`].

/// Number of datasets in the battery
pub const PROBLEM_COUNT: usize = 8;

/// Node locations and values for one dataset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Problem {
    pub title: &'static str,
    pub xd: &'static [f64],
    pub yd: &'static [f64],
}

impl Problem {
    /// Number of nodes
    pub fn data_num(&self) -> usize {
        self.xd.len()
    }

    /// First and last node locations
    pub fn x_range(&self) -> (f64, f64) {
        (self.xd[0], self.xd[self.xd.len() - 1])
    }

    /// Error of the interpolant at its own nodes,
    /// `|| p(xd) - yd || / nd`. Zero up to roundoff for a correct interpolant.
    #[cfg(feature = "std")]
    pub fn interp_error(&self) -> Result<f64, &'static str> {
        let yi = crate::one_dim::linear::pwl_value_1d_alloc(self.xd, self.yd, self.xd)?;
        let err = crate::utils::norm_affine(&yi, self.yd)?;
        Ok(err / self.data_num() as f64)
    }
}

/// Get dataset `index`, counting from 1.
///
/// # Errors
/// * If `index` is not in `1..=PROBLEM_COUNT`
pub fn problem(index: usize) -> Result<Problem, &'static str> {
    let (title, xd, yd): (&'static str, &'static [f64], &'static [f64]) = match index {
        1 => ("Cubic (x-1)(x-4)(x-7), 4 nodes", &P01_X, &P01_Y),
        2 => ("Akima (1970) test data", &P02_X, &P02_Y),
        3 => ("Fritsch-Carlson monotone test data", &P03_X, &P03_Y),
        4 => ("Runge function 1/(1+25x^2), 11 even nodes", &P04_X, &P04_Y),
        5 => ("Unit step near x = 5", &P05_X, &P05_Y),
        6 => ("sin(x) on [0, 2 pi], 9 even nodes", &P06_X, &P06_Y),
        7 => ("exp(x) on [-2, 2], 7 uneven nodes", &P07_X, &P07_Y),
        8 => ("Line y = 2x + 3, 6 uneven nodes", &P08_X, &P08_Y),
        _ => return Err("Unknown problem index"),
    };

    Ok(Problem { title, xd, yd })
}

/// Iterate over the whole battery in index order.
pub fn problems() -> impl Iterator<Item = Problem> {
    (1..=PROBLEM_COUNT).filter_map(|i| problem(i).ok())
}

const P01_X: [f64; 4] = [0.0, 2.0, 5.0, 10.0];
const P01_Y: [f64; 4] = [-28.0, 10.0, -8.0, 162.0];

const P02_X: [f64; 11] = [0.0, 2.0, 3.0, 5.0, 6.0, 8.0, 9.0, 11.0, 12.0, 14.0, 15.0];
const P02_Y: [f64; 11] = [10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.5, 15.0, 50.0, 60.0, 85.0];

const P03_X: [f64; 9] = [7.99, 8.09, 8.19, 8.7, 9.2, 10.0, 12.0, 15.0, 20.0];
const P03_Y: [f64; 9] = [
    0.0, 2.76429e-5, 4.37498e-2, 0.169183, 0.469428, 0.943740, 0.998636, 0.999919, 0.999994,
];

const P04_X: [f64; 11] = [-1.0, -0.8, -0.6, -0.4, -0.2, 0.0, 0.2, 0.4, 0.6, 0.8, 1.0];
const P04_Y: [f64; 11] = [
    0.038461538461538464,
    0.058823529411764705,
    0.1,
    0.2,
    0.5,
    1.0,
    0.5,
    0.2,
    0.1,
    0.058823529411764705,
    0.038461538461538464,
];

const P05_X: [f64; 12] = [0.0, 1.0, 2.0, 3.0, 4.0, 4.9, 5.1, 6.0, 7.0, 8.0, 9.0, 10.0];
const P05_Y: [f64; 12] = [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0];

const P06_X: [f64; 9] = [
    0.0,
    0.7853981633974483,
    1.5707963267948966,
    2.356194490192345,
    3.141592653589793,
    3.9269908169872414,
    4.71238898038469,
    5.497787143782138,
    6.283185307179586,
];
const P06_Y: [f64; 9] = [
    0.0,
    0.7071067811865476,
    1.0,
    0.7071067811865476,
    0.0,
    -0.7071067811865476,
    -1.0,
    -0.7071067811865476,
    0.0,
];

const P07_X: [f64; 7] = [-2.0, -1.5, -0.5, 0.0, 0.25, 1.0, 2.0];
const P07_Y: [f64; 7] = [
    0.1353352832366127,
    0.22313016014842982,
    0.6065306597126334,
    1.0,
    1.2840254166877414,
    2.718281828459045,
    7.38905609893065,
];

const P08_X: [f64; 6] = [-3.0, -1.0, 0.0, 0.5, 2.0, 4.5];
const P08_Y: [f64; 6] = [-3.0, 1.0, 3.0, 4.0, 7.0, 12.0];
