//! Run the piecewise-linear interpolant over the dataset battery and print
//! the error at the nodes, then a coarse table of interpolated values.

use pwl_interp::one_dim::linear::pwl_value_1d_alloc;
use pwl_interp::problems::problems;
use pwl_interp::utils::linspace;

/// Number of evenly spaced points in each printed table
const NTABLE: usize = 11;

fn main() -> Result<(), &'static str> {
    println!("pwl_interp_1d: interpolation error at the data nodes");
    println!();
    println!("  Prob  Nodes    Error  Title");
    for (i, p) in problems().enumerate() {
        println!(
            "  {:>4}  {:>5}  {:>7.1e}  {}",
            i + 1,
            p.data_num(),
            p.interp_error()?,
            p.title
        );
    }

    for (i, p) in problems().enumerate() {
        let (xmin, xmax) = p.x_range();
        let xi = linspace(xmin, xmax, NTABLE);
        let yi = pwl_value_1d_alloc(p.xd, p.yd, &xi)?;

        println!();
        println!("Problem {}: {}", i + 1, p.title);
        println!("  {:>14}  {:>14}", "x", "p(x)");
        for (x, y) in xi.iter().zip(yi.iter()) {
            println!("  {x:>14.6}  {y:>14.6}");
        }
    }

    Ok(())
}
