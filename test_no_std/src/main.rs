//! Building this module successfully guarantees that the library is no-std compatible

#![no_std]
#![no_main]

use core::panic::PanicInfo;

use pwl_interp::{bracket5, pwl_basis_1d, pwl_value_1d, Interp1D, PiecewiseLinear1D};

#[panic_handler]
fn panic(_info: &PanicInfo) -> ! {
    // We can't print, so there's not much to do here
    loop {}
}

#[no_mangle]
pub fn _start() -> ! {
    let xd = [0.0_f64, 2.0, 5.0, 10.0];
    let yd = [-28.0_f64, 10.0, -8.0, 162.0];
    let xi = [-1.0_f64, 1.0, 11.0];

    let mut yi = [0.0; 3];
    let mut b = [0.0; 12];

    let _ = bracket5(&xd, xi[1]);
    pwl_value_1d(&xd, &yd, &xi, &mut yi).unwrap();
    pwl_basis_1d(&xd, &xi, &mut b).unwrap();
    PiecewiseLinear1D::new(&xd, &yd)
        .unwrap()
        .eval(&xi, &mut yi)
        .unwrap();

    loop {} // We don't actually run this, just compile it
}
