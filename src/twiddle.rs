use crate::float::Float;
use num_complex::Complex;
use num_traits::Float as _; // enable cos/sin on f64 without std

/// Computes `exp(-2*pi*i*index/size)` (or its conjugate for the inverse
/// direction). Carried over from the twiddle-factor helper the rest of the
/// `fourier` family of crates shares; the planner core itself never calls
/// this -- it is here for the [`Planner`](crate::Planner) implementations
/// that supply the twiddle passes this crate recurses into.
pub fn compute_twiddle<T: Float>(index: usize, size: usize, forward: bool) -> Complex<T> {
    let theta = (index * 2) as f64 * core::f64::consts::PI / size as f64;
    let twiddle = Complex::new(
        T::from_f64(theta.cos()).unwrap(),
        T::from_f64(-theta.sin()).unwrap(),
    );
    if forward {
        twiddle
    } else {
        twiddle.conj()
    }
}
